//! Version text parsing and bump transitions

pub mod parser;
pub mod transition;

pub use parser::parse_version;
pub use transition::next_version;
