#![forbid(unsafe_code)]

//! pombump: bump the version of a Maven project in place
//!
//! The version text of a `pom.xml` is parsed into a `SemanticVersion`,
//! advanced by a patch, minor, or major bump, and written back without
//! disturbing the rest of the file.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod output;
pub mod types;
pub mod version;

// Re-export error types for convenient access
pub use error::{DescriptorError, PomBumpError, VersionError};

// Re-export core domain types for convenient access
pub use config::BumpRequest;
pub use types::{BumpLevel, SemanticVersion};
pub use version::{next_version, parse_version};
