#![forbid(unsafe_code)]

//! Project descriptor access
//!
//! The version logic never touches XML directly. It reads and replaces the
//! version text through the `Descriptor` trait, which `PomDocument`
//! implements for Maven `pom.xml` files.

pub mod pom;

pub use pom::{POM_FILE_NAME, POM_NAMESPACE, PomDocument, resolve_descriptor_path};

use crate::error::DescriptorError;
use std::path::Path;

/// A loaded project descriptor holding a single version field
pub trait Descriptor: Sized {
    /// Read and parse the descriptor at `path`
    fn load(path: &Path) -> Result<Self, DescriptorError>;

    /// Returns the current text of the version field
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::FieldMissing` if the descriptor has no
    /// version field.
    fn version_text(&self) -> Result<&str, DescriptorError>;

    /// Replace the text of the version field, leaving everything else intact
    fn set_version_text(&mut self, text: &str) -> Result<(), DescriptorError>;

    /// Serialize the whole descriptor to `path`, overwriting it
    fn write(&self, path: &Path) -> Result<(), DescriptorError>;
}
