//! Error types for pombump
//!
//! Errors are split by the stage that produces them: version text handling
//! and descriptor access. `PomBumpError` wraps both for the CLI layer.

use std::path::PathBuf;

/// Errors raised while parsing or transitioning a version
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The version text does not start with `<digits>.<digits>.<digits>`
    #[error("Unsupported version string: '{input}'")]
    Parse { input: String },

    /// Incrementing a component would leave the integer range
    #[error("Cannot increment {component} component past {value}")]
    Overflow { component: &'static str, value: u64 },
}

/// Errors raised while loading, inspecting, or writing a descriptor
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// No namespace-qualified version element under the project root
    #[error("Could not read the project version from {}", .path.display())]
    FieldMissing { path: PathBuf },

    /// The descriptor is not well-formed XML
    #[error("Malformed descriptor {}: {message}", .path.display())]
    Xml { path: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for pombump
#[derive(Debug, thiserror::Error)]
pub enum PomBumpError {
    /// Version error
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Descriptor error
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

impl From<std::io::Error> for PomBumpError {
    fn from(err: std::io::Error) -> Self {
        PomBumpError::Descriptor(DescriptorError::Io(err))
    }
}
