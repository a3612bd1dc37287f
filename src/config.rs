//! Run configuration resolved from command-line input
//!
//! pombump has no configuration file. Everything a run needs is carried by
//! `BumpRequest`.

use crate::descriptor::resolve_descriptor_path;
use crate::types::BumpLevel;
use std::path::{Path, PathBuf};

/// The bump to perform on one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpRequest {
    /// Component to increment, or `None` to leave the numbers alone
    pub level: Option<BumpLevel>,

    /// Keep the version suffix (`-SNAPSHOT`) after the bump
    pub keep_suffix: bool,

    /// Project directory, or the descriptor file itself
    pub project_path: PathBuf,
}

impl BumpRequest {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        BumpRequest {
            level: None,
            keep_suffix: true,
            project_path: project_path.into(),
        }
    }

    pub fn with_level(mut self, level: Option<BumpLevel>) -> Self {
        self.level = level;
        self
    }

    pub fn with_keep_suffix(mut self, keep_suffix: bool) -> Self {
        self.keep_suffix = keep_suffix;
        self
    }

    /// Descriptor file this request operates on
    pub fn descriptor_path(&self) -> PathBuf {
        resolve_descriptor_path(&self.project_path)
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}
