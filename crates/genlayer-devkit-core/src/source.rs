//! Contract source text handed to the validator.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DevkitError, Result};

/// Where a piece of contract source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Rendered by the binder in this process.
    Generated,
    /// Read from a file or supplied by the caller.
    External,
}

/// Contract source text plus its origin. Lives for a single call.
#[derive(Debug, Clone)]
pub struct ContractSource {
    pub text: String,
    pub origin: Origin,
    pub path: Option<PathBuf>,
}

impl ContractSource {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Generated,
            path: None,
        }
    }

    pub fn external(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::External,
            path: None,
        }
    }

    /// Read a contract file. Fails if it is missing, unreadable, or not UTF-8.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DevkitError::SourceRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            text,
            origin: Origin::External,
            path: Some(path.to_path_buf()),
        })
    }
}
