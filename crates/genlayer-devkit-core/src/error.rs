//! Unified error types for the genlayer-devkit toolkit.
//!
//! Validator findings are not errors: a contract that fails the structure
//! checks still produces a successful [`crate::validator::ValidationReport`].
//! Only the conditions below abort an operation.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during genlayer-devkit operations.
#[derive(Error, Debug)]
pub enum DevkitError {
    // --- Templates ---

    /// The requested archetype is not in the catalog.
    #[error("unknown template: {id} (available: {available})")]
    TemplateNotFound { id: String, available: String },

    /// A declared parameter slot has neither a supplied value nor a default.
    #[error("template '{archetype}' requires parameter '{slot}'")]
    MissingParameter { archetype: String, slot: String },

    /// A parameter value does not fit the position its slot is used in.
    #[error("invalid value {value:?} for parameter '{slot}': {reason}")]
    ParameterFormat {
        slot: String,
        value: String,
        reason: String,
    },

    /// Handlebars rendering failed (e.g. the body references an undeclared slot).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Sources ---

    /// A contract source file could not be read or is not valid UTF-8.
    #[error("cannot read contract source {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Configuration ---

    /// The project configuration file (`genlayer.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The requested network has no entry in the configuration.
    #[error("unknown network: {name} (configured: {configured})")]
    UnknownNetwork { name: String, configured: String },

    // --- Project ---

    /// Attempted to create a project in a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    /// Attempted to overwrite an existing contract file.
    #[error("file already exists: {0} (use --force to overwrite)")]
    FileExists(PathBuf),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, DevkitError>`.
pub type Result<T> = std::result::Result<T, DevkitError>;
