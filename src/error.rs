//! Error types for the genealogy toolkit
//!
//! Library code returns [`GenealogyError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for genealogy operations
pub type GenealogyResult<T> = Result<T, GenealogyError>;

/// Main error type for genealogy operations
#[derive(Error, Debug)]
pub enum GenealogyError {
    /// Outline document is missing
    #[error("outline source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Tree artifact could not be decoded
    #[error("invalid tree artifact {file}: {message}")]
    InvalidArtifact { file: PathBuf, message: String },

    /// Configuration file could not be decoded
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No node name matched the search text
    #[error("no node matching '{needle}'")]
    NodeNotFound { needle: String },

    /// Extraction removed the root itself
    #[error("extract mode '{mode}' leaves no nodes")]
    EmptyExtract { mode: String },

    /// Unrecognised extraction mode
    #[error("invalid extract mode '{mode}' (expected subtree, path, id_max:<n> or to_name_depth)")]
    InvalidExtractMode { mode: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
