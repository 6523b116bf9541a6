// ============================================================================
// metaview-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the metaview-core Library
//
// This module defines the error type shared by every part of the library.
// Parser backends convert their crate-specific failures into CoreError so the
// retriever can log and absorb them uniformly.
//
// KEY COMPONENTS:
// - CoreError: Enum of every failure the library can surface
// - CoreResult: Result alias used throughout the crate
// - parse_error: Helper attaching the parser id to a backend failure

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::path::PathBuf;

/// Errors produced by metaview-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Unknown parser: {0}")]
    UnknownParser(String),

    #[error("{parser} parser failed: {message}")]
    Parse {
        parser: &'static str,
        message: String,
    },

    #[error("ffprobe failed: {0}")]
    Ffprobe(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Rendering was asked for metadata that has nothing to show.
    #[error("Metadata has no displayable entries")]
    EmptyMetadata,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for metaview-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Wraps a backend failure with the id of the parser that raised it.
pub(crate) fn parse_error(parser: &'static str, err: impl std::fmt::Display) -> CoreError {
    CoreError::Parse {
        parser,
        message: err.to_string(),
    }
}
