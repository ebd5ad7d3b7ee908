//! Error types for the parafold paragraph reconstruction library.

use thiserror::Error;

/// Primary error type for fragment loading and paragraph extraction.
#[derive(Error, Debug)]
pub enum ReflowError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fragment dump error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("page {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("page {page} has invalid geometry: {width}x{height}")]
    InvalidPageGeometry { page: usize, width: f64, height: f64 },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Convenience Result type alias for ReflowError.
pub type Result<T> = std::result::Result<T, ReflowError>;
