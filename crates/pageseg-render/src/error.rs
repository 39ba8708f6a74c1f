//! Error types for pageseg-render

use thiserror::Error;

/// Errors that can occur while rendering overlays
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pageseg_core::Error),

    /// Invalid style parameter
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
