use thiserror::Error;

/// Errors that can occur while lowering a slide document to VBA.
#[derive(Error, Debug)]
pub enum VbaConversionError {
    #[error("Formatting error during VBA generation: {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
}

/// A specialized Result type for VBA conversion operations.
pub type Result<T> = std::result::Result<T, VbaConversionError>;
