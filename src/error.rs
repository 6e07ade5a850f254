//! Error types for QR code rendering

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing a QR code
#[derive(Error, Debug)]
pub enum Error {
    /// Hex color string is malformed (wrong length or non-hex characters)
    #[error("invalid color hex: {0:?}")]
    InvalidColor(String),

    /// Scale multiplier is outside `1..=MAX_SCALE`
    #[error("invalid scale: {0} (must be between 1 and {max})", max = crate::render::MAX_SCALE)]
    InvalidScale(u32),

    /// Style name is not one of square, rounded or triangle
    #[error("unknown style: {0:?}")]
    UnknownStyle(String),

    /// The encoder rejected the content, e.g. it exceeds the symbol capacity
    #[error("failed to create QR code: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    /// Output destination could not be created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("failed to save QR code: {0}")]
    Image(#[from] image::ImageError),
}
