// src/errors.rs

//! Error types for decoding node output.

use thiserror::Error;

/// Main error type for core decoding operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input is not a valid hexadecimal string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Hex value is valid but does not fit the target integer
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
