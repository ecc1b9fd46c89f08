//! Error types shared across the composer and engine crates.

use thiserror::Error;

use crate::engine::EngineError;

/// Top-level error type for content encryption and decryption.
///
/// [`Error::AuthenticationFailed`] carries no detail beyond a generic
/// message: a decryption failure must not reveal which part of the
/// authenticated data mismatched.
#[derive(Debug, Error)]
pub enum Error {
    /// No cipher engine backend with the requested name is available.
    #[error("no usable cipher engine backend: {backend}")]
    EngineUnavailable { backend: String },

    /// The supplied authentication tag does not match the computed tag.
    #[error("authentication tag mismatch")]
    AuthenticationFailed,

    /// The content encryption key length does not match the variant.
    #[error("invalid content encryption key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The initialisation vector is not exactly 16 bytes.
    #[error("invalid initialisation vector length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// The underlying cipher engine failed.
    #[error("cipher engine failure: {0}")]
    Engine(#[from] EngineError),
}
