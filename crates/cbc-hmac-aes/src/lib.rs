//! Pure-Rust AES-CBC engine backend for the `cbc-hmac` composer.
//!
//! One backend ships today: [`AesCbcEngine`], built on the RustCrypto `aes`
//! and `cbc` crates. [`resolve`] maps a configured backend name to an engine
//! and fails fast with [`Error::EngineUnavailable`], so composition can never
//! proceed without a working cipher.

use std::sync::Arc;

use cbc_hmac::{CbcEngine, Error};

mod engine;

pub use engine::AesCbcEngine;

/// Name of the pure-Rust software backend accepted by [`resolve`].
pub const SOFT_BACKEND: &str = "soft";

/// Resolve a configured backend name to a cipher engine.
///
/// # Errors
///
/// Returns [`Error::EngineUnavailable`] for any name other than
/// [`SOFT_BACKEND`].
pub fn resolve(backend: &str) -> Result<Arc<dyn CbcEngine>, Error> {
    match backend {
        SOFT_BACKEND => Ok(Arc::new(AesCbcEngine::new())),
        other => Err(Error::EngineUnavailable {
            backend: other.to_owned(),
        }),
    }
}
