//! Raw CBC cipher engine capability.
//!
//! The composer in [`crate::aead`] performs key splitting, MAC computation,
//! and tag verification itself; an engine only runs the block cipher in CBC
//! mode with PKCS#7 padding. An engine is resolved once, at composition time,
//! and injected; the composer never probes for backends.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Byte length of the initialisation vector (16 bytes = 128 bits, fixed for
/// every variant).
pub const IV_LEN: usize = 16;

/// Byte length of a CBC block (the AES block size).
pub const BLOCK_LEN: usize = 16;

/// Errors produced by a cipher engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine does not support the supplied raw key length.
    #[error("unsupported cipher key length: {0} bytes")]
    UnsupportedKeyLength(usize),

    /// The ciphertext length or padding is invalid.
    #[error("malformed ciphertext")]
    MalformedCiphertext,
}

/// A raw CBC block-cipher engine with PKCS#7 padding.
///
/// Implementations must be deterministic: the same key, IV, and input always
/// produce byte-identical output. Key material is borrowed for the duration
/// of the call only and must not be retained.
#[cfg_attr(test, mockall::automock)]
pub trait CbcEngine: Send + Sync {
    /// Encrypt `plaintext` under `key`, padding to [`BLOCK_LEN`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedKeyLength`] if the engine cannot use
    /// a key of this length.
    fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8; IV_LEN])
        -> Result<Vec<u8>, EngineError>;

    /// Decrypt `ciphertext` under `key`, stripping the padding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedKeyLength`] for a bad key length and
    /// [`EngineError::MalformedCiphertext`] if the input is not a whole
    /// number of blocks or the padding is invalid.
    fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8; IV_LEN])
        -> Result<Vec<u8>, EngineError>;
}

impl fmt::Debug for dyn CbcEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn CbcEngine")
    }
}

impl<T: CbcEngine + ?Sized> CbcEngine for Box<T> {
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        (**self).encrypt(plaintext, key, iv)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        (**self).decrypt(ciphertext, key, iv)
    }
}

impl<T: CbcEngine + ?Sized> CbcEngine for Arc<T> {
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        (**self).encrypt(plaintext, key, iv)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        (**self).decrypt(ciphertext, key, iv)
    }
}

impl<T: CbcEngine + ?Sized> CbcEngine for &T {
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        (**self).encrypt(plaintext, key, iv)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        (**self).decrypt(ciphertext, key, iv)
    }
}
