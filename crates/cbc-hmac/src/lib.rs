//! AES_CBC_HMAC_SHA2 authenticated content encryption (RFC 7518, section 5.2).
//!
//! This crate is intentionally free of concrete block-cipher dependencies.
//! The composer [`CbcHmac`] drives any CBC implementation supplied through
//! the [`CbcEngine`] trait; the companion `cbc-hmac-aes` crate ships the
//! software backend.
//!
//! # Construction
//!
//! ```text
//! mac_key || enc_key = cek                     (byte-length bisection)
//! ciphertext         = CBC-PKCS7(enc_key, iv, plaintext)
//! auth_input         = encoded_header [ || "." || aad ]
//! al                 = 64-bit big-endian bit count of auth_input
//! tag                = HMAC-SHA2(mac_key, auth_input || iv || ciphertext || al)[..tag_len]
//! ```
//!
//! The dot-joined AAD segment exists only when AAD is supplied; an absent AAD
//! and an empty AAD produce different tags.

pub mod aead;
pub mod engine;
pub mod error;
pub mod variant;

pub use aead::{CbcHmac, EncryptedContent};
pub use engine::{CbcEngine, EngineError, BLOCK_LEN, IV_LEN};
pub use error::Error;
pub use variant::{HashAlg, Variant, A128CBC_HS256, A192CBC_HS384, A256CBC_HS512, VARIANTS};
