//! The AES_CBC_HMAC_SHA2 composer.
//!
//! Encrypt-then-MAC over an injected CBC engine.
//!
//! # Security invariants
//!
//! - The CEK splits into halves: the MAC half never reaches the cipher
//!   engine, the cipher half never reaches the HMAC.
//! - Decryption verifies the tag before the engine runs; unauthenticated
//!   ciphertext is never decrypted.
//! - Tag comparison is constant time.
//! - Key material and plaintext are never logged; events carry lengths and
//!   variant names only.

mod tag;

use tracing::{debug, warn};

use crate::engine::{CbcEngine, IV_LEN};
use crate::error::Error;
use crate::variant::Variant;

/// Output of [`CbcHmac::encrypt_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedContent {
    /// CBC ciphertext, PKCS#7 padded.
    pub ciphertext: Vec<u8>,
    /// Truncated authentication tag.
    pub tag: Vec<u8>,
}

/// AES-CBC + HMAC-SHA2 authenticated encryption over a pluggable engine.
///
/// The engine is fixed at construction; a composer never probes for or falls
/// back to another backend. Composers are stateless between calls and may be
/// shared across threads when the engine allows it.
#[derive(Debug, Clone)]
pub struct CbcHmac<E> {
    variant: Variant,
    engine: E,
}

impl<E: CbcEngine> CbcHmac<E> {
    /// Create a composer for `variant` driving `engine`.
    pub fn new(variant: Variant, engine: E) -> Self {
        Self { variant, engine }
    }

    /// The variant this composer implements.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Encrypt `plaintext` and authenticate it together with the encoded
    /// protected header and the optional AAD.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] if `cek` does not match the
    /// variant's combined key length, [`Error::InvalidIvLength`] if `iv` is
    /// not 16 bytes, and [`Error::Engine`] if the cipher engine fails. No
    /// partial output is produced on failure.
    pub fn encrypt_content(
        &self,
        plaintext: &[u8],
        cek: &[u8],
        iv: &[u8],
        aad: Option<&[u8]>,
        encoded_header: &[u8],
    ) -> Result<EncryptedContent, Error> {
        let (mac_key, enc_key) = self.split_cek(cek)?;
        let iv = check_iv(iv)?;

        let ciphertext = self.engine.encrypt(plaintext, enc_key, iv)?;
        let tag = tag::compute_tag(self.variant, mac_key, encoded_header, aad, iv, &ciphertext)?;

        debug!(
            variant = %self.variant,
            ciphertext_len = ciphertext.len(),
            "content encrypted"
        );
        Ok(EncryptedContent { ciphertext, tag })
    }

    /// Verify the tag, then decrypt `ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationFailed`] if the supplied tag does not
    /// match the recomputed one; the cipher engine is not invoked in that
    /// case and no plaintext is exposed. Length errors and engine failures
    /// propagate as in [`CbcHmac::encrypt_content`].
    pub fn decrypt_content(
        &self,
        ciphertext: &[u8],
        cek: &[u8],
        iv: &[u8],
        aad: Option<&[u8]>,
        encoded_header: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let (mac_key, enc_key) = self.split_cek(cek)?;
        let iv = check_iv(iv)?;

        let expected =
            tag::compute_tag(self.variant, mac_key, encoded_header, aad, iv, ciphertext)?;
        if !tag::verify_tag(&expected, tag) {
            warn!(variant = %self.variant, "authentication tag mismatch");
            return Err(Error::AuthenticationFailed);
        }

        let plaintext = self.engine.decrypt(ciphertext, enc_key, iv)?;
        debug!(
            variant = %self.variant,
            plaintext_len = plaintext.len(),
            "content decrypted"
        );
        Ok(plaintext)
    }

    /// Split the CEK into its MAC and cipher halves.
    fn split_cek<'a>(&self, cek: &'a [u8]) -> Result<(&'a [u8], &'a [u8]), Error> {
        if cek.len() != self.variant.cek_len() {
            return Err(Error::InvalidKeyLength {
                expected: self.variant.cek_len(),
                actual: cek.len(),
            });
        }
        Ok(cek.split_at(cek.len() / 2))
    }
}

fn check_iv(iv: &[u8]) -> Result<&[u8; IV_LEN], Error> {
    iv.try_into().map_err(|_| Error::InvalidIvLength {
        expected: IV_LEN,
        actual: iv.len(),
    })
}
