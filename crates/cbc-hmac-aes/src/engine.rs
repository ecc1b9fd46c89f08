//! AES-CBC with PKCS#7 padding over the RustCrypto block-cipher crates.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use cbc_hmac::{CbcEngine, EngineError, IV_LEN};

/// Software AES-CBC engine.
///
/// Stateless; one instance can serve any number of composers concurrently.
/// The AES variant is chosen by key length (16, 24, or 32 bytes), which the
/// composer derives from the variant's combined key size.
#[derive(Debug, Default, Clone, Copy)]
pub struct AesCbcEngine;

impl AesCbcEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }
}

impl CbcEngine for AesCbcEngine {
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        match key.len() {
            16 => encrypt_with::<Aes128>(plaintext, key, iv),
            24 => encrypt_with::<Aes192>(plaintext, key, iv),
            32 => encrypt_with::<Aes256>(plaintext, key, iv),
            other => Err(EngineError::UnsupportedKeyLength(other)),
        }
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, EngineError> {
        match key.len() {
            16 => decrypt_with::<Aes128>(ciphertext, key, iv),
            24 => decrypt_with::<Aes192>(ciphertext, key, iv),
            32 => decrypt_with::<Aes256>(ciphertext, key, iv),
            other => Err(EngineError::UnsupportedKeyLength(other)),
        }
    }
}

fn encrypt_with<C>(plaintext: &[u8], key: &[u8], iv: &[u8; IV_LEN]) -> Result<Vec<u8>, EngineError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| EngineError::UnsupportedKeyLength(key.len()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn decrypt_with<C>(ciphertext: &[u8], key: &[u8], iv: &[u8; IV_LEN]) -> Result<Vec<u8>, EngineError>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| EngineError::UnsupportedKeyLength(key.len()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| EngineError::MalformedCiphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbc_hmac::BLOCK_LEN;

    const IV: [u8; IV_LEN] = [0u8; IV_LEN];

    // NIST SP 800-38A F.2.1, first block: AES-128-CBC of one 16-byte block.
    #[test]
    fn aes128_cbc_known_first_block() {
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let iv: [u8; IV_LEN] = hex::decode("000102030405060708090a0b0c0d0e0f")
            .unwrap()
            .try_into()
            .unwrap();
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let ciphertext = AesCbcEngine::new().encrypt(&plaintext, &key, &iv).unwrap();
        assert_eq!(
            hex::encode(&ciphertext[..BLOCK_LEN]),
            "7649abac8119b246cee98e9b12e9197d"
        );
        // One padding block follows the data block.
        assert_eq!(ciphertext.len(), 2 * BLOCK_LEN);
    }

    #[test]
    fn round_trip_all_key_lengths() {
        let engine = AesCbcEngine::new();
        for key_len in [16, 24, 32] {
            let key = vec![0x42u8; key_len];
            let ciphertext = engine.encrypt(b"attack at dawn", &key, &IV).unwrap();
            assert_eq!(ciphertext.len(), BLOCK_LEN);
            let plaintext = engine.decrypt(&ciphertext, &key, &IV).unwrap();
            assert_eq!(plaintext, b"attack at dawn");
        }
    }

    #[test]
    fn empty_plaintext_pads_to_one_block() {
        let engine = AesCbcEngine::new();
        let key = [0x42u8; 16];
        let ciphertext = engine.encrypt(b"", &key, &IV).unwrap();
        assert_eq!(ciphertext.len(), BLOCK_LEN);
        let plaintext = engine.decrypt(&ciphertext, &key, &IV).unwrap();
        assert!(plaintext.is_empty());
    }

    #[test]
    fn unsupported_key_lengths_rejected() {
        let engine = AesCbcEngine::new();
        for key_len in [0, 15, 17, 33] {
            let key = vec![0u8; key_len];
            assert!(matches!(
                engine.encrypt(b"x", &key, &IV),
                Err(EngineError::UnsupportedKeyLength(l)) if l == key_len
            ));
            assert!(matches!(
                engine.decrypt(&[0u8; BLOCK_LEN], &key, &IV),
                Err(EngineError::UnsupportedKeyLength(l)) if l == key_len
            ));
        }
    }

    #[test]
    fn partial_block_ciphertext_is_malformed() {
        let engine = AesCbcEngine::new();
        let key = [0x42u8; 16];
        for len in [1, 15, 17, 31] {
            assert!(matches!(
                engine.decrypt(&vec![0u8; len], &key, &IV),
                Err(EngineError::MalformedCiphertext)
            ));
        }
    }

    #[test]
    fn empty_ciphertext_is_malformed() {
        let engine = AesCbcEngine::new();
        assert!(matches!(
            engine.decrypt(b"", &[0x42u8; 16], &IV),
            Err(EngineError::MalformedCiphertext)
        ));
    }
}
