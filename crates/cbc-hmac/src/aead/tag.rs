//! Authentication tag computation and verification.
//!
//! The MAC input is the authenticated input, the IV, the ciphertext, and an
//! 8-byte big-endian bit count of the authenticated input. The authenticated
//! input is the encoded protected header, joined to the AAD with an ASCII `.`
//! only when AAD is present. The tag is the first half of the HMAC digest.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::error::Error;
use crate::variant::{HashAlg, Variant};

/// HMAC state dispatching over the three hash algorithms.
enum HmacState {
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
}

impl HmacState {
    fn new(variant: Variant, mac_key: &[u8]) -> Result<Self, Error> {
        let state = match variant.hash() {
            HashAlg::Sha256 => Hmac::new_from_slice(mac_key).map(HmacState::Sha256),
            HashAlg::Sha384 => Hmac::new_from_slice(mac_key).map(HmacState::Sha384),
            HashAlg::Sha512 => Hmac::new_from_slice(mac_key).map(HmacState::Sha512),
        };
        state.map_err(|_| Error::InvalidKeyLength {
            expected: variant.mac_key_len(),
            actual: mac_key.len(),
        })
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            HmacState::Sha256(mac) => mac.update(data),
            HmacState::Sha384(mac) => mac.update(data),
            HmacState::Sha512(mac) => mac.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            HmacState::Sha256(mac) => mac.finalize().into_bytes().to_vec(),
            HmacState::Sha384(mac) => mac.finalize().into_bytes().to_vec(),
            HmacState::Sha512(mac) => mac.finalize().into_bytes().to_vec(),
        }
    }
}

/// Compute the truncated authentication tag for one message.
///
/// The caller guarantees `mac_key` is the first half of a length-checked CEK.
pub(crate) fn compute_tag(
    variant: Variant,
    mac_key: &[u8],
    encoded_header: &[u8],
    aad: Option<&[u8]>,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, Error> {
    let mut mac = HmacState::new(variant, mac_key)?;

    // Authenticated input: the `.` separator and the AAD are fed only when
    // AAD is present. Absent and empty AAD are distinct inputs.
    mac.update(encoded_header);
    let mut auth_input_len = encoded_header.len() as u64;
    if let Some(aad) = aad {
        mac.update(b".");
        mac.update(aad);
        auth_input_len += 1 + aad.len() as u64;
    }

    mac.update(iv);
    mac.update(ciphertext);
    mac.update(&al_bytes(auth_input_len));

    let mut digest = mac.finalize();
    digest.truncate(variant.tag_len());
    Ok(digest)
}

/// The AL field: a 64-bit big-endian count of bits in the authenticated
/// input, covering the header and the optional dot-joined AAD.
fn al_bytes(auth_input_len: u64) -> [u8; 8] {
    (auth_input_len * 8).to_be_bytes()
}

/// Compare a supplied tag against the computed tag in constant time.
///
/// Tag length is public information; `ct_eq` short-circuits only on a length
/// mismatch and never on byte content.
pub(crate) fn verify_tag(expected: &[u8], supplied: &[u8]) -> bool {
    bool::from(expected.ct_eq(supplied))
}
