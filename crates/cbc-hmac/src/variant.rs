//! Variant parameter records for the AES_CBC_HMAC_SHA2 family.
//!
//! Each JOSE `enc` value maps to one immutable [`Variant`] record; every
//! behavioural difference between family members is captured by its fields.
//! The composer reads sizes from the record and never special-cases a
//! variant by name.

use std::fmt;

use crate::engine::IV_LEN;

// ---------------------------------------------------------------------------
// Hash algorithms
// ---------------------------------------------------------------------------

/// The SHA-2 family member backing a variant's HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlg {
    /// HMAC-SHA-256.
    Sha256,
    /// HMAC-SHA-384.
    Sha384,
    /// HMAC-SHA-512.
    Sha512,
}

impl HashAlg {
    /// Digest output length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlg::Sha256 => 32,
            HashAlg::Sha384 => 48,
            HashAlg::Sha512 => 64,
        }
    }
}

// ---------------------------------------------------------------------------
// Variant records
// ---------------------------------------------------------------------------

/// Parameters of one AES_CBC_HMAC_SHA2 family member.
///
/// The combined content encryption key always splits into equal MAC and
/// cipher halves, and its length equals the HMAC digest output length. Fields
/// are private so no record violating those relations can be constructed;
/// the family is the closed set of constants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    name: &'static str,
    hash: HashAlg,
    key_bits: usize,
}

/// AES-128-CBC with HMAC-SHA-256, truncated to a 16-byte tag.
pub const A128CBC_HS256: Variant = Variant {
    name: "A128CBC-HS256",
    hash: HashAlg::Sha256,
    key_bits: 256,
};

/// AES-192-CBC with HMAC-SHA-384, truncated to a 24-byte tag.
pub const A192CBC_HS384: Variant = Variant {
    name: "A192CBC-HS384",
    hash: HashAlg::Sha384,
    key_bits: 384,
};

/// AES-256-CBC with HMAC-SHA-512, truncated to a 32-byte tag.
pub const A256CBC_HS512: Variant = Variant {
    name: "A256CBC-HS512",
    hash: HashAlg::Sha512,
    key_bits: 512,
};

/// All family members, in key-size order.
pub const VARIANTS: [Variant; 3] = [A128CBC_HS256, A192CBC_HS384, A256CBC_HS512];

impl Variant {
    /// The JOSE `enc` header value naming this variant.
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// The HMAC hash algorithm.
    pub const fn hash(self) -> HashAlg {
        self.hash
    }

    /// Combined content encryption key size in bits (256, 384, or 512).
    pub const fn key_size_bits(self) -> usize {
        self.key_bits
    }

    /// Content encryption key size in bits; equal to
    /// [`Variant::key_size_bits`].
    pub const fn cek_size_bits(self) -> usize {
        self.key_bits
    }

    /// Initialisation vector size in bits (128 for every variant).
    pub const fn iv_size_bits(self) -> usize {
        IV_LEN * 8
    }

    /// Combined content encryption key length in bytes.
    pub const fn cek_len(self) -> usize {
        self.key_bits / 8
    }

    /// MAC key length in bytes (the first half of the CEK).
    pub const fn mac_key_len(self) -> usize {
        self.cek_len() / 2
    }

    /// Cipher key length in bytes (the second half of the CEK).
    pub const fn enc_key_len(self) -> usize {
        self.cek_len() / 2
    }

    /// Authentication tag length in bytes (half the HMAC digest output).
    pub const fn tag_len(self) -> usize {
        self.hash.output_len() / 2
    }

    /// Resolve a variant from its JOSE `enc` name.
    pub fn from_name(name: &str) -> Option<Variant> {
        VARIANTS.into_iter().find(|v| v.name == name)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
