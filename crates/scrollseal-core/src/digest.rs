use serde::{Deserialize, Serialize};
use sha3::{Digest as Sha3Digest, Sha3_256};

/// Byte length of every digest produced by this crate.
pub const DIGEST_LEN: usize = 32;

/// A SHA3-256 digest.
///
/// Leaf digests, Merkle roots, and sealed roots are all values of this type.
/// The wire representation is lowercase hex, 64 characters, no prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(
    /// Raw digest bytes.
    pub [u8; DIGEST_LEN],
);

impl Digest {
    /// Hashes an arbitrary byte string.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha3_256::new();
        hasher.update(bytes);
        Digest(hasher.finalize().into())
    }

    /// Hashes the UTF-8 encoding of a verse.
    ///
    /// The verse is expected to be NFC-normalized already; this function does
    /// not normalize (see [`crate::normalize::nfc`]).
    pub fn of_verse(verse: &str) -> Self {
        Self::of_bytes(verse.as_bytes())
    }

    /// Hashes the concatenation of two digests, `left || right`.
    pub fn of_pair(left: &Digest, right: &Digest) -> Self {
        let mut hasher = Sha3_256::new();
        hasher.update(left.0);
        hasher.update(right.0);
        Digest(hasher.finalize().into())
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Residue of the digest, read as a big-endian unsigned integer, mod 19.
    ///
    /// Reduced byte-by-byte so the 256-bit value never needs to be
    /// materialized: `acc = (acc * 256 + b) mod 19`.
    pub fn mod19(&self) -> u8 {
        self.0
            .iter()
            .fold(0u32, |acc, &b| (acc * 256 + u32::from(b)) % 19) as u8
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
