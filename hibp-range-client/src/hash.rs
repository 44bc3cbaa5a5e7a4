//! SHA-1 hex digests and the prefix/suffix split used by the range API.

use std::fmt;

use sha1::{Digest, Sha1};

/// The length of a SHA1 hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of a full SHA1 digest in hex characters.
pub const HEX_LEN: usize = 40;

/// The length of the suffix that stays on the caller's machine.
pub const SUFFIX_LEN: usize = HEX_LEN - PREFIX_LEN;

/// Hex lookup table. Uppercase to match the casing the range API returns.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// An uppercase hex SHA1 digest.
///
/// Stored as 40 ASCII bytes so the prefix and suffix can be borrowed as
/// `&str` without allocating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha1Hex([u8; HEX_LEN]);

impl Sha1Hex {
    /// Encodes a raw 20-byte SHA1 hash.
    pub fn from_bytes(hash: &[u8; 20]) -> Self {
        let mut hex = [0u8; HEX_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }
        Self(hex)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every byte comes from HEX_CHARS, which is ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }

    /// The first [`PREFIX_LEN`] characters, the only part sent over the wire.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// Everything after the prefix, matched locally against the response.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }

    #[inline]
    pub fn split(&self) -> (&str, &str) {
        self.as_str().split_at(PREFIX_LEN)
    }
}

impl fmt::Display for Sha1Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Sha1Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sha1Hex").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for Sha1Hex {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Hashes the UTF-8 bytes of `input` with SHA1 and returns the uppercase hex digest.
pub fn sha1_hex(input: &str) -> Sha1Hex {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    let hash: [u8; 20] = hasher.finalize().into();
    Sha1Hex::from_bytes(&hash)
}
