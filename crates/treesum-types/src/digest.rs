use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Content fingerprint of a file.
///
/// A `Digest` is the 128-bit hash of a file's content. Identical content
/// always produces the same `Digest`, so files can be matched across
/// directory trees regardless of path or timestamp. Compared and hashed by
/// exact byte equality; collisions are assumed negligible and not handled.
///
/// Serializes as a 32-character lowercase hex string, which is the form the
/// manifest interchange format carries in its `md5` fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 16]);

impl Digest {
    /// Create a `Digest` from a pre-computed hash.
    pub const fn from_hash(hash: [u8; 16]) -> Self {
        Self(hash)
    }

    /// The raw 16-byte hash.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 16 {
            return Err(TypeError::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 16]> for Digest {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; 16] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let digest = Digest::from_hash([0xab; 16]);
        let hex = digest.to_hex();
        let parsed = Digest::from_hex(&hex).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn to_hex_is_lowercase() {
        let digest = Digest::from_hash([0xAB; 16]);
        assert_eq!(digest.to_hex(), "ab".repeat(16));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = Digest::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 16,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let err = Digest::from_hex(&"zz".repeat(16)).unwrap_err();
        assert!(matches!(err, TypeError::InvalidHex(_)));
    }

    #[test]
    fn short_hex_is_8_chars() {
        let digest = Digest::from_hash([1; 16]);
        assert_eq!(digest.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let digest = Digest::from_hash([7; 16]);
        let display = format!("{digest}");
        assert_eq!(display.len(), 32);
        assert_eq!(display, digest.to_hex());
    }

    #[test]
    fn serde_uses_hex_string() {
        let digest = Digest::from_hash([0x0f; 16]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(16)));
        let parsed: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        let result: Result<Digest, _> = serde_json::from_str("\"not hex\"");
        assert!(result.is_err());
    }

    #[test]
    fn ordering_is_consistent() {
        let low = Digest::from_hash([0; 16]);
        let high = Digest::from_hash([1; 16]);
        assert!(low < high);
    }
}
