//! Content addressing for facts.
//!
//! A fact's identity is a blake3 digest over a length-prefixed encoding of its
//! four fields, so `("ab", "c")` and `("a", "bc")` never collide by
//! concatenation and swapping slots yields a different hash.
//!
//! # Examples
//!
//! ```
//! use factmatrix_core::fact::{create_fact_hash, FactQuad};
//!
//! let blue = FactQuad::new("Name", "Alex", "House", "Blue");
//! let swapped = FactQuad::new("House", "Blue", "Name", "Alex");
//! assert_eq!(create_fact_hash(&blue), create_fact_hash(&blue.clone()));
//! assert_ne!(create_fact_hash(&blue), create_fact_hash(&swapped));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::quad::FactQuad;

const DOMAIN: &[u8] = b"factmatrix.fact.v1";

/// Opaque 256-bit fact identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FactHash(pub [u8; 32]);

impl FactHash {
    /// All-zero hash, returned in defaulted details for unknown facts.
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding (64 characters).
    pub fn to_hex(&self) -> String {
        blake3::Hash::from_bytes(self.0).to_hex().to_string()
    }

    /// First 8 hex characters, for log lines.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(8);
        hex
    }
}

/// Compute the deterministic identifier of a fact.
pub fn create_fact_hash(quad: &FactQuad) -> FactHash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN);
    for field in [&quad.category1, &quad.value1, &quad.category2, &quad.value2] {
        hasher.update(&(field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    FactHash(*hasher.finalize().as_bytes())
}

impl fmt::Display for FactHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for FactHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FactHash({})", self.short())
    }
}

impl FromStr for FactHash {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        blake3::Hash::from_hex(s)
            .map(|h| Self(*h.as_bytes()))
            .map_err(|e| format!("invalid fact hash {s:?}: {e}"))
    }
}

impl Serialize for FactHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FactHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
