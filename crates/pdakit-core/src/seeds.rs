//! Seed limits and typed seed construction.
//!
//! Seeds are opaque byte strings supplied in a caller-chosen order. The
//! order is significant: derivation and later validation must see the
//! identical sequence. Structural limits are enforced before any hashing.

use crate::address::Address;
use crate::errors::{PdaResult, PdakitError};

/// Maximum length of a single seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of caller seeds per derivation. The bump byte is
/// appended internally on top of these.
pub const MAX_SEEDS: usize = 16;

/// Check count and per-seed length limits.
pub fn validate_seeds(seeds: &[&[u8]]) -> PdaResult<()> {
    if seeds.len() > MAX_SEEDS {
        return Err(PdakitError::invalid_seeds(format!(
            "{} seeds exceeds the maximum of {MAX_SEEDS}",
            seeds.len()
        )));
    }
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(PdakitError::invalid_seeds(format!(
                "seed {index} is {} bytes, limit is {MAX_SEED_LEN}",
                seed.len()
            )));
        }
    }
    Ok(())
}

/// Ordered seed list with typed push helpers for the encodings used in
/// practice: UTF-8 labels, little-endian integers, addresses, raw bytes.
///
/// The builder does not enforce limits on push; call [`Seeds::validate`]
/// (or let derivation do it) once the list is complete.
#[derive(Debug, Clone, Default)]
pub struct Seeds {
    parts: Vec<Vec<u8>>,
}

impl Seeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bytes(&mut self, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.parts.push(bytes.into());
        self
    }

    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.push_bytes(s.as_bytes().to_vec())
    }

    pub fn push_u8(&mut self, v: u8) -> &mut Self {
        self.push_bytes(v.to_le_bytes().to_vec())
    }

    pub fn push_u32(&mut self, v: u32) -> &mut Self {
        self.push_bytes(v.to_le_bytes().to_vec())
    }

    pub fn push_u64(&mut self, v: u64) -> &mut Self {
        self.push_bytes(v.to_le_bytes().to_vec())
    }

    pub fn push_address(&mut self, address: &Address) -> &mut Self {
        self.push_bytes(address.as_bytes().to_vec())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Borrow the seeds in the slice form the derivation functions take.
    pub fn as_slices(&self) -> Vec<&[u8]> {
        self.parts.iter().map(|p| p.as_slice()).collect()
    }

    pub fn validate(&self) -> PdaResult<()> {
        validate_seeds(&self.as_slices())
    }
}
