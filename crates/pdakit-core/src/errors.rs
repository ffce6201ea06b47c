//! Error types for pdakit.
//!
//! All fallible operations in this crate return [`PdaResult`]. Variants are
//! stable and matchable; display strings are for humans and are not part of
//! the stability contract.

use thiserror::Error;

/// Result alias used across the crate.
pub type PdaResult<T> = Result<T, PdakitError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdakitError {
    /// The seed set violates a structural limit (count or per-seed length).
    /// Reported before any hashing is attempted.
    #[error("invalid seeds: {reason}")]
    InvalidSeeds { reason: String },

    /// Every bump in [0, 255] produced a valid curve point. Terminal for
    /// this seed set; the caller must supply different seeds.
    #[error("no viable bump: all 256 candidates decode to curve points")]
    PdaNotFound,

    /// Text that does not parse as a base58-encoded 32-byte address.
    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },

    /// A hash algorithm name this crate does not implement.
    #[error("unsupported hash algorithm: {name}")]
    UnsupportedAlgorithm { name: String },
}

impl PdakitError {
    pub fn invalid_seeds(reason: impl Into<String>) -> Self {
        Self::InvalidSeeds {
            reason: reason.into(),
        }
    }

    pub fn invalid_address(reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_seeds_message() {
        let e = PdakitError::invalid_seeds("17 seeds exceeds the maximum of 16");
        assert!(e.to_string().contains("invalid seeds"));
        assert!(e.to_string().contains("17 seeds"));
    }

    #[test]
    fn not_found_is_matchable() {
        let e = PdakitError::PdaNotFound;
        assert!(matches!(e, PdakitError::PdaNotFound));
    }
}
