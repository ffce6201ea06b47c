//! Candidate hashing for pdakit.
//!
//! All hashes are:
//! - deterministic
//! - domain-separated by the caller (see `crate::domain`)
//! - explicitly parameterized
//!
//! Supported algorithms:
//! - sha256
//!
//! No implicit defaults are allowed: callers name the algorithm, and the
//! convenience derivation wrappers pin sha256 because deployed addresses
//! depend on it.

use sha2::{Digest, Sha256};

use crate::errors::{PdaResult, PdakitError};

/// Hash algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlg {
    Sha256,
}

impl HashAlg {
    pub fn parse(s: &str) -> PdaResult<Self> {
        match s {
            "sha256" => Ok(HashAlg::Sha256),
            _ => Err(PdakitError::UnsupportedAlgorithm { name: s.to_string() }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

/// Hash a sequence of byte chunks as one contiguous message.
pub fn hash_chunks(alg: HashAlg, chunks: &[&[u8]]) -> [u8; 32] {
    match alg {
        HashAlg::Sha256 => {
            let mut h = Sha256::new();
            for chunk in chunks {
                h.update(chunk);
            }
            h.finalize().into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunking_does_not_affect_digest() {
        let whole = hash_chunks(HashAlg::Sha256, &[b"abcdef"]);
        let split = hash_chunks(HashAlg::Sha256, &[b"abc", b"def"]);
        assert_eq!(whole, split);
    }

    #[test]
    fn sha256_known_answer() {
        let h = hash_chunks(HashAlg::Sha256, &[b"abc"]);
        assert_eq!(
            hex::encode(h),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn parse_alg() {
        assert_eq!(HashAlg::parse("sha256").unwrap(), HashAlg::Sha256);
        assert!(HashAlg::parse("md5").is_err());
    }
}
