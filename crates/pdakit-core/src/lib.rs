//! pdakit-core
//!
//! Core primitives for pdakit:
//! - 32-byte address type with base58 text encoding
//! - seed limits and typed seed construction
//! - candidate hashing with domain separation
//! - the bump search (derive) and validation (verify)
//! - runtime attestation interface for derived-authority checks

pub mod address;
pub mod authority;
pub mod curve;
pub mod derive;
pub mod errors;
pub mod hash;
pub mod seeds;

pub use crate::errors::{PdaResult, PdakitError};

/// Domain separation constants.
/// These must remain stable across versions: every deployed address
/// depends on them byte-for-byte.
pub mod domain {
    /// Suffix appended to every candidate digest. Pinned by the deployed
    /// derivation convention this crate interoperates with.
    pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::address::{Address, ADDRESS_BYTES};
    pub use crate::authority::{authorized_for, ExecutionContext};
    pub use crate::curve::{Curve, Ed25519};
    #[cfg(feature = "parallel")]
    pub use crate::derive::derive_parallel;
    pub use crate::derive::{
        address_for_bump, address_for_bump_with, derive, derive_with, find_valid_bumps,
        find_valid_bumps_with, verify, verify_with,
    };
    pub use crate::hash::{hash_chunks, HashAlg};
    pub use crate::seeds::{validate_seeds, Seeds, MAX_SEEDS, MAX_SEED_LEN};
    pub use crate::{PdaResult, PdakitError};
}
