//! Curve membership probe.
//!
//! A derived address is usable precisely because it is NOT a valid curve
//! point: no key pair can exist for it, so nobody can produce an ordinary
//! signature in its name. The probe is a trait so tests can substitute a
//! stub (e.g. one that reports everything on-curve to force search
//! exhaustion).

use curve25519_dalek::edwards::CompressedEdwardsY;

/// Boolean membership predicate over 32-byte candidates.
pub trait Curve {
    /// True if `candidate` decodes to a valid point.
    fn contains_point(&self, candidate: &[u8; 32]) -> bool;
}

/// The ed25519 curve, tested via compressed-Edwards decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519;

impl Curve for Ed25519 {
    fn contains_point(&self, candidate: &[u8; 32]) -> bool {
        CompressedEdwardsY(*candidate).decompress().is_some()
    }
}
