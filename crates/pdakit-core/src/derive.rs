//! Program-derived-address search and validation.
//!
//! A candidate digest is the hash of
//! `seed_1 || .. || seed_n || [bump] || program_id || PDA_MARKER`.
//! Derivation scans bumps 255 down to 0 and returns the first candidate
//! that is not a valid curve point, together with the bump that produced
//! it. The scan direction is pinned: changing it would re-map every
//! deployed address.
//!
//! All functions here are pure; identical inputs give identical results.

use crate::address::Address;
use crate::curve::{Curve, Ed25519};
use crate::domain::PDA_MARKER;
use crate::errors::{PdaResult, PdakitError};
use crate::hash::{hash_chunks, HashAlg};
use crate::seeds::validate_seeds;

/// Assemble and hash one candidate. Callers have already validated seeds.
fn candidate(alg: HashAlg, seeds: &[&[u8]], bump: u8, program_id: &Address) -> Address {
    let bump_seed = [bump];
    let mut chunks: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 3);
    chunks.extend_from_slice(seeds);
    chunks.push(&bump_seed);
    chunks.push(program_id.as_bytes());
    chunks.push(PDA_MARKER);
    Address::new(hash_chunks(alg, &chunks))
}

/// Compute the candidate address for one specific bump.
///
/// No curve test is applied: this is the recomputation primitive for
/// callers that persisted a bump. Fails with `InvalidSeeds` if the seed
/// set violates structural limits.
pub fn address_for_bump(seeds: &[&[u8]], bump: u8, program_id: &Address) -> PdaResult<Address> {
    address_for_bump_with(HashAlg::Sha256, seeds, bump, program_id)
}

/// [`address_for_bump`] with an explicit hash algorithm.
pub fn address_for_bump_with(
    alg: HashAlg,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Address,
) -> PdaResult<Address> {
    validate_seeds(seeds)?;
    Ok(candidate(alg, seeds, bump, program_id))
}

/// Find the canonical `(address, bump)` pair for a seed set.
///
/// Scans bump 255 down to 0; the first off-curve candidate wins. Fails
/// with `InvalidSeeds` before hashing if limits are violated, and with
/// `PdaNotFound` if all 256 candidates are curve points.
pub fn derive(seeds: &[&[u8]], program_id: &Address) -> PdaResult<(Address, u8)> {
    derive_with(HashAlg::Sha256, &Ed25519, seeds, program_id)
}

/// [`derive`] with an explicit hash algorithm and curve probe.
pub fn derive_with<C: Curve>(
    alg: HashAlg,
    curve: &C,
    seeds: &[&[u8]],
    program_id: &Address,
) -> PdaResult<(Address, u8)> {
    validate_seeds(seeds)?;
    for bump in (0..=255u8).rev() {
        let address = candidate(alg, seeds, bump, program_id);
        if !curve.contains_point(address.as_bytes()) {
            return Ok((address, bump));
        }
    }
    Err(PdakitError::PdaNotFound)
}

/// Recompute the candidate for a persisted bump and compare byte-for-byte.
///
/// Mismatch is a normal `false`, never an error; it means the wrong seeds,
/// bump, or program were supplied. Curve membership is not re-tested (it
/// was established at derivation time). A seed set that violates the
/// structural limits can never equal a derived address and returns `false`.
pub fn verify(candidate_address: &Address, seeds: &[&[u8]], bump: u8, program_id: &Address) -> bool {
    verify_with(HashAlg::Sha256, candidate_address, seeds, bump, program_id)
}

/// [`verify`] with an explicit hash algorithm.
pub fn verify_with(
    alg: HashAlg,
    candidate_address: &Address,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Address,
) -> bool {
    match address_for_bump_with(alg, seeds, bump, program_id) {
        Ok(address) => address == *candidate_address,
        Err(_) => false,
    }
}

/// Every bump in [0, 255] whose candidate is off-curve, descending.
///
/// The first entry is the canonical bump. Useful when reviewing code that
/// accepts caller-supplied bumps: any entry after the first is a
/// non-canonical bump an attacker could substitute.
pub fn find_valid_bumps(seeds: &[&[u8]], program_id: &Address) -> PdaResult<Vec<u8>> {
    find_valid_bumps_with(HashAlg::Sha256, &Ed25519, seeds, program_id)
}

/// [`find_valid_bumps`] with an explicit hash algorithm and curve probe.
pub fn find_valid_bumps_with<C: Curve>(
    alg: HashAlg,
    curve: &C,
    seeds: &[&[u8]],
    program_id: &Address,
) -> PdaResult<Vec<u8>> {
    validate_seeds(seeds)?;
    Ok((0..=255u8)
        .rev()
        .filter(|&bump| !curve.contains_point(candidate(alg, seeds, bump, program_id).as_bytes()))
        .collect())
}

/// Parallel variant of [`derive`].
///
/// Candidates are probed across threads, but the result is exactly what
/// the sequential scan returns: the highest viable bump. `find_first` on
/// the reversed range preserves that order regardless of which worker
/// finishes first.
#[cfg(feature = "parallel")]
pub fn derive_parallel(seeds: &[&[u8]], program_id: &Address) -> PdaResult<(Address, u8)> {
    use rayon::prelude::*;

    validate_seeds(seeds)?;
    let found = (0u32..256)
        .into_par_iter()
        .rev()
        .map(|b| b as u8)
        .find_first(|&bump| {
            !Ed25519.contains_point(candidate(HashAlg::Sha256, seeds, bump, program_id).as_bytes())
        });
    match found {
        Some(bump) => Ok((candidate(HashAlg::Sha256, seeds, bump, program_id), bump)),
        None => Err(PdakitError::PdaNotFound),
    }
}
