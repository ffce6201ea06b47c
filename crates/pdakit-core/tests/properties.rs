//! Property tests for the derivation engine.
//!
//! Strategies draw arbitrary seed sets within the structural limits and
//! arbitrary 32-byte program ids, so every case exercises the real search
//! path end to end.

use proptest::collection::vec;
use proptest::prelude::*;

use pdakit_core::prelude::*;

fn seed_sets() -> impl Strategy<Value = Vec<Vec<u8>>> {
    vec(vec(any::<u8>(), 0..=MAX_SEED_LEN), 0..=MAX_SEEDS)
}

fn program_ids() -> impl Strategy<Value = Address> {
    any::<[u8; 32]>().prop_map(Address::new)
}

fn as_slices(seeds: &[Vec<u8>]) -> Vec<&[u8]> {
    seeds.iter().map(|s| s.as_slice()).collect()
}

proptest! {
    #[test]
    fn derivation_is_deterministic(seeds in seed_sets(), program in program_ids()) {
        let slices = as_slices(&seeds);
        let first = derive(&slices, &program).unwrap();
        let second = derive(&slices, &program).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn derived_address_is_off_curve(seeds in seed_sets(), program in program_ids()) {
        let slices = as_slices(&seeds);
        let (address, _) = derive(&slices, &program).unwrap();
        prop_assert!(!Ed25519.contains_point(address.as_bytes()));
    }

    #[test]
    fn derive_then_verify_round_trips(seeds in seed_sets(), program in program_ids()) {
        let slices = as_slices(&seeds);
        let (address, bump) = derive(&slices, &program).unwrap();
        prop_assert!(verify(&address, &slices, bump, &program));
    }

    #[test]
    fn distinct_programs_give_distinct_addresses(
        seeds in seed_sets(),
        program in program_ids(),
        flip in 0usize..32,
    ) {
        let slices = as_slices(&seeds);
        let mut other_bytes = program.to_bytes();
        other_bytes[flip] ^= 0x01;
        let other = Address::new(other_bytes);

        let (a1, _) = derive(&slices, &program).unwrap();
        let (a2, _) = derive(&slices, &other).unwrap();
        prop_assert_ne!(a1, a2);
    }

    #[test]
    fn perturbed_program_id_fails_verify(
        seeds in seed_sets(),
        program in program_ids(),
        flip in 0usize..32,
    ) {
        let slices = as_slices(&seeds);
        let (address, bump) = derive(&slices, &program).unwrap();

        let mut other_bytes = program.to_bytes();
        other_bytes[flip] ^= 0x01;
        let other = Address::new(other_bytes);
        prop_assert!(!verify(&address, &slices, bump, &other));
    }

    #[test]
    fn perturbed_bump_fails_verify(seeds in seed_sets(), program in program_ids(), delta in 1u8..=255) {
        let slices = as_slices(&seeds);
        let (address, bump) = derive(&slices, &program).unwrap();
        prop_assert!(!verify(&address, &slices, bump.wrapping_add(delta), &program));
    }

    #[test]
    fn text_form_round_trips(bytes in any::<[u8; 32]>()) {
        let address = Address::new(bytes);
        let parsed: Address = address.to_string().parse().unwrap();
        prop_assert_eq!(parsed, address);
    }
}

// Exhaustive single-byte perturbation of a small seed: every mutation must
// fail verification against the original address.
#[test]
fn every_seed_byte_mutation_fails_verify() {
    let program = Address::new([11u8; 32]);
    let seed = *b"vault";
    let (address, bump) = derive(&[&seed], &program).unwrap();

    for position in 0..seed.len() {
        for bit in 0..8u8 {
            let mut mutated = seed;
            mutated[position] ^= 1 << bit;
            assert!(
                !verify(&address, &[&mutated], bump, &program),
                "mutation at byte {position} bit {bit} still verified"
            );
        }
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn parallel_agrees_with_sequential(seeds in seed_sets(), program in program_ids()) {
        let slices = as_slices(&seeds);
        prop_assert_eq!(
            derive_parallel(&slices, &program).unwrap(),
            derive(&slices, &program).unwrap()
        );
    }
}
