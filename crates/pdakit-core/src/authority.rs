//! Derived-authority attestation.
//!
//! A derived address plus its seeds and bump can stand in for a signature,
//! but only while the program the address was derived for is the one
//! actually executing. Which program is executing is a fact only the
//! hosting runtime knows; it is modelled here as a trait the consumer
//! implements, keeping this crate runtime-free.

use crate::address::Address;
use crate::derive::verify;

/// Runtime attestation of the currently executing program.
pub trait ExecutionContext {
    /// Identifier of the program executing in the current frame.
    fn executing_program(&self) -> Address;
}

/// True iff `ctx` attests execution as `program_id` and `address`
/// re-derives from the supplied seeds and bump.
///
/// Both legs are required: a reproducible address under a foreign program
/// id carries no authority, and an attested program cannot claim an
/// address its seeds do not produce.
pub fn authorized_for<C: ExecutionContext>(
    ctx: &C,
    address: &Address,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Address,
) -> bool {
    ctx.executing_program() == *program_id && verify(address, seeds, bump, program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;

    struct FixedContext(Address);

    impl ExecutionContext for FixedContext {
        fn executing_program(&self) -> Address {
            self.0
        }
    }

    #[test]
    fn attested_program_with_matching_seeds_is_authorized() {
        let program = Address::new([1u8; 32]);
        let (address, bump) = derive(&[b"vault"], &program).unwrap();
        let ctx = FixedContext(program);
        assert!(authorized_for(&ctx, &address, &[b"vault"], bump, &program));
    }

    #[test]
    fn foreign_program_is_rejected() {
        let program = Address::new([1u8; 32]);
        let other = Address::new([2u8; 32]);
        let (address, bump) = derive(&[b"vault"], &program).unwrap();
        let ctx = FixedContext(other);
        assert!(!authorized_for(&ctx, &address, &[b"vault"], bump, &program));
    }

    #[test]
    fn attested_program_with_wrong_seeds_is_rejected() {
        let program = Address::new([1u8; 32]);
        let (address, bump) = derive(&[b"vault"], &program).unwrap();
        let ctx = FixedContext(program);
        assert!(!authorized_for(&ctx, &address, &[b"fault"], bump, &program));
    }
}
