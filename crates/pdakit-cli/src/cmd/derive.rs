use anyhow::Result;
use serde::Serialize;

use pdakit_core::prelude::*;

use crate::output;
use crate::seedspec;

#[derive(Debug, Serialize)]
pub struct DeriveOut {
    pub address: Address,
    pub bump: u8,
    pub alg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_bumps: Option<Vec<u8>>,
}

pub fn run(alg: &str, program: &str, seed_specs: &[String], all_bumps: bool) -> Result<()> {
    let alg = HashAlg::parse(alg)?;
    let program_id: Address = program.parse()?;
    let seeds = seedspec::parse_seeds(seed_specs)?;
    let slices = seeds.as_slices();

    let (address, bump) = derive_with(alg, &Ed25519, &slices, &program_id)?;
    let all = if all_bumps {
        Some(find_valid_bumps_with(alg, &Ed25519, &slices, &program_id)?)
    } else {
        None
    };

    output::print(&DeriveOut {
        address,
        bump,
        alg: alg.as_str(),
        all_bumps: all,
    })
}
