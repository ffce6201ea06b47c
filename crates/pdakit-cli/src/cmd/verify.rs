use anyhow::Result;
use serde::Serialize;
use termcolor::Color;

use pdakit_core::prelude::*;

use crate::output;
use crate::seedspec;

#[derive(Debug, Serialize)]
pub struct VerifyOut {
    pub ok: bool,
}

pub fn run(alg: &str, program: &str, address: &str, bump: u8, seed_specs: &[String]) -> Result<()> {
    let alg = HashAlg::parse(alg)?;
    let program_id: Address = program.parse()?;
    let candidate: Address = address.parse()?;
    let seeds = seedspec::parse_seeds(seed_specs)?;

    let ok = verify_with(alg, &candidate, &seeds.as_slices(), bump, &program_id);

    if output::is_json() {
        output::print(&VerifyOut { ok })?;
    } else if ok {
        output::status("ok", Color::Green, "address matches seeds and bump")?;
    } else {
        output::status("mismatch", Color::Red, "address does not match seeds and bump")?;
    }

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
