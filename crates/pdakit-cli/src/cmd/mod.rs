use anyhow::Result;

use crate::args::{Cli, Command};

mod derive;
mod verify;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Derive {
            program,
            seeds,
            all_bumps,
        } => derive::run(&cli.alg, &program, &seeds, all_bumps),
        Command::Verify {
            program,
            address,
            bump,
            seeds,
        } => verify::run(&cli.alg, &program, &address, bump, &seeds),
    }
}
