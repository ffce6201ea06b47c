use anyhow::Result;
use clap::Parser;

mod args;
mod cmd;
mod output;
mod seedspec;

fn main() -> Result<()> {
    let cli = args::Cli::parse();
    output::init(cli.json);

    cmd::dispatch(cli)
}
