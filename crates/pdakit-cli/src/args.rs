use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "pdakit", version, about = "Program-derived-address toolkit")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Hash algorithm (currently: sha256).
    #[arg(long, global = true, default_value = "sha256")]
    pub alg: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Derive the canonical (address, bump) pair for a seed set.
    Derive {
        /// Owning program id (base58).
        #[arg(long)]
        program: String,

        /// Seeds in order: str:<text>, hex:<bytes>, u8:<n>, u32:<n>,
        /// u64:<n> (little-endian), addr:<base58>. Bare tokens are str:.
        seeds: Vec<String>,

        /// Also list every viable bump, canonical first.
        #[arg(long)]
        all_bumps: bool,
    },

    /// Check a persisted (address, bump) pair against a seed set.
    /// Exits 1 on mismatch.
    Verify {
        /// Owning program id (base58).
        #[arg(long)]
        program: String,

        /// Address to check (base58).
        #[arg(long)]
        address: String,

        /// Persisted bump to recompute with.
        #[arg(long)]
        bump: u8,

        /// Seeds in the same order and syntax as `derive`.
        seeds: Vec<String>,
    },
}
