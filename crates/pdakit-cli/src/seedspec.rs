//! Textual seed syntax shared by the derive and verify commands.
//!
//! Each token is `<tag>:<value>`; a token without a known tag is treated
//! as `str:`. Tags:
//! - `str:` UTF-8 bytes of the text
//! - `hex:` raw bytes, hex-encoded
//! - `u8:` / `u32:` / `u64:` little-endian integer bytes
//! - `addr:` the 32 bytes of a base58 address

use anyhow::{anyhow, Result};

use pdakit_core::prelude::*;

pub fn parse_seeds(specs: &[String]) -> Result<Seeds> {
    let mut seeds = Seeds::new();
    for spec in specs {
        push_seed(&mut seeds, spec)?;
    }
    Ok(seeds)
}

fn push_seed(seeds: &mut Seeds, spec: &str) -> Result<()> {
    let (tag, value) = spec.split_once(':').unwrap_or(("str", spec));
    match tag {
        "str" => {
            seeds.push_str(value);
        }
        "hex" => {
            let bytes =
                hex::decode(value).map_err(|e| anyhow!("invalid hex seed {spec:?}: {e}"))?;
            seeds.push_bytes(bytes);
        }
        "u8" => {
            let v: u8 = value
                .parse()
                .map_err(|e| anyhow!("invalid u8 seed {spec:?}: {e}"))?;
            seeds.push_u8(v);
        }
        "u32" => {
            let v: u32 = value
                .parse()
                .map_err(|e| anyhow!("invalid u32 seed {spec:?}: {e}"))?;
            seeds.push_u32(v);
        }
        "u64" => {
            let v: u64 = value
                .parse()
                .map_err(|e| anyhow!("invalid u64 seed {spec:?}: {e}"))?;
            seeds.push_u64(v);
        }
        "addr" => {
            let address: Address = value
                .parse()
                .map_err(|e| anyhow!("invalid address seed {spec:?}: {e}"))?;
            seeds.push_address(&address);
        }
        _ => {
            // Unknown tag: the whole token is a literal string seed.
            seeds.push_str(spec);
        }
    }
    Ok(())
}
