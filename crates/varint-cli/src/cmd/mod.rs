// crates/varint-cli/src/cmd/mod.rs

use std::path::PathBuf;

use clap::Args;

use crate::io;

pub mod decode;
pub mod encode;
pub mod inspect;

/// Where varint bytes come from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Hex input, e.g. "96 01" or 0x9601
    #[arg(long)]
    pub hex: Option<String>,

    /// Input file holding raw varint bytes
    #[arg(long)]
    pub r#in: Option<PathBuf>,
}

impl InputArgs {
    pub fn load(&self) -> anyhow::Result<Vec<u8>> {
        match (&self.hex, &self.r#in) {
            (Some(text), _) => io::hex::parse_hex(text),
            (None, Some(path)) => io::bin::read_bytes_file(path),
            (None, None) => anyhow::bail!("one of --hex or --in is required"),
        }
    }
}
