// crates/varint-cli/src/cli.rs

use clap::{Parser, Subcommand};
use varint_core::{DecoderConfig, SizeWidth};

use crate::cmd;

#[derive(Parser, Debug)]
#[command(name = "varint")]
#[command(about = "LEB128 / zig-zag varint tools", long_about = None)]
pub struct Cli {
    /// Pointer width behind the `size` width token: 32, 64 or native.
    /// Peers must agree on it, so the default is a fixed 64 rather than the host.
    #[arg(long, global = true, env = "VARINT_SIZE_BITS", default_value = "64")]
    pub size_bits: SizeWidth,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode varints from hex or a file
    Decode(cmd::decode::DecodeArgs),

    /// Encode decimal values as varints
    Encode(cmd::encode::EncodeArgs),

    /// Show offset, length and both readings of every varint in the input
    Inspect(cmd::inspect::InspectArgs),
}

impl Cli {
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::new(self.size_bits)
    }
}
