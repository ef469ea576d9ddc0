use clap::Args;
use varint_core::{ResolvedConfig, Width, WidthSpec};

use crate::cmd::InputArgs;
use crate::io::stream::scan_varints;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target width: 8, 16, 32, 64, 128 or size
    #[arg(long, default_value = "64")]
    pub width: WidthSpec,

    /// Apply the zig-zag transform (signed varints)
    #[arg(long)]
    pub signed: bool,

    /// Keep decoding until the input is exhausted
    #[arg(long)]
    pub all: bool,
}

/// Decoded values rendered one per line.
pub fn decode_bytes(
    bytes: &[u8],
    width: Width,
    signed: bool,
    all: bool,
) -> anyhow::Result<Vec<String>> {
    let max = if all { None } else { Some(1) };
    let (records, end) = scan_varints(bytes, width, max)?;

    if end < bytes.len() {
        tracing::warn!(
            offset = end,
            trailing = bytes.len() - end,
            "trailing bytes not decoded"
        );
    }

    Ok(records
        .iter()
        .map(|r| {
            if signed {
                r.zigzag().to_string()
            } else {
                r.unsigned.to_string()
            }
        })
        .collect())
}

pub fn run(args: DecodeArgs, cfg: &ResolvedConfig) -> anyhow::Result<()> {
    let bytes = args.input.load()?;
    let width = cfg.width(args.width);

    let lines = decode_bytes(&bytes, width, args.signed, args.all)?;
    for line in &lines {
        println!("{line}");
    }

    tracing::info!(
        width = %width,
        signed = args.signed,
        values = lines.len(),
        bytes = bytes.len(),
        "decode ok"
    );
    Ok(())
}
