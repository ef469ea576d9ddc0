use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use varint_core::encode::{write_signed_varint, write_unsigned_varint};
use varint_core::{ResolvedConfig, Width, WidthSpec};

use crate::io;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Target width: 8, 16, 32, 64, 128 or size
    #[arg(long, default_value = "64")]
    pub width: WidthSpec,

    /// Zig-zag encode the values (signed varints)
    #[arg(long)]
    pub signed: bool,

    /// Write raw bytes to this path instead of printing hex
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Decimal values, encoded back to back
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

pub fn encode_values(values: &[String], width: Width, signed: bool) -> anyhow::Result<Vec<u8>> {
    let mut out = Vec::new();
    for text in values {
        if signed {
            let v: i128 = text.parse().with_context(|| format!("parse signed value {text:?}"))?;
            write_signed_varint(v, width, &mut out)
                .with_context(|| format!("encode {v} as {width} signed varint"))?;
        } else {
            let v: u128 = text.parse().with_context(|| format!("parse unsigned value {text:?}"))?;
            write_unsigned_varint(v, width, &mut out)
                .with_context(|| format!("encode {v} as {width} varint"))?;
        }
    }
    Ok(out)
}

pub fn run(args: EncodeArgs, cfg: &ResolvedConfig) -> anyhow::Result<()> {
    let width = cfg.width(args.width);
    let bytes = encode_values(&args.values, width, args.signed)?;

    match &args.out {
        Some(path) => {
            io::bin::write_bytes_file(path, &bytes)?;
            tracing::info!(out = %path.display(), bytes = bytes.len(), "encode ok");
        }
        None => println!("{}", io::hex::to_hex(&bytes)),
    }
    Ok(())
}
