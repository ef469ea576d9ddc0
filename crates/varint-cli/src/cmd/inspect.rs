use clap::Args;
use varint_core::{ResolvedConfig, Width, WidthSpec};

use crate::cmd::InputArgs;
use crate::io::hex::to_spaced_hex;
use crate::io::stream::scan_varints;

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target width: 8, 16, 32, 64, 128 or size
    #[arg(long, default_value = "64")]
    pub width: WidthSpec,
}

pub fn inspect_lines(bytes: &[u8], width: Width) -> anyhow::Result<Vec<String>> {
    let (records, _end) = scan_varints(bytes, width, None)?;

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format!(
        "{:>8}  {:>3}  {:<30}  {:>40}  {:>40}",
        "offset", "len", "bytes", "unsigned", "zigzag"
    ));
    for r in &records {
        lines.push(format!(
            "{:>8}  {:>3}  {:<30}  {:>40}  {:>40}",
            r.offset,
            r.len(),
            to_spaced_hex(&r.bytes),
            r.unsigned,
            r.zigzag()
        ));
    }
    Ok(lines)
}

pub fn run(args: InspectArgs, cfg: &ResolvedConfig) -> anyhow::Result<()> {
    let bytes = args.input.load()?;
    let width = cfg.width(args.width);

    for line in inspect_lines(&bytes, width)? {
        println!("{line}");
    }

    tracing::info!(
        width = %width,
        max_len = width.max_encoded_len(),
        input_bytes = bytes.len(),
        "inspect ok"
    );
    Ok(())
}
