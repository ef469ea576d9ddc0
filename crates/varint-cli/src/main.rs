// crates/varint-cli/src/main.rs

use anyhow::Context;
use clap::Parser;
use varint_cli::cli::{Cli, Commands};
use varint_cli::{cmd, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level);

    let cfg = cli
        .decoder_config()
        .resolve()
        .with_context(|| format!("resolve size width {}", cli.size_bits))?;
    tracing::debug!(size = %cfg.size, "decoder config resolved");

    match cli.cmd {
        Commands::Decode(args) => cmd::decode::run(args, &cfg),
        Commands::Encode(args) => cmd::encode::run(args, &cfg),
        Commands::Inspect(args) => cmd::inspect::run(args, &cfg),
    }
}
