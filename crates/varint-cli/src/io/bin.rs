// crates/varint-cli/src/io/bin.rs

use std::path::Path;

use anyhow::Context;

pub fn read_bytes_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read input {}", path.display()))
}

pub fn write_bytes_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write output {}", path.display()))
}
