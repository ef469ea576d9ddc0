// crates/varint-cli/src/io/hex.rs
//
// Hex text as typed on a command line: "96 01", "0x9601", "96:01" all work.

use anyhow::Context;

pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let digits: String = text
        .split(|c: char| c.is_whitespace() || c == ':' || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t))
        .collect();
    ::hex::decode(&digits).with_context(|| format!("parse hex input {text:?}"))
}

pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Space separated, for tables.
pub fn to_spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
