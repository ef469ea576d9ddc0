// crates/varint-cli/src/io/mod.rs

pub mod bin;
pub mod hex;
pub mod stream;
