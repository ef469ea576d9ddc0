// crates/varint-cli/src/io/stream.rs
//
// Walks a buffer of back-to-back varints.

use anyhow::Context;
use varint_core::decode::decode_bits;
use varint_core::zigzag::zigzag_decode_wide;
use varint_core::{SliceSource, Width};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarintRecord {
    pub offset: usize,
    pub bytes: Vec<u8>,
    pub unsigned: u128,
}

impl VarintRecord {
    pub fn zigzag(&self) -> i128 {
        zigzag_decode_wide(self.unsigned)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Decode up to `max` varints (all of them when `None`) from `bytes`.
///
/// Returns the records and the offset where scanning stopped. Any decode
/// error aborts the scan and names the offset of the bad varint.
pub fn scan_varints(
    bytes: &[u8],
    width: Width,
    max: Option<usize>,
) -> anyhow::Result<(Vec<VarintRecord>, usize)> {
    let mut src = SliceSource::new(bytes);
    let mut records = Vec::new();

    loop {
        let offset = src.position();
        let (unsigned, len) = decode_bits(&mut src, width)
            .with_context(|| format!("{width} varint at offset {offset}"))?;
        records.push(VarintRecord {
            offset,
            bytes: bytes[offset..offset + len].to_vec(),
            unsigned,
        });

        if src.is_empty() || max.is_some_and(|m| records.len() >= m) {
            break;
        }
    }

    Ok((records, src.position()))
}
