// crates/varint-core/src/prefixed.rs
//
// Length-prefixed byte strings: a `size` varint length followed by that
// many raw bytes. The caller supplies the resolved `size` width and an upper
// bound on the length, which is checked before anything is allocated.

use crate::decode::read_unsigned_varint;
use crate::encode::write_unsigned_varint;
use crate::error::{Result, VarintError};
use crate::source::ByteSource;
use crate::width::Width;

pub fn read_prefixed_bytes<S>(src: &mut S, size: Width, limit: usize) -> Result<Vec<u8>>
where
    S: ByteSource + ?Sized,
{
    let len = read_unsigned_varint(src, size)?;
    if len > limit as u128 {
        return Err(VarintError::LengthLimit { len, limit });
    }

    let mut buf = vec![0u8; len as usize];
    src.read_exact_into(&mut buf)?;
    Ok(buf)
}

pub fn read_prefixed_string<S>(src: &mut S, size: Width, limit: usize) -> Result<String>
where
    S: ByteSource + ?Sized,
{
    let bytes = read_prefixed_bytes(src, size, limit)?;
    Ok(String::from_utf8(bytes)?)
}

pub fn write_prefixed_bytes(bytes: &[u8], size: Width, out: &mut Vec<u8>) -> Result<()> {
    write_unsigned_varint(bytes.len() as u128, size, out)?;
    out.extend_from_slice(bytes);
    Ok(())
}

pub fn write_prefixed_str(s: &str, size: Width, out: &mut Vec<u8>) -> Result<()> {
    write_prefixed_bytes(s.as_bytes(), size, out)
}
