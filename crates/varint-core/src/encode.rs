// crates/varint-core/src/encode.rs
//
// Minimal (canonical) varint encoding. The output for a value never exceeds
// ceil(bits_needed / 7) bytes, and zero takes one byte.

use std::io::Write;

use crate::error::{Result, VarintError};
use crate::width::Width;
use crate::zigzag::{zigzag_encode_wide, Signed, Unsigned};

/// Bytes needed to encode `v`.
pub fn encoded_len(v: u128) -> usize {
    let bits = (u128::BITS - v.leading_zeros()) as usize;
    bits.div_ceil(7).max(1)
}

fn put_u128(mut v: u128, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    while v >= 0x80 {
        out.push(((v as u8) & 0x7F) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
    out.len() - start
}

pub fn put_varint<T: Unsigned>(v: T, out: &mut Vec<u8>) -> usize {
    put_u128(v.to_u128(), out)
}

pub fn put_zigzag<T: Signed>(v: T, out: &mut Vec<u8>) -> usize {
    put_varint(v.zigzag_encode(), out)
}

/// Encode `value` for a reader expecting `width`. Values that the reader
/// would reject are refused here too.
pub fn write_unsigned_varint(value: u128, width: Width, out: &mut Vec<u8>) -> Result<usize> {
    if value > width.max_unsigned() {
        return Err(VarintError::VarintOverflow(width));
    }
    Ok(put_u128(value, out))
}

pub fn write_signed_varint(value: i128, width: Width, out: &mut Vec<u8>) -> Result<usize> {
    let u = zigzag_encode_wide(value, width)?;
    Ok(put_u128(u, out))
}

/// Streaming form of [`write_unsigned_varint`].
pub fn write_varint_to<W>(w: &mut W, value: u128, width: Width) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut buf = Vec::with_capacity(width.max_encoded_len());
    let n = write_unsigned_varint(value, width, &mut buf)?;
    w.write_all(&buf)?;
    Ok(n)
}

pub fn write_zigzag_to<W>(w: &mut W, value: i128, width: Width) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut buf = Vec::with_capacity(width.max_encoded_len());
    let n = write_signed_varint(value, width, &mut buf)?;
    w.write_all(&buf)?;
    Ok(n)
}
