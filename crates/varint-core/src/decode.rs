// crates/varint-core/src/decode.rs
//
// LEB128-style unsigned varint decoding, plus zig-zag signed decoding on top.
//
// Wire format, per byte:
//   bit 7    continuation (1 = more bytes follow)
//   bits 6..0 payload, least-significant group first
//
// One loop serves every width. An encoding is rejected when it sets a bit at
// or above the target width, or when it runs past ceil(W / 7) bytes without a
// terminator, even if the extra groups are all zero.

use crate::error::{Result, VarintError};
use crate::source::ByteSource;
use crate::width::Width;
use crate::zigzag::{zigzag_decode_wide, Signed, Unsigned};

/// Decode one varint at `width`, returning the value and the bytes consumed.
pub fn decode_bits<S>(src: &mut S, width: Width) -> Result<(u128, usize)>
where
    S: ByteSource + ?Sized,
{
    let bits = width.bits();
    let mut acc: u128 = 0;
    let mut shift: u32 = 0;

    for read in 1..=width.max_encoded_len() {
        let b = src.next_byte()?;
        let low = (b & 0x7F) as u128;

        // Only the last group can straddle the top of the width.
        let room = bits - shift;
        if room < 7 && (low >> room) != 0 {
            return Err(VarintError::VarintOverflow(width));
        }
        acc |= low << shift;

        if (b & 0x80) == 0 {
            return Ok((acc, read));
        }
        shift += 7;
    }

    Err(VarintError::VarintOverflow(width))
}

pub fn read_unsigned_varint<S>(src: &mut S, width: Width) -> Result<u128>
where
    S: ByteSource + ?Sized,
{
    decode_bits(src, width).map(|(v, _)| v)
}

pub fn read_signed_varint<S>(src: &mut S, width: Width) -> Result<i128>
where
    S: ByteSource + ?Sized,
{
    read_unsigned_varint(src, width).map(zigzag_decode_wide)
}

/// Like [`read_unsigned_varint`], also returning the encoded length.
pub fn read_unsigned_varint_len<S>(src: &mut S, width: Width) -> Result<(u128, usize)>
where
    S: ByteSource + ?Sized,
{
    decode_bits(src, width)
}

pub fn read_signed_varint_len<S>(src: &mut S, width: Width) -> Result<(i128, usize)>
where
    S: ByteSource + ?Sized,
{
    let (u, n) = decode_bits(src, width)?;
    Ok((zigzag_decode_wide(u), n))
}

/// Typed decode: the width comes from `T`.
pub fn read_varint<T, S>(src: &mut S) -> Result<T>
where
    T: Unsigned,
    S: ByteSource + ?Sized,
{
    let (v, _) = decode_bits(src, T::WIDTH)?;
    Ok(T::from_u128(v))
}

/// Typed zig-zag decode, computed in the unsigned type of the same width.
pub fn read_zigzag<T, S>(src: &mut S) -> Result<T>
where
    T: Signed,
    S: ByteSource + ?Sized,
{
    Ok(read_varint::<T::Unsigned, S>(src)?.zigzag_decode())
}

/// Per-type readers on any [`ByteSource`].
pub trait ReadVarint: ByteSource {
    fn read_u8_varint(&mut self) -> Result<u8> {
        read_varint(self)
    }
    fn read_u16_varint(&mut self) -> Result<u16> {
        read_varint(self)
    }
    fn read_u32_varint(&mut self) -> Result<u32> {
        read_varint(self)
    }
    fn read_u64_varint(&mut self) -> Result<u64> {
        read_varint(self)
    }
    fn read_u128_varint(&mut self) -> Result<u128> {
        read_varint(self)
    }
    fn read_usize_varint(&mut self) -> Result<usize> {
        read_varint(self)
    }

    fn read_i8_varint(&mut self) -> Result<i8> {
        read_zigzag(self)
    }
    fn read_i16_varint(&mut self) -> Result<i16> {
        read_zigzag(self)
    }
    fn read_i32_varint(&mut self) -> Result<i32> {
        read_zigzag(self)
    }
    fn read_i64_varint(&mut self) -> Result<i64> {
        read_zigzag(self)
    }
    fn read_i128_varint(&mut self) -> Result<i128> {
        read_zigzag(self)
    }
    fn read_isize_varint(&mut self) -> Result<isize> {
        read_zigzag(self)
    }
}

impl<S: ByteSource + ?Sized> ReadVarint for S {}
