// crates/varint-core/src/zigzag.rs
//
// Zig-zag mapping between signed and unsigned integers of the same width:
//   encode: (s << 1) ^ (s >> (BITS - 1))
//   decode: (u >> 1) ^ (0 - (u & 1))
// Both run on raw bit patterns and finish with a same-width cast, so neither
// can overflow.

use crate::error::{Result, VarintError};
use crate::width::Width;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types the decoder can produce.
pub trait Unsigned: Copy + sealed::Sealed {
    const WIDTH: Width;
    type Signed: Copy;

    /// Truncating conversion. Callers only pass values already checked
    /// against `WIDTH`.
    fn from_u128(v: u128) -> Self;
    fn to_u128(self) -> u128;
    fn zigzag_decode(self) -> Self::Signed;
}

pub trait Signed: Copy + sealed::Sealed {
    type Unsigned: Unsigned<Signed = Self>;

    fn zigzag_encode(self) -> Self::Unsigned;
}

const fn width_of(bits: u32) -> Width {
    match bits {
        8 => Width::W8,
        16 => Width::W16,
        32 => Width::W32,
        64 => Width::W64,
        128 => Width::W128,
        _ => panic!("unsupported integer width"),
    }
}

macro_rules! impl_zigzag {
    ($($u:ty => $s:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $u {}
        impl sealed::Sealed for $s {}

        impl Unsigned for $u {
            const WIDTH: Width = width_of(<$u>::BITS);
            type Signed = $s;

            #[inline]
            fn from_u128(v: u128) -> Self {
                v as $u
            }

            #[inline]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn zigzag_decode(self) -> $s {
                ((self >> 1) ^ (0 as $u).wrapping_sub(self & 1)) as $s
            }
        }

        impl Signed for $s {
            type Unsigned = $u;

            #[inline]
            fn zigzag_encode(self) -> $u {
                ((self << 1) ^ (self >> (<$s>::BITS - 1))) as $u
            }
        }
    )+};
}

impl_zigzag!(
    u8 => i8,
    u16 => i16,
    u32 => i32,
    u64 => i64,
    u128 => i128,
    usize => isize,
);

/// Zig-zag decode for a value read at a runtime width.
///
/// For any `u < 2^W` the 128-bit result equals the W-bit result
/// sign-extended, so the width does not need to be passed in.
pub fn zigzag_decode_wide(u: u128) -> i128 {
    u.zigzag_decode()
}

/// Zig-zag encode `v` for a runtime width, rejecting values outside the
/// signed range of that width.
pub fn zigzag_encode_wide(v: i128, width: Width) -> Result<u128> {
    let (min, max) = width.signed_range();
    if v < min || v > max {
        return Err(VarintError::VarintOverflow(width));
    }
    Ok(v.zigzag_encode())
}
