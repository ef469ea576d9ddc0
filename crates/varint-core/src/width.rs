// crates/varint-core/src/width.rs
//
// Target widths for varint decoding.
//
// `size` is never a width by itself. It goes through the configured pointer
// width (see `config.rs`) once, before any decode runs.

use std::fmt;
use std::str::FromStr;

use crate::config::ResolvedConfig;
use crate::error::{Result, VarintError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    W128,
}

impl Width {
    pub const ALL: [Width; 5] = [Width::W8, Width::W16, Width::W32, Width::W64, Width::W128];

    /// Map a bit count onto a supported width.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            128 => Ok(Width::W128),
            other => Err(VarintError::UnsupportedWidth(other)),
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::W128 => 128,
        }
    }

    /// Longest legal encoding at this width: ceil(bits / 7) bytes.
    pub const fn max_encoded_len(self) -> usize {
        (self.bits() as usize + 6) / 7
    }

    pub const fn max_unsigned(self) -> u128 {
        match self {
            Width::W128 => u128::MAX,
            w => (1u128 << w.bits()) - 1,
        }
    }

    /// Inclusive (min, max) of the two's complement range at this width.
    pub const fn signed_range(self) -> (i128, i128) {
        match self {
            Width::W128 => (i128::MIN, i128::MAX),
            w => {
                let half = 1i128 << (w.bits() - 1);
                (-half, half - 1)
            }
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Pointer-size policy for the `size` width.
///
/// Peers exchanging `size` varints must agree on this, so there is no
/// default: every caller picks one. `Native` follows the host and is only
/// safe when both ends run on the same pointer width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeWidth {
    Native,
    Bits32,
    Bits64,
}

impl SizeWidth {
    pub fn resolve(self) -> Result<Width> {
        match self {
            SizeWidth::Native => Width::from_bits(usize::BITS),
            SizeWidth::Bits32 => Ok(Width::W32),
            SizeWidth::Bits64 => Ok(Width::W64),
        }
    }
}

impl FromStr for SizeWidth {
    type Err = VarintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "native" => Ok(SizeWidth::Native),
            "32" => Ok(SizeWidth::Bits32),
            "64" => Ok(SizeWidth::Bits64),
            other => Err(VarintError::Config(format!(
                "size width must be native, 32 or 64 (got {other:?})"
            ))),
        }
    }
}

impl fmt::Display for SizeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeWidth::Native => f.write_str("native"),
            SizeWidth::Bits32 => f.write_str("32"),
            SizeWidth::Bits64 => f.write_str("64"),
        }
    }
}

/// A width token as written by a user: `8`, `16`, `32`, `64`, `128` or `size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthSpec {
    Fixed(Width),
    Size,
}

impl WidthSpec {
    pub fn resolve(self, cfg: &ResolvedConfig) -> Width {
        match self {
            WidthSpec::Fixed(w) => w,
            WidthSpec::Size => cfg.size,
        }
    }
}

impl FromStr for WidthSpec {
    type Err = VarintError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "size" {
            return Ok(WidthSpec::Size);
        }
        let bits: u32 = s
            .parse()
            .map_err(|_| VarintError::Config(format!("unknown width token {s:?}")))?;
        Width::from_bits(bits).map(WidthSpec::Fixed)
    }
}

impl fmt::Display for WidthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthSpec::Fixed(w) => write!(f, "{}", w.bits()),
            WidthSpec::Size => f.write_str("size"),
        }
    }
}
