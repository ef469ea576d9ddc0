// crates/varint-core/src/config.rs

use crate::error::Result;
use crate::validate::validate_config;
use crate::width::{SizeWidth, Width, WidthSpec};

/// Decoder configuration as supplied by the caller. The `size` policy has
/// to be chosen explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub size_width: SizeWidth,
}

/// Configuration with the pointer-size width pinned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub size: Width,
}

impl DecoderConfig {
    pub fn new(size_width: SizeWidth) -> Self {
        Self { size_width }
    }

    /// Validate and resolve. Call once at startup and reuse the result.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        validate_config(self)?;
        Ok(ResolvedConfig {
            size: self.size_width.resolve()?,
        })
    }
}

impl ResolvedConfig {
    pub fn width(&self, spec: WidthSpec) -> Width {
        spec.resolve(self)
    }
}
