use crate::config::DecoderConfig;
use crate::error::{Result, VarintError};
use crate::width::Width;

pub fn validate_config(cfg: &DecoderConfig) -> Result<()> {
    let size = cfg.size_width.resolve().map_err(|e| {
        VarintError::Config(format!("size width {}: {e}", cfg.size_width))
    })?;

    // Only 32- and 64-bit pointers have a wire meaning for `size`.
    match size {
        Width::W32 | Width::W64 => Ok(()),
        other => Err(VarintError::Config(format!(
            "size width must resolve to 32 or 64 bits, got {other}"
        ))),
    }
}
