pub mod error;
pub mod validate;

pub mod config;
pub mod decode;
pub mod encode;
pub mod prefixed;
pub mod source;
pub mod width;
pub mod zigzag;

pub use crate::config::{DecoderConfig, ResolvedConfig};
pub use crate::decode::{read_signed_varint, read_unsigned_varint, ReadVarint};
pub use crate::error::{Result, VarintError};
pub use crate::source::{ByteSource, IoSource, SliceSource};
pub use crate::width::{SizeWidth, Width, WidthSpec};
