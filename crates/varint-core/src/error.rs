use thiserror::Error;

use crate::width::Width;

pub type Result<T> = std::result::Result<T, VarintError>;

#[derive(Debug, Error)]
pub enum VarintError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("varint overflow: encoding does not fit in {0}")]
    VarintOverflow(Width),

    #[error("unsupported width: {0} bits")]
    UnsupportedWidth(u32),

    #[error("config error: {0}")]
    Config(String),

    #[error("length prefix {len} exceeds limit {limit}")]
    LengthLimit { len: u128, limit: usize },

    #[error("invalid utf-8 in length-prefixed string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
