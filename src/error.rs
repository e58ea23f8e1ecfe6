/// Errors produced while reading or decoding training records.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A buffer, bit read or stream read ran past the available bytes.
    #[error("truncated record: needed {needed} bytes, only {available} available")]
    TruncatedRecord { needed: usize, available: usize },

    /// A piece code matched nothing in the table within its maximum length.
    #[error("corrupt piece encoding {code:#06b} at bit {bit_offset}")]
    CorruptEncoding { bit_offset: usize, code: u8 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
