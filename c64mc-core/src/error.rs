use thiserror::Error;

use crate::format::OutputFormat;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid background colour {0}")]
    InvalidBackground(String),

    #[error("Invalid output format {0}")]
    InvalidFormat(String),

    #[error("pixel buffer is {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    /// A pixel survived colour resolution without a slot in its cell's list.
    #[error("colour {colour} in cell {cell} is missing from the cell colour list")]
    UnmappedPixel { cell: usize, colour: u8 },

    #[error("malformed {format} data: {reason}")]
    Malformed { format: OutputFormat, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
