//! Error types for framelink.

use thiserror::Error;

/// Main error type for all framelink operations.
#[derive(Debug, Error)]
pub enum FramelinkError {
    /// I/O error on the underlying connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed arguments passed to a frame write.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Start index or length falls outside the buffer.
    #[error("Range out of bounds: start {start}, length {length}, buffer length {buffer_len}")]
    OutOfRange {
        start: usize,
        length: usize,
        buffer_len: usize,
    },

    /// Frame length exceeds the configured maximum.
    #[error("Frame length {length} exceeds maximum {max}")]
    FrameTooLarge { length: u64, max: u32 },

    /// Protocol violation from the peer (zero or negative declared length).
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Payload is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The transport was closed locally.
    #[error("Connection closed")]
    ConnectionClosed,
}

impl FramelinkError {
    /// True for errors caused by the caller's arguments rather than the connection.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            FramelinkError::InvalidArgument(_)
                | FramelinkError::OutOfRange { .. }
                | FramelinkError::FrameTooLarge { .. }
        )
    }
}

/// Result type alias using FramelinkError.
pub type Result<T> = std::result::Result<T, FramelinkError>;
