//! Frame struct with typed accessors.
//!
//! A frame is one length-prefixed unit of payload. The prefix is not stored;
//! it is implied by the payload length.
//!
//! # Example
//!
//! ```
//! use framelink::protocol::Frame;
//! use bytes::Bytes;
//!
//! let frame = Frame::new(Bytes::from_static(b"hello"));
//!
//! assert_eq!(frame.len(), 5);
//! assert_eq!(frame.text().unwrap(), "hello");
//! ```

use bytes::Bytes;

use super::wire_format::{encode_length, LENGTH_PREFIX_SIZE};
use crate::codec::TextCodec;
use crate::error::Result;

/// A complete protocol frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Payload bytes (zero-copy via `bytes::Bytes`).
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame from its payload.
    pub fn new(payload: Bytes) -> Self {
        Self { payload }
    }

    /// Create a frame from raw bytes (copies data).
    pub fn from_slice(payload: &[u8]) -> Self {
        Self {
            payload: Bytes::copy_from_slice(payload),
        }
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Get the payload length.
    #[inline]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Check if the payload is empty. Frames read off the wire never are.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Consume the frame, returning the payload.
    #[inline]
    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// Decode the payload as UTF-8 text.
    pub fn text(&self) -> Result<String> {
        TextCodec::decode(&self.payload)
    }
}

impl From<Bytes> for Frame {
    fn from(payload: Bytes) -> Self {
        Self::new(payload)
    }
}

/// Build a complete frame (prefix + payload) as a single byte vector.
///
/// # Example
///
/// ```
/// use framelink::protocol::build_frame;
///
/// let bytes = build_frame(b"hello").unwrap();
/// assert_eq!(bytes, [0, 0, 0, 5, b'h', b'e', b'l', b'l', b'o']);
/// ```
pub fn build_frame(payload: &[u8]) -> Result<Vec<u8>> {
    let prefix = encode_length(payload.len())?;
    let mut buf = Vec::with_capacity(LENGTH_PREFIX_SIZE + payload.len());
    buf.extend_from_slice(&prefix);
    buf.extend_from_slice(payload);
    Ok(buf)
}
