//! Frame buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for zero-copy buffer management.
//! Implements a state machine for handling fragmented frames:
//! - `WaitingForLength`: Need at least 4 bytes
//! - `WaitingForPayload`: Length validated, need N more payload bytes
//!
//! The declared length is validated before any payload is buffered, and the
//! buffer only grows as bytes actually arrive, so a peer cannot make us
//! allocate a frame it never sends.
//!
//! # Example
//!
//! ```
//! use framelink::protocol::{build_frame, FrameBuffer};
//!
//! let mut buffer = FrameBuffer::new();
//! let bytes = build_frame(b"hello").unwrap();
//!
//! // Data arrives in chunks from the socket
//! assert!(buffer.push(&bytes[..3]).unwrap().is_empty());
//! let frames = buffer.push(&bytes[3..]).unwrap();
//!
//! assert_eq!(frames[0].payload(), b"hello");
//! ```

use bytes::BytesMut;

use super::wire_format::{decode_length, validate_length, DEFAULT_MAX_FRAME_SIZE, LENGTH_PREFIX_SIZE};
use super::Frame;
use crate::error::{FramelinkError, Result};

/// Initial buffer capacity.
const INITIAL_CAPACITY: usize = 8 * 1024;

/// State machine for frame parsing.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Waiting for the complete 4-byte length prefix.
    WaitingForLength,
    /// Length parsed, waiting for payload bytes.
    WaitingForPayload { remaining: u32 },
}

/// Buffer for accumulating incoming bytes and extracting complete frames.
#[derive(Debug)]
pub struct FrameBuffer {
    /// Accumulated bytes from socket reads.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Maximum allowed payload size.
    max_frame_size: u32,
    /// Invalid prefix found behind frames that were already returned.
    pending_error: Option<FramelinkError>,
}

impl FrameBuffer {
    /// Create a new frame buffer with the default max frame size.
    pub fn new() -> Self {
        Self::with_max_frame_size(DEFAULT_MAX_FRAME_SIZE)
    }

    /// Create a new frame buffer with a custom max frame size.
    pub fn with_max_frame_size(max_frame_size: u32) -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
            state: State::WaitingForLength,
            max_frame_size,
            pending_error: None,
        }
    }

    /// Push data into the buffer and extract all complete frames.
    ///
    /// Partial data is kept for the next push.
    ///
    /// # Errors
    ///
    /// Returns `Protocol` for a zero or negative declared length and
    /// `FrameTooLarge` when the declared length exceeds the maximum. The
    /// buffer is unusable afterwards; the connection should be dropped.
    ///
    /// Frames completed before an invalid prefix are still returned; the
    /// error is held back until [`take_error`](Self::take_error) or the
    /// next push.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Frame>> {
        if let Some(e) = self.pending_error.take() {
            return Err(e);
        }

        self.buffer.extend_from_slice(data);

        let mut frames = Vec::new();
        loop {
            match self.try_extract_one() {
                Ok(Some(frame)) => frames.push(frame),
                Ok(None) => break,
                Err(e) if frames.is_empty() => return Err(e),
                Err(e) => {
                    self.pending_error = Some(e);
                    break;
                }
            }
        }

        Ok(frames)
    }

    /// Take the error held back by the last `push`, if any.
    pub fn take_error(&mut self) -> Option<FramelinkError> {
        self.pending_error.take()
    }

    /// Try to extract a single frame from the buffer.
    fn try_extract_one(&mut self) -> Result<Option<Frame>> {
        match self.state {
            State::WaitingForLength => {
                let declared = match decode_length(&self.buffer) {
                    Some(declared) => declared,
                    None => return Ok(None),
                };

                let length = validate_length(declared, self.max_frame_size)?;
                let _ = self.buffer.split_to(LENGTH_PREFIX_SIZE);

                self.state = State::WaitingForPayload { remaining: length };
                self.try_extract_one()
            }

            State::WaitingForPayload { remaining } => {
                let remaining = remaining as usize;
                if self.buffer.len() < remaining {
                    return Ok(None);
                }

                let payload = self.buffer.split_to(remaining).freeze();
                self.state = State::WaitingForLength;

                Ok(Some(Frame::new(payload)))
            }
        }
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True when no partial frame is pending (safe point for end-of-stream).
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::WaitingForLength) && self.buffer.is_empty()
    }

    /// Maximum accepted payload size.
    pub fn max_frame_size(&self) -> u32 {
        self.max_frame_size
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForLength;
        self.pending_error = None;
    }

    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match self.state {
            State::WaitingForLength => "WaitingForLength",
            State::WaitingForPayload { .. } => "WaitingForPayload",
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
