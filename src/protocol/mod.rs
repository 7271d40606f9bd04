//! Protocol module - wire format, framing, and frame types.
//!
//! This module implements the length-prefixed framing protocol:
//! - 4-byte big-endian signed length prefix encoding/decoding
//! - Frame buffer for accumulating partial reads
//! - Frame struct with payload accessors

mod frame;
mod frame_buffer;
mod wire_format;

pub use frame::{build_frame, Frame};
pub use frame_buffer::FrameBuffer;
pub use wire_format::{
    decode_length, encode_length, validate_length, ABSOLUTE_MAX_FRAME_SIZE,
    DEFAULT_MAX_FRAME_SIZE, LENGTH_PREFIX_SIZE,
};
