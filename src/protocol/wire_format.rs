//! Wire format encoding and decoding.
//!
//! Every frame is a length prefix followed by the payload:
//! ```text
//! ┌──────────────┬─────────────────┐
//! │ Length       │ Payload         │
//! │ 4 bytes      │ Length bytes    │
//! │ int32 BE     │ raw             │
//! └──────────────┴─────────────────┘
//! ```
//!
//! There is no magic number, version byte or checksum. The length is signed
//! on the wire; only `1..=max_frame_size` is valid.

use crate::error::{FramelinkError, Result};

/// Length prefix size in bytes (fixed, exactly 4).
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Default maximum frame payload size (16 MiB).
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 16 * 1024 * 1024;

/// Absolute maximum payload size (max i32, the largest encodable length).
pub const ABSOLUTE_MAX_FRAME_SIZE: u32 = i32::MAX as u32;

/// Encode a payload length as a big-endian signed prefix.
///
/// # Errors
///
/// Returns `InvalidArgument` for a zero length and `FrameTooLarge` when the
/// length cannot be represented as a positive `i32`.
///
/// # Example
///
/// ```
/// use framelink::protocol::encode_length;
///
/// assert_eq!(encode_length(5).unwrap(), [0, 0, 0, 5]);
/// assert!(encode_length(0).is_err());
/// ```
pub fn encode_length(length: usize) -> Result<[u8; LENGTH_PREFIX_SIZE]> {
    if length == 0 {
        return Err(FramelinkError::InvalidArgument(
            "Frame length must be positive".to_string(),
        ));
    }
    let length = i32::try_from(length).map_err(|_| FramelinkError::FrameTooLarge {
        length: length as u64,
        max: ABSOLUTE_MAX_FRAME_SIZE,
    })?;
    Ok(length.to_be_bytes())
}

/// Decode the declared length from a prefix.
///
/// Returns `None` if the buffer is too short. The value is not validated.
pub fn decode_length(buf: &[u8]) -> Option<i32> {
    if buf.len() < LENGTH_PREFIX_SIZE {
        return None;
    }
    Some(i32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]))
}

/// Validate a length declared by the peer.
///
/// Checks:
/// - Length is positive
/// - Length doesn't exceed `max_frame_size`
pub fn validate_length(declared: i32, max_frame_size: u32) -> Result<u32> {
    if declared <= 0 {
        return Err(FramelinkError::Protocol(format!(
            "Declared frame length {} is not positive",
            declared
        )));
    }

    let length = declared as u32;
    if length > max_frame_size {
        return Err(FramelinkError::FrameTooLarge {
            length: length as u64,
            max: max_frame_size,
        });
    }

    Ok(length)
}
