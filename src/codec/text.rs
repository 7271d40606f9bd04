//! Text codec - UTF-8 conversion for human-readable payloads.
//!
//! The transport is binary-transparent; text is only a convention of the
//! server and client applications.
//!
//! # Example
//!
//! ```
//! use framelink::codec::TextCodec;
//!
//! let encoded = TextCodec::encode("hello");
//! assert_eq!(&encoded[..], b"hello");
//!
//! let decoded = TextCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, "hello");
//! ```

use bytes::Bytes;

use crate::error::Result;

/// UTF-8 text codec.
pub struct TextCodec;

impl TextCodec {
    /// Encode text as UTF-8 bytes.
    #[inline]
    pub fn encode(text: &str) -> Bytes {
        Bytes::copy_from_slice(text.as_bytes())
    }

    /// Decode UTF-8 bytes into an owned string.
    ///
    /// # Errors
    ///
    /// Returns `Encoding` if the bytes are not valid UTF-8.
    #[inline]
    pub fn decode(bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FramelinkError;

    #[test]
    fn test_encode_multibyte() {
        let encoded = TextCodec::encode("€");
        assert_eq!(&encoded[..], &[0xE2, 0x82, 0xAC]);
    }

    #[test]
    fn test_decode_multibyte() {
        assert_eq!(TextCodec::decode(&[0xE2, 0x82, 0xAC]).unwrap(), "€");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let result = TextCodec::decode(&[0x66, 0x6F, 0xFF]);
        assert!(matches!(result, Err(FramelinkError::Encoding(_))));
    }

    #[test]
    fn test_decode_truncated_sequence() {
        let bytes = TextCodec::encode("ü");
        let result = TextCodec::decode(&bytes[..1]);
        assert!(result.is_err());
    }
}
