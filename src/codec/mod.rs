//! Codec module - conversion between frame payloads and application values.
//!
//! - [`TextCodec`] - UTF-8 text, used by the server and client applications
//!
//! Codecs are marker structs with static methods rather than trait objects.

mod text;

pub use text::TextCodec;
