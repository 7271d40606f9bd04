//! Transport module - framed connections over byte streams.
//!
//! Provides:
//! - [`FramedTransport`]: `read_frame` / `write_frame` / `close` over any
//!   `AsyncRead + AsyncWrite` stream
//! - [`FrameListener`] and [`connect`]: TCP accept and dial

mod framed;
mod tcp;

pub use framed::{FramedTransport, TransportConfig};
pub use tcp::{connect, FrameListener, TcpTransport};
