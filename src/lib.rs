//! # framelink
//!
//! Length-prefixed message framing over TCP, plus the small chat-style
//! server and client built on it.
//!
//! ## Wire format
//!
//! Every frame is a 4-byte big-endian signed length followed by exactly that
//! many payload bytes. Lengths must be at least 1 and at most the configured
//! maximum frame size.
//!
//! ## Architecture
//!
//! - **Transport** ([`transport::FramedTransport`]): `read_frame`,
//!   `write_frame`, `close` over any async byte stream
//! - **Handlers** ([`handler`]): per-connection loops reporting to an
//!   [`handler::Observer`]
//! - **Server / Client**: accept loop and dialer with console loop
//!
//! ## Example
//!
//! ```ignore
//! use framelink::{Client, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::builder().port(0).bind().await?;
//!     let port = server.local_addr()?.port();
//!     tokio::spawn(server.run());
//!
//!     let client = Client::builder().host("127.0.0.1").port(port).connect().await?;
//!     client.send("hello").await?;
//!     client.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod handler;
pub mod logging;
pub mod protocol;
pub mod transport;

mod client;
mod server;

pub use client::{is_quit_command, Client, ClientBuilder, ClientConfig, DEFAULT_HOST};
pub use error::{FramelinkError, Result};
pub use server::{Server, ServerBuilder, ServerConfig, DEFAULT_PORT};
