//! Handler module - connection loops and the observers they report to.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use framelink::handler::{serve_connection, ConsoleObserver};
//!
//! let (transport, peer) = listener.accept().await?;
//! tokio::spawn(serve_connection(transport, peer, Arc::new(ConsoleObserver)));
//! ```

mod connection;
mod observer;

pub use connection::{receive_loop, serve_connection, ACKNOWLEDGEMENT};
pub use observer::{ChannelObserver, ConsoleObserver, Observer, ObserverEvent};
