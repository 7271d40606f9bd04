//! TCP listener and dialer producing framed transports.
//!
//! # Example
//!
//! ```ignore
//! use framelink::transport::{FrameListener, TransportConfig};
//!
//! let listener = FrameListener::bind("0.0.0.0:3305".parse()?, TransportConfig::default()).await?;
//! let (transport, peer) = listener.accept().await?;
//! ```

use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpStream};
use tracing::debug;

use super::{FramedTransport, TransportConfig};
use crate::error::Result;

/// Framed transport over a TCP connection.
pub type TcpTransport = FramedTransport<TcpStream>;

/// TCP listener that wraps every accepted connection in a [`TcpTransport`].
#[derive(Debug)]
pub struct FrameListener {
    listener: TcpListener,
    config: TransportConfig,
}

impl FrameListener {
    /// Bind to a socket address.
    pub async fn bind(addr: SocketAddr, config: TransportConfig) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, config })
    }

    /// Accept a single connection.
    ///
    /// The returned transport has not touched the stream yet; its halves are
    /// created on first read or write.
    pub async fn accept(&self) -> Result<(TcpTransport, SocketAddr)> {
        let (stream, peer) = self.listener.accept().await?;
        debug!(%peer, "accepted connection");
        Ok((FramedTransport::with_config(stream, self.config), peer))
    }

    /// Get the bound address.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Transport configuration applied to accepted connections.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

/// Connect to `host:port` and wrap the stream in a [`TcpTransport`].
///
/// Returns the transport and the resolved remote address.
pub async fn connect(host: &str, port: u16, config: TransportConfig) -> Result<(TcpTransport, SocketAddr)> {
    let stream = TcpStream::connect((host, port)).await?;
    let remote = stream.peer_addr()?;
    debug!(%remote, "connected");
    Ok((FramedTransport::with_config(stream, config), remote))
}
