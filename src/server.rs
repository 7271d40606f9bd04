//! Server builder and accept loop.
//!
//! The [`ServerBuilder`] configures the listener; the [`Server`] accepts
//! connections and runs one [`serve_connection`] task per client. A failing
//! connection never affects the listener or the other connections.
//!
//! # Example
//!
//! ```ignore
//! use framelink::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::builder().port(3305).bind().await?;
//!     server
//!         .run_until(async {
//!             let _ = tokio::signal::ctrl_c().await;
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::handler::{serve_connection, ConsoleObserver, Observer};
use crate::transport::{FrameListener, TransportConfig};

/// Default port for this protocol.
pub const DEFAULT_PORT: u16 = 3305;

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (all interfaces by default).
    pub bind_addr: IpAddr,
    /// Port to listen on; 0 picks a free port.
    pub port: u16,
    /// Configuration for accepted connections.
    pub transport: TransportConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            transport: TransportConfig::default(),
        }
    }
}

/// Builder for configuring and binding a [`Server`].
pub struct ServerBuilder {
    config: ServerConfig,
    observer: Arc<dyn Observer>,
}

impl ServerBuilder {
    /// Create a new server builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            observer: Arc::new(ConsoleObserver),
        }
    }

    /// Set the address to bind.
    pub fn bind_addr(mut self, addr: IpAddr) -> Self {
        self.config.bind_addr = addr;
        self
    }

    /// Set the port to listen on.
    ///
    /// Default: 3305
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the maximum frame size accepted from clients.
    ///
    /// Default: 16 MiB
    pub fn max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.config.transport = self.config.transport.with_max_frame_size(max_frame_size);
        self
    }

    /// Set the observer connection handlers report to.
    ///
    /// Default: [`ConsoleObserver`]
    pub fn observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Bind the listener.
    pub async fn bind(self) -> Result<Server> {
        let addr = SocketAddr::new(self.config.bind_addr, self.config.port);
        let listener = FrameListener::bind(addr, self.config.transport).await?;
        info!("Server running on {}", listener.local_addr()?);

        Ok(Server {
            listener,
            observer: self.observer,
        })
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound server, ready to accept connections.
pub struct Server {
    listener: FrameListener,
    observer: Arc<dyn Observer>,
}

impl Server {
    /// Create a new server builder.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections forever.
    pub async fn run(self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Accept connections until `shutdown` completes.
    ///
    /// Stops accepting new clients; handlers already running are left to
    /// finish on their own.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, no longer accepting connections");
                    return Ok(());
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((transport, peer)) => {
                        debug!(%peer, "spawning connection handler");
                        tokio::spawn(serve_connection(transport, peer, self.observer.clone()));
                    }
                    Err(e) => {
                        warn!("Issue with accepting a client, reason: {}", e);
                    }
                },
            }
        }
    }
}
