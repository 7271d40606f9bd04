//! Client builder and console loop.
//!
//! The [`ClientBuilder`] configures the connection; [`ClientBuilder::connect`]
//! manages the lifecycle:
//! 1. Dial the server
//! 2. Wrap the stream in a framed transport
//! 3. Spawn the background [`receive_loop`]
//!
//! [`Client::run_console`] then sends one frame per input line until the user
//! types `QUIT` or `EXIT` (any case) or input ends.
//!
//! # Example
//!
//! ```ignore
//! use framelink::Client;
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().host("localhost").connect().await?;
//!     client.run_console(BufReader::new(tokio::io::stdin())).await?;
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::codec::TextCodec;
use crate::error::Result;
use crate::handler::{receive_loop, ConsoleObserver, Observer};
use crate::server::DEFAULT_PORT;
use crate::transport::{connect, TcpTransport, TransportConfig};

/// Default host to connect to.
pub const DEFAULT_HOST: &str = "localhost";

/// Console commands that end the session.
const QUIT_COMMANDS: [&str; 2] = ["QUIT", "EXIT"];

/// Check whether an input line is a quit command (case-insensitive).
pub fn is_quit_command(line: &str) -> bool {
    QUIT_COMMANDS
        .iter()
        .any(|command| line.eq_ignore_ascii_case(command))
}

/// Dialer configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host name or address of the server.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Configuration for the connection.
    pub transport: TransportConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            transport: TransportConfig::default(),
        }
    }
}

/// Builder for configuring and connecting a [`Client`].
pub struct ClientBuilder {
    config: ClientConfig,
    observer: Arc<dyn Observer>,
}

impl ClientBuilder {
    /// Create a new client builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            observer: Arc::new(ConsoleObserver),
        }
    }

    /// Set the server host.
    ///
    /// Default: "localhost"
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port.
    ///
    /// Default: 3305
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the maximum frame size accepted from the server.
    ///
    /// Default: 16 MiB
    pub fn max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.config.transport = self.config.transport.with_max_frame_size(max_frame_size);
        self
    }

    /// Set the observer for messages from the server.
    ///
    /// Default: [`ConsoleObserver`]
    pub fn observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Connect to the server and start the background receive loop.
    pub async fn connect(self) -> Result<Client> {
        info!(
            "Connecting to remote server {}:{}",
            self.config.host, self.config.port
        );

        let (transport, remote) =
            connect(&self.config.host, self.config.port, self.config.transport).await?;
        let transport = Arc::new(transport);

        let receiver = tokio::spawn(receive_loop(transport.clone(), remote, self.observer));

        Ok(Client {
            transport,
            remote,
            receiver,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A connected client.
///
/// Use `send()` to write a message, `run_console()` for the interactive loop.
pub struct Client {
    /// Shared with the receive loop.
    transport: Arc<TcpTransport>,
    remote: SocketAddr,
    receiver: JoinHandle<()>,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Resolved server address.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    /// Send one text message as a frame.
    pub async fn send(&self, text: &str) -> Result<()> {
        self.transport.write_frame(&TextCodec::encode(text)).await
    }

    /// Close the connection. Safe to call more than once.
    pub async fn close(&self) -> Result<()> {
        self.transport.close().await
    }

    /// Run the console loop over `input`.
    ///
    /// Quit commands and end of input close the connection and return
    /// `Ok(())`. Empty lines are skipped. A line that cannot be sent as a
    /// frame (longer than the maximum frame size) is logged and skipped;
    /// a connection failure is returned to the caller.
    pub async fn run_console<R>(self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            if is_quit_command(&line) {
                debug!("quit command received");
                break;
            }

            if line.is_empty() {
                continue;
            }

            if let Err(e) = self.send(&line).await {
                if !e.is_argument_error() {
                    return Err(e);
                }
                warn!("Message not sent: {}", e);
            }
        }

        self.shutdown().await
    }

    /// Close the connection and wait for the receive loop to finish.
    pub async fn shutdown(self) -> Result<()> {
        self.transport.close().await?;
        if let Err(e) = self.receiver.await {
            warn!("Receive loop ended abnormally: {}", e);
        }
        Ok(())
    }
}
