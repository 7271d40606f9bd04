//! Observers receive what connection handlers see.
//!
//! Handlers never print or decide how errors are surfaced; they report to an
//! [`Observer`]. The binaries use [`ConsoleObserver`]; tests and embedders
//! can use [`ChannelObserver`] to consume events programmatically.

use std::io::Write;
use std::net::SocketAddr;

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::error::FramelinkError;

/// Sink for handler events.
///
/// Called from handler tasks, so implementations must be cheap and must not
/// block for long.
pub trait Observer: Send + Sync {
    /// A frame arrived and was decoded as text.
    fn on_message(&self, peer: SocketAddr, text: &str);

    /// A frame could not be decoded, or the connection failed.
    fn on_error(&self, peer: SocketAddr, error: &FramelinkError);

    /// The handler loop for `peer` has ended.
    fn on_closed(&self, _peer: SocketAddr) {}
}

/// Prints messages to stdout, one per line, and logs errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn on_message(&self, peer: SocketAddr, text: &str) {
        debug!(%peer, bytes = text.len(), "message received");
        if let Err(e) = write_stdout_line(text) {
            warn!("Failed to write message to stdout: {}", e);
        }
    }

    fn on_error(&self, peer: SocketAddr, error: &FramelinkError) {
        error!(%peer, "Error when communicating: {}", error);
    }

    fn on_closed(&self, peer: SocketAddr) {
        debug!(%peer, "connection closed");
    }
}

/// Write a line to stdout.
///
/// Uses an explicit `\n` and flushes immediately so each message shows up
/// as soon as it arrives. Logs go to stderr, never here.
fn write_stdout_line(line: &str) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(line.as_bytes())?;
    handle.write_all(b"\n")?;
    handle.flush()?;
    Ok(())
}

/// Event forwarded by [`ChannelObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverEvent {
    /// Decoded message text.
    Message { peer: SocketAddr, text: String },
    /// Error rendered with `Display`.
    Error { peer: SocketAddr, error: String },
    /// Handler loop finished.
    Closed { peer: SocketAddr },
}

/// Forwards every event into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<ObserverEvent>,
}

impl ChannelObserver {
    /// Create an observer and the receiver its events arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ObserverEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: ObserverEvent) {
        // Receiver dropped: nobody is listening any more.
        let _ = self.tx.send(event);
    }
}

impl Observer for ChannelObserver {
    fn on_message(&self, peer: SocketAddr, text: &str) {
        self.send(ObserverEvent::Message {
            peer,
            text: text.to_string(),
        });
    }

    fn on_error(&self, peer: SocketAddr, error: &FramelinkError) {
        self.send(ObserverEvent::Error {
            peer,
            error: error.to_string(),
        });
    }

    fn on_closed(&self, peer: SocketAddr) {
        self.send(ObserverEvent::Closed { peer });
    }
}
