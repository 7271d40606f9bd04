//! Per-connection read loops.
//!
//! - [`serve_connection`]: server side, acknowledges every frame
//! - [`receive_loop`]: client side, only reports what arrives
//!
//! Both loops keep failures to their own connection: errors are reported to
//! the observer and end the loop, never the process.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use super::Observer;
use crate::codec::TextCodec;
use crate::error::FramelinkError;
use crate::protocol::Frame;
use crate::transport::FramedTransport;

/// Reply the server sends for every frame it receives.
pub const ACKNOWLEDGEMENT: &str = "Got message!";

fn report_frame(frame: &Frame, peer: SocketAddr, observer: &dyn Observer) {
    match frame.text() {
        Ok(text) => observer.on_message(peer, &text),
        Err(e) => observer.on_error(peer, &e),
    }
}

/// Serve one accepted connection until the peer leaves or the connection fails.
///
/// Every frame is reported to the observer and answered with
/// [`ACKNOWLEDGEMENT`]. The transport is closed when the loop ends.
pub async fn serve_connection<S>(
    transport: FramedTransport<S>,
    peer: SocketAddr,
    observer: Arc<dyn Observer>,
) where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    debug!(%peer, "connection handler started");
    let ack = TextCodec::encode(ACKNOWLEDGEMENT);

    loop {
        let frame = match transport.read_frame().await {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                debug!(%peer, "peer closed connection");
                break;
            }
            Err(e) => {
                observer.on_error(peer, &e);
                break;
            }
        };

        report_frame(&frame, peer, observer.as_ref());

        if let Err(e) = transport.write_frame(&ack).await {
            observer.on_error(peer, &e);
            break;
        }
    }

    if let Err(e) = transport.close().await {
        debug!(%peer, "Close after handler exit failed: {}", e);
    }
    observer.on_closed(peer);
}

/// Report frames from the server until it disconnects.
///
/// A local `close()` on the shared transport ends the loop quietly.
pub async fn receive_loop<S>(
    transport: Arc<FramedTransport<S>>,
    peer: SocketAddr,
    observer: Arc<dyn Observer>,
) where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    loop {
        match transport.read_frame().await {
            Ok(Some(frame)) => report_frame(&frame, peer, observer.as_ref()),
            Ok(None) => {
                debug!(%peer, "server closed connection");
                break;
            }
            Err(FramelinkError::ConnectionClosed) => break,
            Err(e) => {
                observer.on_error(peer, &e);
                break;
            }
        }
    }

    observer.on_closed(peer);
}
