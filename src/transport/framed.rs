//! Framed transport over a duplex byte stream.
//!
//! [`FramedTransport`] turns any `AsyncRead + AsyncWrite` stream into a
//! frame-at-a-time channel:
//!
//! ```text
//!                   ┌─► read half  ─► FrameReader (FrameBuffer) ─► read_frame()
//! stream ─ split ───┤
//!   (on first use)  └─► write half ─► FrameWriter (writev)       ◄─ write_frame()
//! ```
//!
//! The stream is split lazily on the first read or write, exactly once,
//! whichever caller arrives first. Each half sits behind its own lock so a
//! reading task and a writing task sharing one transport never contend.
//!
//! # Example
//!
//! ```
//! use framelink::transport::FramedTransport;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (a, b) = tokio::io::duplex(1024);
//! let left = FramedTransport::new(a);
//! let right = FramedTransport::new(b);
//!
//! left.write_frame(b"hello").await.unwrap();
//! let frame = right.read_frame().await.unwrap().unwrap();
//! assert_eq!(frame.payload(), b"hello");
//! # }
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io::IoSlice;
use std::sync::{Mutex as StdMutex, PoisonError};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf};
use tokio::sync::{watch, Mutex, OnceCell};
use tracing::{debug, trace};

use crate::error::{FramelinkError, Result};
use crate::protocol::{
    encode_length, Frame, FrameBuffer, ABSOLUTE_MAX_FRAME_SIZE, DEFAULT_MAX_FRAME_SIZE,
    LENGTH_PREFIX_SIZE,
};

/// Size of a single socket read.
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Configuration for a framed transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// Largest payload accepted on read or write.
    pub max_frame_size: u32,
}

impl TransportConfig {
    /// Set the maximum frame size, capped at `ABSOLUTE_MAX_FRAME_SIZE`.
    pub fn with_max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.max_frame_size = max_frame_size.min(ABSOLUTE_MAX_FRAME_SIZE);
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}

/// Read side: pulls bytes off the stream and assembles frames.
struct FrameReader<R> {
    reader: R,
    buffer: FrameBuffer,
    ready: VecDeque<Frame>,
    chunk: Vec<u8>,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    fn new(reader: R, max_frame_size: u32) -> Self {
        Self {
            reader,
            buffer: FrameBuffer::with_max_frame_size(max_frame_size),
            ready: VecDeque::new(),
            chunk: vec![0u8; READ_CHUNK_SIZE],
        }
    }

    /// Read until one complete frame is available.
    ///
    /// Cancel-safe: partial data stays in the frame buffer.
    async fn read_frame(&mut self) -> Result<Option<Frame>> {
        loop {
            if let Some(frame) = self.ready.pop_front() {
                return Ok(Some(frame));
            }
            if let Some(e) = self.buffer.take_error() {
                return Err(e);
            }

            let n = self.reader.read(&mut self.chunk).await?;
            if n == 0 {
                if self.buffer.is_idle() {
                    return Ok(None);
                }
                return Err(FramelinkError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "connection closed in the middle of a frame",
                )));
            }

            trace!(bytes = n, "read chunk");
            self.ready.extend(self.buffer.push(&self.chunk[..n])?);
        }
    }
}

/// Write side: emits prefix + payload with vectored writes.
struct FrameWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one frame, continuing after partial writes, then flush.
    async fn write_frame(&mut self, prefix: &[u8; LENGTH_PREFIX_SIZE], payload: &[u8]) -> Result<()> {
        let total_size = LENGTH_PREFIX_SIZE + payload.len();
        let mut total_written = 0;

        while total_written < total_size {
            let slices = build_remaining_slices(prefix, payload, total_written);
            let written = self.writer.write_vectored(&slices).await?;
            if written == 0 {
                return Err(FramelinkError::Io(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "write_vectored returned 0",
                )));
            }
            total_written += written;
        }

        self.writer.flush().await?;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        shutdown_quietly(&mut self.writer).await
    }
}

/// Build IoSlice array for the data left after `skip_bytes` were written.
fn build_remaining_slices<'a>(
    prefix: &'a [u8; LENGTH_PREFIX_SIZE],
    payload: &'a [u8],
    skip_bytes: usize,
) -> Vec<IoSlice<'a>> {
    let mut slices = Vec::with_capacity(2);

    if skip_bytes < LENGTH_PREFIX_SIZE {
        slices.push(IoSlice::new(&prefix[skip_bytes..]));
    }

    let start_in_payload = skip_bytes.saturating_sub(LENGTH_PREFIX_SIZE);
    if start_in_payload < payload.len() {
        slices.push(IoSlice::new(&payload[start_in_payload..]));
    }

    slices
}

/// Shut down a writer, treating an already-disconnected peer as success.
async fn shutdown_quietly<W: AsyncWrite + Unpin>(writer: &mut W) -> Result<()> {
    match writer.shutdown().await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotConnected => Ok(()),
        Err(e) => Err(FramelinkError::Io(e)),
    }
}

/// Completes once the close flag is set.
async fn wait_closed(mut closed: watch::Receiver<bool>) {
    // The sender lives inside the transport, so this only errors if it is gone.
    let _ = closed.wait_for(|closed| *closed).await.map(|_| ());
}

struct Halves<S> {
    reader: Mutex<Option<FrameReader<ReadHalf<S>>>>,
    writer: Mutex<Option<FrameWriter<WriteHalf<S>>>>,
}

/// Frame-oriented transport over a duplex byte stream.
///
/// All methods take `&self`; wrap the transport in an `Arc` to read from
/// one task and write from another.
pub struct FramedTransport<S> {
    /// Raw stream until the first read or write splits it.
    stream: StdMutex<Option<S>>,
    halves: OnceCell<Halves<S>>,
    closed: watch::Sender<bool>,
    config: TransportConfig,
}

impl<S> FramedTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// Wrap a connected stream with the default configuration.
    pub fn new(stream: S) -> Self {
        Self::with_config(stream, TransportConfig::default())
    }

    /// Wrap a connected stream with a custom configuration.
    pub fn with_config(stream: S, config: TransportConfig) -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            stream: StdMutex::new(Some(stream)),
            halves: OnceCell::new(),
            closed,
            config,
        }
    }

    /// Transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Check whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Split the stream on first use.
    async fn halves(&self) -> Result<&Halves<S>> {
        if self.is_closed() {
            return Err(FramelinkError::ConnectionClosed);
        }

        self.halves
            .get_or_try_init(|| async move {
                let stream = self
                    .stream
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                let stream = match stream {
                    Some(stream) => stream,
                    None => return Err(FramelinkError::ConnectionClosed),
                };

                debug!("initializing transport streams");
                let (read_half, write_half) = tokio::io::split(stream);
                Ok(Halves {
                    reader: Mutex::new(Some(FrameReader::new(
                        read_half,
                        self.config.max_frame_size,
                    ))),
                    writer: Mutex::new(Some(FrameWriter::new(write_half))),
                })
            })
            .await
    }

    /// Read the next frame.
    ///
    /// Returns `Ok(None)` when the peer closed the connection cleanly
    /// between frames.
    ///
    /// # Errors
    ///
    /// - `ConnectionClosed` if the transport was closed locally, including
    ///   while this call was waiting
    /// - `Io` on socket errors or when the peer closes mid-frame
    /// - `Protocol` / `FrameTooLarge` when the declared length is invalid
    pub async fn read_frame(&self) -> Result<Option<Frame>> {
        let halves = self.halves().await?;
        let closed = self.closed.subscribe();

        let mut guard = halves.reader.lock().await;
        let reader = guard.as_mut().ok_or(FramelinkError::ConnectionClosed)?;

        tokio::select! {
            biased;
            _ = wait_closed(closed) => Err(FramelinkError::ConnectionClosed),
            frame = reader.read_frame() => frame,
        }
    }

    /// Write an entire buffer as one frame.
    pub async fn write_frame(&self, bytes: &[u8]) -> Result<()> {
        self.write_frame_range(bytes, 0, bytes.len()).await
    }

    /// Write `length` bytes of `bytes`, starting at `start`, as one frame.
    ///
    /// Nothing is written when the arguments are rejected.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a zero length or an empty buffer
    /// - `OutOfRange` when `start` or `start + length` falls outside the buffer
    /// - `FrameTooLarge` when `length` exceeds the configured maximum
    /// - `ConnectionClosed` / `Io` from the connection
    pub async fn write_frame_range(&self, bytes: &[u8], start: usize, length: usize) -> Result<()> {
        if length == 0 {
            return Err(FramelinkError::InvalidArgument(
                "Frame length must be positive".to_string(),
            ));
        }

        if bytes.is_empty() {
            return Err(FramelinkError::InvalidArgument(
                "Bytes to send cannot be empty".to_string(),
            ));
        }

        let out_of_range = FramelinkError::OutOfRange {
            start,
            length,
            buffer_len: bytes.len(),
        };
        if start >= bytes.len() {
            return Err(out_of_range);
        }
        let end = match start.checked_add(length) {
            Some(end) if end <= bytes.len() => end,
            _ => return Err(out_of_range),
        };

        if length > self.config.max_frame_size as usize {
            return Err(FramelinkError::FrameTooLarge {
                length: length as u64,
                max: self.config.max_frame_size,
            });
        }

        let prefix = encode_length(length)?;
        let payload = &bytes[start..end];

        let halves = self.halves().await?;
        let closed = self.closed.subscribe();

        let mut guard = halves.writer.lock().await;
        let writer = guard.as_mut().ok_or(FramelinkError::ConnectionClosed)?;

        tokio::select! {
            biased;
            _ = wait_closed(closed) => Err(FramelinkError::ConnectionClosed),
            written = writer.write_frame(&prefix, payload) => written,
        }
    }

    /// Close the transport.
    ///
    /// The first call shuts down the write side and releases the stream;
    /// later calls are no-ops. A read or write waiting on the connection
    /// fails with `ConnectionClosed`.
    pub async fn close(&self) -> Result<()> {
        if self.closed.send_replace(true) {
            return Ok(());
        }

        debug!("closing transport");

        let unsplit = self
            .stream
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(mut stream) = unsplit {
            return shutdown_quietly(&mut stream).await;
        }

        // The stream is gone, so another caller split it or is splitting it
        // now. Wait for that to settle before touching the halves.
        let halves = match self
            .halves
            .get_or_try_init(|| async { Err::<Halves<S>, _>(FramelinkError::ConnectionClosed) })
            .await
        {
            Ok(halves) => halves,
            Err(_) => return Ok(()),
        };

        let writer = halves.writer.lock().await.take();
        drop(halves.reader.lock().await.take());

        match writer {
            Some(mut writer) => writer.shutdown().await,
            None => Ok(()),
        }
    }
}

impl<S> fmt::Debug for FramedTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FramedTransport")
            .field("initialized", &self.halves.initialized())
            .field("closed", &*self.closed.borrow())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context, Poll};
    use std::time::Duration;

    use tokio::io::{duplex, DuplexStream, ReadBuf};

    use crate::protocol::build_frame;

    fn pair() -> (FramedTransport<DuplexStream>, FramedTransport<DuplexStream>) {
        let (a, b) = duplex(4096);
        (FramedTransport::new(a), FramedTransport::new(b))
    }

    /// Stream that hands out one byte per read.
    struct Trickle<S>(S);

    impl<S: AsyncRead + Unpin> AsyncRead for Trickle<S> {
        fn poll_read(
            mut self: Pin<&mut Self>,
            cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<std::io::Result<()>> {
            let mut one = [0u8; 1];
            let mut small = ReadBuf::new(&mut one);
            match Pin::new(&mut self.0).poll_read(cx, &mut small) {
                Poll::Ready(Ok(())) => {
                    buf.put_slice(small.filled());
                    Poll::Ready(Ok(()))
                }
                other => other,
            }
        }
    }

    impl<S: AsyncWrite + Unpin> AsyncWrite for Trickle<S> {
        fn poll_write(
            mut self: Pin<&mut Self>,
            cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            Pin::new(&mut self.0).poll_write(cx, buf)
        }

        fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Pin::new(&mut self.0).poll_flush(cx)
        }

        fn poll_shutdown(
            mut self: Pin<&mut Self>,
            cx: &mut Context<'_>,
        ) -> Poll<std::io::Result<()>> {
            Pin::new(&mut self.0).poll_shutdown(cx)
        }
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (left, right) = pair();

        left.write_frame(b"hello").await.unwrap();
        let payload: Vec<u8> = (0..=255).collect();
        left.write_frame(&payload).await.unwrap();

        assert_eq!(right.read_frame().await.unwrap().unwrap().payload(), b"hello");
        assert_eq!(right.read_frame().await.unwrap().unwrap().payload(), &payload[..]);
    }

    #[tokio::test]
    async fn test_round_trip_both_directions() {
        let (left, right) = pair();

        left.write_frame(b"ping").await.unwrap();
        assert_eq!(right.read_frame().await.unwrap().unwrap().payload(), b"ping");

        right.write_frame(b"pong").await.unwrap();
        assert_eq!(left.read_frame().await.unwrap().unwrap().payload(), b"pong");
    }

    #[tokio::test]
    async fn test_byte_at_a_time_delivery() {
        let (a, b) = duplex(4096);
        let writer = FramedTransport::new(a);
        let reader = FramedTransport::new(Trickle(b));

        let payload = b"fragmented one byte at a time".repeat(20);
        writer.write_frame(&payload).await.unwrap();
        writer.write_frame(b"next").await.unwrap();

        assert_eq!(reader.read_frame().await.unwrap().unwrap().payload(), &payload[..]);
        assert_eq!(reader.read_frame().await.unwrap().unwrap().payload(), b"next");
    }

    #[tokio::test]
    async fn test_frame_larger_than_pipe_capacity() {
        let (a, b) = duplex(64);
        let left = Arc::new(FramedTransport::new(a));
        let right = FramedTransport::new(b);

        let payload = vec![7u8; 100_000];
        let expected = payload.clone();
        let writer = {
            let left = left.clone();
            tokio::spawn(async move { left.write_frame(&payload).await })
        };

        let frame = right.read_frame().await.unwrap().unwrap();
        assert_eq!(frame.payload(), &expected[..]);
        writer.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_write_frame_range() {
        let (left, right) = pair();

        left.write_frame_range(b"xxhelloxx", 2, 5).await.unwrap();

        assert_eq!(right.read_frame().await.unwrap().unwrap().payload(), b"hello");
    }

    #[tokio::test]
    async fn test_invalid_arguments_write_nothing() {
        let (a, mut raw) = duplex(4096);
        let transport = FramedTransport::new(a);

        assert!(matches!(
            transport.write_frame_range(b"abc", 0, 0).await,
            Err(FramelinkError::InvalidArgument(_))
        ));
        assert!(matches!(
            transport.write_frame(b"").await,
            Err(FramelinkError::InvalidArgument(_))
        ));
        assert!(matches!(
            transport.write_frame_range(b"", 0, 3).await,
            Err(FramelinkError::InvalidArgument(_))
        ));
        assert!(matches!(
            transport.write_frame_range(b"abc", 3, 1).await,
            Err(FramelinkError::OutOfRange { start: 3, .. })
        ));
        assert!(matches!(
            transport.write_frame_range(b"abc", 1, 3).await,
            Err(FramelinkError::OutOfRange { .. })
        ));
        assert!(matches!(
            transport.write_frame_range(b"abc", 1, usize::MAX).await,
            Err(FramelinkError::OutOfRange { .. })
        ));

        transport.write_frame(b"ok").await.unwrap();

        let expected = build_frame(b"ok").unwrap();
        let mut received = vec![0u8; expected.len()];
        raw.read_exact(&mut received).await.unwrap();
        assert_eq!(received, expected);
    }

    #[tokio::test]
    async fn test_write_above_max_frame_size() {
        let (a, _b) = duplex(4096);
        let config = TransportConfig::default().with_max_frame_size(8);
        let transport = FramedTransport::with_config(a, config);

        let result = transport.write_frame(b"123456789").await;

        assert!(matches!(
            result,
            Err(FramelinkError::FrameTooLarge { length: 9, max: 8 })
        ));
    }

    #[tokio::test]
    async fn test_read_oversized_declared_length() {
        let (a, mut raw) = duplex(4096);
        let config = TransportConfig::default().with_max_frame_size(1024);
        let transport = FramedTransport::with_config(a, config);

        raw.write_all(&(1024 * 1024i32).to_be_bytes()).await.unwrap();

        assert!(matches!(
            transport.read_frame().await,
            Err(FramelinkError::FrameTooLarge { .. })
        ));
    }

    #[tokio::test]
    async fn test_read_negative_declared_length() {
        let (a, mut raw) = duplex(4096);
        let transport = FramedTransport::new(a);

        raw.write_all(&(-1i32).to_be_bytes()).await.unwrap();

        assert!(matches!(
            transport.read_frame().await,
            Err(FramelinkError::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn test_frame_before_invalid_length_is_delivered() {
        let (a, mut raw) = duplex(4096);
        let transport = FramedTransport::new(a);

        raw.write_all(&[0, 0, 0, 5, b'h', b'e', b'l', b'l', b'o', 0, 0, 0, 0])
            .await
            .unwrap();

        let frame = transport.read_frame().await.unwrap().unwrap();
        assert_eq!(frame.payload(), b"hello");
        assert!(matches!(
            transport.read_frame().await,
            Err(FramelinkError::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn test_clean_peer_close_is_end_of_stream() {
        let (left, right) = pair();

        left.write_frame(b"last").await.unwrap();
        left.close().await.unwrap();

        assert_eq!(right.read_frame().await.unwrap().unwrap().payload(), b"last");
        assert!(right.read_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_peer_close_mid_frame() {
        let (a, mut raw) = duplex(4096);
        let transport = FramedTransport::new(a);

        raw.write_all(&[0, 0, 0, 10, b'p', b'a', b'r']).await.unwrap();
        drop(raw);

        match transport.read_frame().await {
            Err(FramelinkError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let (left, _right) = pair();

        left.write_frame(b"x").await.unwrap();
        left.close().await.unwrap();
        left.close().await.unwrap();

        assert!(left.is_closed());
    }

    #[tokio::test]
    async fn test_close_before_first_use() {
        let (left, right) = pair();

        left.close().await.unwrap();
        left.close().await.unwrap();

        assert!(right.read_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_operations_after_close_fail() {
        let (left, _right) = pair();

        left.close().await.unwrap();

        assert!(matches!(
            left.read_frame().await,
            Err(FramelinkError::ConnectionClosed)
        ));
        assert!(matches!(
            left.write_frame(b"late").await,
            Err(FramelinkError::ConnectionClosed)
        ));
    }

    #[tokio::test]
    async fn test_close_wakes_blocked_reader() {
        let (left, _right) = pair();
        let left = Arc::new(left);

        let reader = {
            let left = left.clone();
            tokio::spawn(async move { left.read_frame().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        left.close().await.unwrap();

        let result = tokio::time::timeout(Duration::from_secs(1), reader)
            .await
            .expect("reader should wake on close")
            .unwrap();
        assert!(matches!(result, Err(FramelinkError::ConnectionClosed)));
    }

    #[tokio::test]
    async fn test_concurrent_reader_and_writer_share_transport() {
        let (left, right) = pair();
        let left = Arc::new(left);

        // First use races between the two tasks.
        let reader = {
            let left = left.clone();
            tokio::spawn(async move { left.read_frame().await })
        };
        let writer = {
            let left = left.clone();
            tokio::spawn(async move { left.write_frame(b"from left").await })
        };

        writer.await.unwrap().unwrap();
        assert_eq!(right.read_frame().await.unwrap().unwrap().payload(), b"from left");

        right.write_frame(b"from right").await.unwrap();
        let frame = reader.await.unwrap().unwrap().unwrap();
        assert_eq!(frame.payload(), b"from right");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_close_racing_first_write_shuts_down_stream() {
        for _ in 0..200 {
            let (a, b) = duplex(4096);
            let left = Arc::new(FramedTransport::new(a));
            let right = FramedTransport::new(b);

            let writer = {
                let left = left.clone();
                tokio::spawn(async move { left.write_frame(b"racing").await })
            };
            let closer = {
                let left = left.clone();
                tokio::spawn(async move { left.close().await })
            };
            let _ = writer.await.unwrap();
            closer.await.unwrap().unwrap();

            // `left` is still alive, so end of stream must come from close().
            let drained = tokio::time::timeout(Duration::from_secs(1), async {
                // A write cut short by close() ends in a partial frame error.
                while let Ok(Some(_)) = right.read_frame().await {}
            })
            .await;
            assert!(drained.is_ok(), "peer never saw the close");
        }
    }

    #[test]
    fn test_build_remaining_slices() {
        let prefix = [0, 0, 0, 5];

        let slices = build_remaining_slices(&prefix, b"hello", 0);
        assert_eq!(slices.len(), 2);

        let slices = build_remaining_slices(&prefix, b"hello", 2);
        assert_eq!(slices[0].len(), 2);
        assert_eq!(slices[1].len(), 5);

        let slices = build_remaining_slices(&prefix, b"hello", LENGTH_PREFIX_SIZE + 3);
        assert_eq!(slices.len(), 1);
        assert_eq!(&*slices[0], b"lo");

        assert!(build_remaining_slices(&prefix, b"hello", 9).is_empty());
    }

    #[test]
    fn test_config_max_frame_size_capped() {
        let config = TransportConfig::default().with_max_frame_size(u32::MAX);
        assert_eq!(config.max_frame_size, ABSOLUTE_MAX_FRAME_SIZE);
        assert_eq!(TransportConfig::default().max_frame_size, DEFAULT_MAX_FRAME_SIZE);
    }
}
