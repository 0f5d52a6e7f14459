//! Async stream adapter for masking.
//!
//! This module provides asynchronous transformation using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and
//! compatible with tokio, async-std, smol, and other async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use maskrs::{mask_async, Key, MaskConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), maskrs::MaskError> {
//!     let key = Key::from_passphrase("pw")?;
//!     let mut stream = mask_async(reader, key, MaskConfig::default());
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("chunk: {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::config::MaskConfig;
use crate::error::MaskError;
use crate::key::Key;
use crate::mask::Masker;

pin_project! {
    /// A stream that yields transformed chunks from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible
    /// runtime. Each item is one transformed chunk of at most
    /// `chunk_size` bytes; the keystream offset is chained across
    /// chunks, so collecting the stream equals a synchronous transform
    /// of the same bytes.
    pub struct MaskStream<R> {
        #[pin]
        reader: R,
        masker: Masker,
        buf: Vec<u8>,
        finished: bool,
    }
}

impl<R> MaskStream<R> {
    /// Creates a new mask stream from an async reader.
    pub fn new(reader: R, key: Key, config: MaskConfig) -> Self {
        Self {
            reader,
            masker: Masker::new(key),
            buf: vec![0u8; config.chunk_size()],
            finished: false,
        }
    }

    /// Returns the absolute stream offset of the next chunk.
    pub fn offset(&self) -> u64 {
        self.masker.offset()
    }
}

impl<R: AsyncRead + Unpin> Stream for MaskStream<R> {
    type Item = Result<Bytes, MaskError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        match this.reader.poll_read(cx, &mut this.buf[..]) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Err(e)) => {
                *this.finished = true;
                Poll::Ready(Some(Err(MaskError::Read(e))))
            }
            Poll::Ready(Ok(0)) => {
                *this.finished = true;
                Poll::Ready(None)
            }
            Poll::Ready(Ok(n)) => {
                this.masker.apply(&mut this.buf[..n]);
                Poll::Ready(Some(Ok(Bytes::copy_from_slice(&this.buf[..n]))))
            }
        }
    }
}

/// Creates a mask stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use maskrs::{mask_async, Key, MaskConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let key = Key::from_passphrase("pw")?;
/// let stream = mask_async(tokio_reader.compat(), key, MaskConfig::default());
/// ```
///
/// # Returns
///
/// A [`MaskStream`] that implements
/// `Stream<Item = Result<Bytes, MaskError>>`.
pub fn mask_async<R: AsyncRead>(reader: R, key: Key, config: MaskConfig) -> MaskStream<R> {
    MaskStream::new(reader, key, config)
}
