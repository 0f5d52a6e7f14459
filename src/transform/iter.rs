//! Streaming transform engine - StreamTransformer and MaskIter.
//!
//! This module implements the synchronous transform API. It provides
//! two main types:
//!
//! - [`StreamTransformer`] - Holds the key and configuration, and
//!   drives a reader→writer pump with progress reporting
//! - [`MaskIter`] - Iterator that yields transformed chunks from a
//!   [`std::io::Read`] source
//!
//! # Example
//!
//! ```ignore
//! use std::fs::File;
//! use maskrs::{Key, MaskConfig, NoProgress, StreamTransformer};
//!
//! let source = File::open("data.bin")?;
//! let total = source.metadata()?.len();
//! let dest = File::create("data.bin.masked")?;
//!
//! let transformer = StreamTransformer::new(
//!     Key::from_passphrase("hunter2")?,
//!     MaskConfig::default(),
//! );
//! transformer.run(source, dest, total, NoProgress)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{Read, Write};

use bytes::Bytes;

use crate::buffer::Buffer;
use crate::config::MaskConfig;
use crate::error::MaskError;
use crate::key::Key;
use crate::mask::Masker;
use crate::progress::{Control, ProgressSink};

/// A transformer that applies the keyed byte mask to byte streams.
///
/// `StreamTransformer` is the high-level API for synchronous use. It
/// holds a key and a configuration and provides methods to transform
/// data from various sources. Memory use is bounded by one chunk.
///
/// Because the transform is involutive, the same transformer (same
/// key) both masks and unmasks: there is one operation, with source
/// and destination roles swapped at the call site.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use maskrs::{Key, MaskConfig, NoProgress, StreamTransformer};
///
/// let transformer = StreamTransformer::new(
///     Key::from_passphrase("pw")?,
///     MaskConfig::default(),
/// );
///
/// let mut masked = Vec::new();
/// transformer.run(Cursor::new(b"hello".to_vec()), &mut masked, 5, NoProgress)?;
///
/// let mut restored = Vec::new();
/// transformer.run(Cursor::new(masked), &mut restored, 5, NoProgress)?;
/// assert_eq!(restored, b"hello");
/// # Ok::<(), maskrs::MaskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StreamTransformer {
    key: Key,
    config: MaskConfig,
}

impl StreamTransformer {
    /// Creates a new transformer with the given key and configuration.
    ///
    /// Key emptiness and chunk-size validity are enforced when [`Key`]
    /// and [`MaskConfig`] are constructed, so this constructor is
    /// infallible.
    pub fn new(key: Key, config: MaskConfig) -> Self {
        Self { key, config }
    }

    /// Creates a transformer from a passphrase with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::EmptyKey`] if the passphrase is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use maskrs::StreamTransformer;
    ///
    /// let transformer = StreamTransformer::from_passphrase("hunter2")?;
    /// # Ok::<(), maskrs::MaskError>(())
    /// ```
    pub fn from_passphrase(passphrase: &str) -> Result<Self, MaskError> {
        Ok(Self::new(Key::from_passphrase(passphrase)?, MaskConfig::default()))
    }

    /// Pumps the source to the destination, transforming every byte.
    ///
    /// Reads up to `chunk_size` bytes per iteration, XORs the cycled
    /// keystream into the buffer, writes it out with a single write
    /// call, and reports `(processed, total_bytes)` to the progress
    /// sink after every chunk, including the final short one. The loop
    /// ends when the source returns a zero-byte read.
    ///
    /// `total_bytes` is caller-supplied (typically a file-size query
    /// taken before the run) and is used only for progress ratios; it
    /// is never validated against the bytes actually read. A
    /// zero-length source completes without invoking the sink at all.
    ///
    /// Runs synchronously on the calling thread and blocks until
    /// completion or error; the sink is invoked inline on that thread.
    /// The handles are borrowed exclusively for the duration of the
    /// call and are closed by the caller on every exit path.
    ///
    /// # Returns
    ///
    /// The number of bytes processed, which equals both the bytes read
    /// from the source and the bytes written to the destination.
    ///
    /// # Errors
    ///
    /// - [`MaskError::Read`] - the source failed mid-stream
    /// - [`MaskError::Write`] - the destination failed mid-stream
    /// - [`MaskError::ShortWrite`] - the destination accepted fewer
    ///   bytes than offered; no retry is attempted
    /// - [`MaskError::Aborted`] - the sink returned [`Control::Abort`]
    ///
    /// All errors abort immediately and leave the destination
    /// truncated; discarding or keeping the partial output is the
    /// caller's responsibility.
    pub fn run<R, W, P>(
        &self,
        mut source: R,
        mut destination: W,
        total_bytes: u64,
        mut progress: P,
    ) -> Result<u64, MaskError>
    where
        R: Read,
        W: Write,
        P: ProgressSink,
    {
        let mut buf = Buffer::take(self.config.chunk_size());
        let mut masker = Masker::new(self.key.clone());

        loop {
            let n = source.read(&mut buf).map_err(MaskError::Read)?;
            if n == 0 {
                return Ok(masker.offset());
            }

            masker.apply(&mut buf[..n]);

            let written = destination.write(&buf[..n]).map_err(MaskError::Write)?;
            if written < n {
                return Err(MaskError::ShortWrite {
                    written,
                    requested: n,
                });
            }

            if progress.on_progress(masker.offset(), total_bytes) == Control::Abort {
                return Err(MaskError::Aborted {
                    processed: masker.offset(),
                });
            }
        }
    }

    /// Creates a transforming iterator from a reader.
    ///
    /// The iterator lazily reads up to `chunk_size` bytes at a time and
    /// yields the transformed chunks, for callers that want to route
    /// the output somewhere other than a [`Write`] handle.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use maskrs::StreamTransformer;
    ///
    /// let transformer = StreamTransformer::from_passphrase("pw")?;
    ///
    /// let mut total = 0;
    /// for chunk in transformer.transform(Cursor::new(vec![0u8; 1000])) {
    ///     total += chunk?.len();
    /// }
    /// assert_eq!(total, 1000);
    /// # Ok::<(), maskrs::MaskError>(())
    /// ```
    pub fn transform<R: Read>(&self, reader: R) -> MaskIter<R> {
        MaskIter::new(reader, self.key.clone(), self.config)
    }

    /// Transforms an in-memory buffer.
    ///
    /// Convenience for data that is already in memory; equivalent to a
    /// full run from offset 0.
    ///
    /// # Example
    ///
    /// ```
    /// use maskrs::StreamTransformer;
    ///
    /// let transformer = StreamTransformer::from_passphrase("AB")?;
    /// let masked = transformer.transform_bytes(&[0x00, 0x00, 0x00]);
    /// assert_eq!(&masked[..], &[0x41, 0x42, 0x41]);
    /// # Ok::<(), maskrs::MaskError>(())
    /// ```
    pub fn transform_bytes(&self, data: &[u8]) -> Bytes {
        Masker::new(self.key.clone()).apply_copy(data)
    }

    /// Returns the key used by this transformer.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the configuration used by this transformer.
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }
}

/// An iterator that yields transformed chunks from a reader.
///
/// `MaskIter` reads up to `chunk_size` bytes per iteration and yields
/// each chunk with the keystream applied. The final chunk of a stream
/// may be shorter than the configured size. A read failure ends the
/// iterator after yielding the error.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use maskrs::StreamTransformer;
///
/// let transformer = StreamTransformer::from_passphrase("pw")?;
/// let mut iter = transformer.transform(Cursor::new(b"data".to_vec()));
///
/// while let Some(chunk) = iter.next() {
///     let chunk = chunk?;
///     assert!(chunk.len() <= transformer.config().chunk_size());
/// }
/// # Ok::<(), maskrs::MaskError>(())
/// ```
pub struct MaskIter<R> {
    reader: R,
    masker: Masker,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: Read> MaskIter<R> {
    fn new(reader: R, key: Key, config: MaskConfig) -> Self {
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

impl<R: Read> Iterator for MaskIter<R> {
    type Item = Result<Bytes, MaskError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read(&mut self.buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(n) => {
                self.masker.apply(&mut self.buf[..n]);
                Some(Ok(Bytes::copy_from_slice(&self.buf[..n])))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(MaskError::Read(e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use std::io::Cursor;

    fn transformer(pass: &str) -> StreamTransformer {
        StreamTransformer::from_passphrase(pass).unwrap()
    }

    #[test]
    fn test_known_answer() {
        // key "AB" over three zero bytes
        let out = transformer("AB").transform_bytes(&[0x00, 0x00, 0x00]);
        assert_eq!(&out[..], &[0x41, 0x42, 0x41]);

        let back = transformer("AB").transform_bytes(&out);
        assert_eq!(&back[..], &[0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_run_empty_source() {
        let mut out = Vec::new();
        let processed = transformer("pw")
            .run(Cursor::new(Vec::new()), &mut out, 0, NoProgress)
            .unwrap();
        assert_eq!(processed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_matches_transform_bytes() {
        let data: Vec<u8> = (0..10_000).map(|i| (i % 251) as u8).collect();
        let t = transformer("hunter2");

        let mut streamed = Vec::new();
        t.run(
            Cursor::new(data.clone()),
            &mut streamed,
            data.len() as u64,
            NoProgress,
        )
        .unwrap();

        assert_eq!(&streamed[..], &t.transform_bytes(&data)[..]);
    }

    #[test]
    fn test_iter_drains_reader() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let t = StreamTransformer::new(
            Key::from_passphrase("pw").unwrap(),
            MaskConfig::new(64).unwrap(),
        );

        let chunks: Vec<_> = t
            .transform(Cursor::new(data.clone()))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(chunks.len() >= 1000 / 64);
        let total: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(total, data.len());

        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.to_vec()).collect();
        assert_eq!(&joined[..], &t.transform_bytes(&data)[..]);
    }

    #[test]
    fn test_iter_empty_reader() {
        let t = transformer("pw");
        let mut iter = t.transform(Cursor::new(Vec::new()));
        assert!(iter.next().is_none());
        assert_eq!(iter.offset(), 0);
    }

    #[test]
    fn test_iter_read_error_is_terminal() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let t = transformer("pw");
        let mut iter = t.transform(FailingReader);

        assert!(matches!(iter.next(), Some(Err(MaskError::Read(_)))));
        assert!(iter.next().is_none());
    }
}
