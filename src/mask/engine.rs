//! Core keystream engine - Masker with push API.
//!
//! This module implements the position-chained XOR keystream. It
//! provides a pure push interface:
//!
//! - [`Masker`] - Stateful engine that transforms buffers in place
//! - `apply()` - Feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - `seek()` / `reset()` - Reposition the keystream
//!
//! # Example
//!
//! ```
//! use maskrs::{Key, Masker};
//!
//! let key = Key::from_passphrase("AB")?;
//! let mut masker = Masker::new(key);
//!
//! let mut data = vec![0x00, 0x00, 0x00];
//! masker.apply(&mut data);
//! assert_eq!(data, vec![0x41, 0x42, 0x41]);
//!
//! // Applying again from offset 0 recovers the input
//! masker.reset();
//! masker.apply(&mut data);
//! assert_eq!(data, vec![0x00, 0x00, 0x00]);
//! # Ok::<(), maskrs::MaskError>(())
//! ```

use bytes::Bytes;

use crate::key::Key;

/// A push engine that XORs a cycled keystream into byte buffers.
///
/// `Masker` holds the key and the absolute stream offset. Each call to
/// [`Masker::apply`] transforms the buffer in place against the
/// keystream at the current offset and advances the offset by the
/// buffer length, so the output is identical no matter how the stream
/// is sliced into buffers.
///
/// # Involution
///
/// XOR is its own inverse: applying the same keystream twice at the
/// same offsets yields the original bytes. There is no separate
/// "unmask" operation.
///
/// # Determinism
///
/// Identical byte streams produce identical output, regardless of:
/// - How many bytes are applied at once (1 byte vs 1MB)
/// - Number of `apply()` calls
///
/// # Example
///
/// ```
/// use maskrs::{Key, Masker};
///
/// let key = Key::from_passphrase("hunter2")?;
///
/// // One big apply...
/// let mut all = vec![7u8; 100];
/// let mut masker = Masker::new(key.clone());
/// masker.apply(&mut all);
///
/// // ...equals many small applies.
/// let mut split = vec![7u8; 100];
/// let mut masker2 = Masker::new(key);
/// for piece in split.chunks_mut(13) {
///     masker2.apply(piece);
/// }
/// assert_eq!(all, split);
/// # Ok::<(), maskrs::MaskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Masker {
    key: Key,
    offset: u64,
}

impl Masker {
    /// Creates a new masker positioned at stream offset 0.
    pub fn new(key: Key) -> Self {
        Self { key, offset: 0 }
    }

    /// XORs the keystream into `buf` in place and advances the offset.
    ///
    /// Byte `i` of `buf` is combined with
    /// `key[(offset + i) mod key_len]`.
    pub fn apply(&mut self, buf: &mut [u8]) {
        let key = self.key.as_bytes();
        let key_len = key.len() as u64;
        let mut pos = (self.offset % key_len) as usize;

        for byte in buf.iter_mut() {
            *byte ^= key[pos];
            pos += 1;
            if pos == key.len() {
                pos = 0;
            }
        }

        self.offset += buf.len() as u64;
    }

    /// Transforms a borrowed slice into a freshly allocated [`Bytes`].
    ///
    /// Convenience for callers that cannot mutate the input in place.
    pub fn apply_copy(&mut self, data: &[u8]) -> Bytes {
        let mut out = data.to_vec();
        self.apply(&mut out);
        Bytes::from(out)
    }

    /// Returns the current absolute stream offset.
    ///
    /// This is the position of the next byte to be transformed.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Repositions the keystream at an absolute stream offset.
    ///
    /// Useful for resuming a transform mid-stream: seeking to offset
    /// `n` and applying is equivalent to having transformed the first
    /// `n` bytes and continuing.
    pub fn seek(&mut self, offset: u64) {
        self.offset = offset;
    }

    /// Resets the masker to stream offset 0 for a new stream.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Returns the key used by this masker.
    pub fn key(&self) -> &Key {
        &self.key
    }
}
