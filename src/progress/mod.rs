//! Progress reporting.
//!
//! The engine reports progress through a [`ProgressSink`]: one call per
//! chunk, on the thread that called [`run`](crate::StreamTransformer::run),
//! carrying `(processed, total)` byte counts. The sink's return value
//! doubles as a cancellation signal: returning [`Control::Abort`] stops
//! the run before the next read.
//!
//! A zero-length source never invokes the sink: the pump loop exits on
//! the first zero-byte read, before any chunk exists to report.
//!
//! # Example
//!
//! ```
//! use maskrs::{percent, Control};
//!
//! let sink = |processed: u64, total: u64| {
//!     println!("{}%", percent(processed, total));
//!     Control::Continue
//! };
//! # let _ = sink;
//! ```

/// Whether the engine should keep pumping after a progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep processing.
    Continue,
    /// Stop before the next read; the run fails with
    /// [`MaskError::Aborted`](crate::MaskError::Aborted).
    Abort,
}

/// Receives one progress report per transformed chunk.
///
/// Implemented for any `FnMut(u64, u64) -> Control` closure, so most
/// callers never name the trait:
///
/// ```
/// use std::io::Cursor;
/// use maskrs::{Control, Key, MaskConfig, StreamTransformer};
///
/// let transformer = StreamTransformer::new(
///     Key::from_passphrase("pw")?,
///     MaskConfig::default(),
/// );
///
/// let mut out = Vec::new();
/// transformer.run(Cursor::new(b"data".to_vec()), &mut out, 4, |done: u64, total: u64| {
///     assert!(done <= total);
///     Control::Continue
/// })?;
/// # Ok::<(), maskrs::MaskError>(())
/// ```
pub trait ProgressSink {
    /// Called after each chunk with the bytes processed so far and the
    /// caller-supplied total.
    ///
    /// `processed` is monotonically non-decreasing within one run and
    /// equals `total` on the final call when `total` matches the actual
    /// source size. The total is used only for ratio display; it is not
    /// validated against the stream.
    fn on_progress(&mut self, processed: u64, total: u64) -> Control;
}

impl<F> ProgressSink for F
where
    F: FnMut(u64, u64) -> Control,
{
    fn on_progress(&mut self, processed: u64, total: u64) -> Control {
        self(processed, total)
    }
}

/// A sink that discards all reports and never aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _processed: u64, _total: u64) -> Control {
        Control::Continue
    }
}

/// Converts a `(processed, total)` pair to a whole percentage.
///
/// Returns 0 when `total` is zero. Values are clamped to 100, so a
/// stale `total` (source grew mid-run) cannot yield an over-full
/// percentage.
///
/// # Example
///
/// ```
/// use maskrs::percent;
///
/// assert_eq!(percent(0, 0), 0);
/// assert_eq!(percent(50, 200), 25);
/// assert_eq!(percent(200, 200), 100);
/// ```
pub fn percent(processed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((processed as u128 * 100 / total as u128).min(100)) as u8
}
