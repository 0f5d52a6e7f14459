//! maskrs
//!
//! Streaming keyed byte-mask transform for Rust.
//!
//! `maskrs` applies a repeating-key XOR mask to a byte stream, one
//! fixed-size chunk at a time, and reports progress after each chunk.
//! The transform is involutive: running the output through the same key
//! recovers the input exactly, so one operation serves as both "mask"
//! and "unmask". Because the keystream position is chained across chunk
//! boundaries, the output is identical for every chunk size.
//!
//! It is designed as a small, composable primitive for:
//!
//! - lightweight file obfuscation tools
//! - wire-format scrambling between cooperating peers
//! - test fixtures that need a cheap reversible transform
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT manage concurrency
//! - does NOT retry or roll back partial output
//! - is NOT a secure cipher — a repeating-key XOR mask offers no
//!   confidentiality against known-plaintext or frequency analysis
//!
//! It only does one thing: **Read bytes → XOR keystream → write bytes**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use maskrs::{Control, Key, MaskConfig, StreamTransformer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = File::open("data.bin")?;
//!     let total = source.metadata()?.len();
//!     let dest = File::create("data.bin.masked")?;
//!
//!     let transformer = StreamTransformer::new(
//!         Key::from_passphrase("hunter2")?,
//!         MaskConfig::default(),
//!     );
//!
//!     transformer.run(source, dest, total, |processed: u64, total: u64| {
//!         println!("{} / {} bytes", processed, total);
//!         Control::Continue
//!     })?;
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use maskrs::{mask_async, Key, MaskConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), maskrs::MaskError> {
//!     let key = Key::from_passphrase("hunter2")?;
//!     let mut stream = mask_async(reader, key, MaskConfig::default());
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("masked chunk {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod key;
mod mask;
mod progress;
mod transform;

mod buffer; // internal (thread-local reuse)

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_CHUNK_SIZE, MaskConfig};
pub use error::MaskError;
pub use key::Key;
pub use mask::Masker;
pub use progress::{Control, NoProgress, ProgressSink, percent};
pub use transform::{MaskIter, StreamTransformer};

#[cfg(feature = "async-io")]
pub use async_stream::{MaskStream, mask_async};
