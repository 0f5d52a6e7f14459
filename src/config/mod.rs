//! Configuration for the streaming transform.
//!
//! This module provides [`MaskConfig`], which controls how much of the
//! stream is held in memory at once. The chunk size bounds memory use;
//! it never affects the transformed output, because the keystream
//! offset is chained across chunk boundaries.
//!
//! # Example
//!
//! ```
//! use maskrs::MaskConfig;
//!
//! // Custom chunk size
//! let config = MaskConfig::new(8 * 1024)?;
//!
//! // Default (64 KiB)
//! let config = MaskConfig::default();
//! # Ok::<(), maskrs::MaskError>(())
//! ```

use crate::error::MaskError;

/// Default chunk size (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration for streaming transform behavior.
///
/// `MaskConfig` holds the chunk size used when pumping a stream: the
/// engine reads at most `chunk_size` bytes per iteration, transforms
/// them in place, and writes them out before reading more.
///
/// # Size Constraint
///
/// The chunk size must be non-zero. There is no upper bound; a larger
/// chunk trades memory for fewer read/write calls.
///
/// # Example
///
/// ```
/// use maskrs::MaskConfig;
///
/// // Use default configuration
/// let config = MaskConfig::default();
///
/// // Custom configuration
/// let config = MaskConfig::new(16 * 1024)?;
///
/// // Builder pattern
/// let config = MaskConfig::default().with_chunk_size(128 * 1024);
/// # Ok::<(), maskrs::MaskError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskConfig {
    /// Chunk size in bytes.
    chunk_size: usize,
}

impl MaskConfig {
    /// Creates a new configuration with the specified chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidConfig`] if `chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use maskrs::MaskConfig;
    ///
    /// let config = MaskConfig::new(4096)?;
    /// assert_eq!(config.chunk_size(), 4096);
    /// # Ok::<(), maskrs::MaskError>(())
    /// ```
    pub fn new(chunk_size: usize) -> Result<Self, MaskError> {
        if chunk_size == 0 {
            return Err(MaskError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`MaskConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use maskrs::MaskConfig;
    ///
    /// let config = MaskConfig::default().with_chunk_size(8192);
    /// assert_eq!(config.chunk_size(), 8192);
    /// ```
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use maskrs::MaskConfig;
    ///
    /// let config = MaskConfig::default().with_chunk_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MaskError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
