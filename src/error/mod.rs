//! Error types for maskrs.

use std::fmt;

/// Errors that can occur while constructing or running a transform.
#[derive(Debug)]
pub enum MaskError {
    /// The key contained no bytes.
    ///
    /// An empty key would make every keystream index undefined, so it
    /// is rejected at construction, before any I/O happens.
    EmptyKey,

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// An I/O error occurred while reading from the source.
    Read(std::io::Error),

    /// An I/O error occurred while writing to the destination.
    Write(std::io::Error),

    /// The destination accepted fewer bytes than were offered.
    ///
    /// The engine issues a single write call per chunk and does not
    /// retry the remainder; a short write aborts the run and leaves the
    /// destination truncated.
    ShortWrite {
        /// Bytes the destination actually accepted.
        written: usize,
        /// Bytes that were offered in the write call.
        requested: usize,
    },

    /// The progress sink requested an abort.
    Aborted {
        /// Bytes fully processed (read, transformed, and written)
        /// before the abort took effect.
        processed: u64,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::EmptyKey => write!(f, "key must contain at least one byte"),
            MaskError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            MaskError::Read(e) => write!(f, "read error: {}", e),
            MaskError::Write(e) => write!(f, "write error: {}", e),
            MaskError::ShortWrite { written, requested } => {
                write!(
                    f,
                    "short write: destination accepted {} of {} bytes",
                    written, requested
                )
            }
            MaskError::Aborted { processed } => {
                write!(f, "aborted by progress sink after {} bytes", processed)
            }
        }
    }
}

impl std::error::Error for MaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaskError::Read(e) | MaskError::Write(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MaskError::ShortWrite {
            written: 10,
            requested: 64,
        };
        assert!(err.to_string().contains("short write"));
        assert!(err.to_string().contains("10 of 64"));
    }

    #[test]
    fn test_source_chains_io_error() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = MaskError::Read(io_err);
        assert!(err.source().is_some());

        let err = MaskError::EmptyKey;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_aborted_display() {
        let err = MaskError::Aborted { processed: 4096 };
        assert!(err.to_string().contains("4096"));
    }
}
