//! The Key type - a non-empty keystream source.
//!
//! A [`Key`] is an ordered, non-empty byte sequence. The keystream byte
//! for absolute stream position `i` is `key[i mod key_len]`; the key is
//! cycled for as long as the stream runs.

use std::fmt;

use crate::error::MaskError;

/// A non-empty sequence of key bytes.
///
/// Keys are immutable once constructed. Emptiness is rejected at
/// construction so the transform never has to handle a zero-length
/// keystream mid-run.
///
/// `Debug` deliberately omits the key material: keys are usually
/// derived from passphrases and must not leak into logs or panics.
///
/// # Example
///
/// ```
/// use maskrs::Key;
///
/// let key = Key::from_passphrase("hunter2")?;
/// assert_eq!(key.len(), 7);
/// assert_eq!(key.byte_at(0), b'h');
/// assert_eq!(key.byte_at(7), b'h'); // cycled
/// # Ok::<(), maskrs::MaskError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    bytes: Vec<u8>,
}

impl Key {
    /// Creates a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::EmptyKey`] if `bytes` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use maskrs::Key;
    ///
    /// let key = Key::new(vec![0x41, 0x42])?;
    /// assert_eq!(key.len(), 2);
    /// # Ok::<(), maskrs::MaskError>(())
    /// ```
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, MaskError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(MaskError::EmptyKey);
        }
        Ok(Self { bytes })
    }

    /// Creates a key from the UTF-8 bytes of a passphrase.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::EmptyKey`] if the passphrase is empty.
    pub fn from_passphrase(passphrase: &str) -> Result<Self, MaskError> {
        Self::new(passphrase.as_bytes().to_vec())
    }

    /// Returns the number of key bytes. Always at least 1.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the keystream byte for an absolute stream position.
    ///
    /// The key cycles: position `i` maps to `key[i mod key_len]`.
    pub fn byte_at(&self, position: u64) -> u8 {
        self.bytes[(position % self.bytes.len() as u64) as usize]
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({} bytes)", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(Key::new(Vec::new()), Err(MaskError::EmptyKey)));
        assert!(matches!(
            Key::from_passphrase(""),
            Err(MaskError::EmptyKey)
        ));
    }

    #[test]
    fn test_passphrase_bytes() {
        let key = Key::from_passphrase("AB").unwrap();
        assert_eq!(key.as_bytes(), &[0x41, 0x42]);
    }

    #[test]
    fn test_byte_at_cycles() {
        let key = Key::new(vec![1, 2, 3]).unwrap();
        assert_eq!(key.byte_at(0), 1);
        assert_eq!(key.byte_at(2), 3);
        assert_eq!(key.byte_at(3), 1);
        assert_eq!(key.byte_at(7), 2);
    }

    #[test]
    fn test_debug_redacts_material() {
        let key = Key::from_passphrase("secret").unwrap();
        let dbg = format!("{:?}", key);
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("6 bytes"));
    }
}
