//! Owned byte buffer and the whole-buffer I/O boundary.

use bytemuck::Pod;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::{fs, path::Path};

#[cfg(feature = "std")]
use crate::ByteBufError;

/// An owned buffer of raw bytes that grows only at the back.
///
/// The bulk-load constructors replace the contents wholesale; there is no
/// partially-loaded state. [`from_pod_slice`] is the one place a typed
/// value's in-memory representation is reinterpreted as bytes, and it uses
/// the host byte order as-is.
///
/// # Examples
///
/// ```
/// use byte_window::ByteBuf;
///
/// let mut buf = ByteBuf::new();
/// buf.push(0xAB);
/// buf.extend_from_slice(&[0x01, 0x02]);
/// assert_eq!(buf.as_slice(), &[0xAB, 0x01, 0x02]);
/// assert_eq!(buf.last(), Some(0x02));
/// ```
///
/// [`from_pod_slice`]: ByteBuf::from_pod_slice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteBuf {
    bytes: Vec<u8>,
}

impl ByteBuf {
    pub fn new() -> Self {
        ByteBuf { bytes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ByteBuf {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of an already-assembled byte vector.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        ByteBuf { bytes }
    }

    /// Copies the raw bytes of a caller-owned typed sequence into a fresh
    /// buffer, in the element type's native (host-order) representation.
    ///
    /// ```
    /// use byte_window::ByteBuf;
    ///
    /// let buf = ByteBuf::from_pod_slice(&[1u8, 2, 3]);
    /// assert_eq!(buf.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn from_pod_slice<T: Pod>(values: &[T]) -> Self {
        ByteBuf {
            bytes: bytemuck::cast_slice(values).to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// The last byte, if any.
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Removes and returns the last byte. Callers use this to reclaim a
    /// partially filled tail byte before re-emitting it merged with new
    /// payload.
    pub fn pop(&mut self) -> Option<u8> {
        self.bytes.pop()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Reads the entire contents of a regular file into a fresh buffer.
    ///
    /// Fails with [`ByteBufError::NotRegularFile`] when `path` names a
    /// directory or other non-regular file, and with
    /// [`ByteBufError::Read`] on any I/O failure. Interrupted reads are
    /// surfaced, never retried.
    #[cfg(feature = "std")]
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ByteBufError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|source| ByteBufError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if !meta.is_file() {
            return Err(ByteBufError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }
        let bytes = fs::read(path).map_err(|source| ByteBufError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ByteBuf { bytes })
    }

    /// Writes the full buffer verbatim to `path`, creating the file or
    /// truncating an existing one.
    #[cfg(feature = "std")]
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ByteBufError> {
        let path = path.as_ref();
        fs::write(path, &self.bytes).map_err(|source| ByteBufError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
