//! Boundable, zero-copy byte windows.

use core::ops::Range;

/// A sub-range of some byte buffer, expressed as offset + length.
///
/// A `Window` never borrows the buffer it describes, so the buffer's owner
/// can hold a window alongside it without a self-referential borrow, and
/// a window only ever narrows. Every out-of-range request fails closed
/// with `None` instead of reaching past the end.
///
/// # Examples
///
/// ```
/// use byte_window::Window;
///
/// let w = Window::full(4);
/// assert_eq!(w.tail(1).unwrap().len(), 3);
/// assert_eq!(w.sub(1, 2).unwrap().range(), 1..3);
/// assert!(w.tail(5).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    offset: usize,
    len: usize,
}

impl Window {
    /// Window covering `0..len` of a buffer.
    pub fn full(len: usize) -> Self {
        Window { offset: 0, len }
    }

    /// Zero-length window at offset 0.
    pub fn empty() -> Self {
        Window { offset: 0, len: 0 }
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start position within the buffer this window was derived from.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Index range into the buffer this window was derived from.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Everything past the first `offset` bytes.
    ///
    /// `None` if `offset` exceeds the window's length; `tail(len)` is the
    /// empty window at the far end.
    pub fn tail(self, offset: usize) -> Option<Window> {
        if offset > self.len {
            return None;
        }
        Some(Window {
            offset: self.offset + offset,
            len: self.len - offset,
        })
    }

    /// `count` bytes starting `offset` bytes in.
    ///
    /// `None` whenever `offset + count` reaches past the end of this
    /// window. `sub(0, 0)` succeeds on any window, including an empty one.
    pub fn sub(self, offset: usize, count: usize) -> Option<Window> {
        if offset.checked_add(count)? > self.len {
            return None;
        }
        Some(Window {
            offset: self.offset + offset,
            len: count,
        })
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::empty()
    }
}
