//! The bit-granular stream core.

use bytemuck::Pod;
use core::mem::size_of;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::path::Path;

pub use byte_window::{ByteBuf, Window};

use crate::BitStreamError;
use crate::bit_ops;

/// An append-only / consume-only byte buffer with bit-granular write and
/// read cursors.
///
/// Writing appends the low `n_bits` of a value's native byte
/// representation, splicing across byte boundaries so no interior byte is
/// ever left partially filled. Reading replays the same widths, in the
/// same order, against the unread window of the buffer and zero-extends
/// each result into the requested storage type.
///
/// ```
/// use bit_stream::BitStream;
///
/// let mut stream = BitStream::new();
/// stream.write_bits(&0x3u8, 2);
/// stream.write_bits(&0x7FFu16, 11);
/// stream.rewind();
///
/// assert_eq!(stream.read_bits_as::<u8>(2).unwrap(), 0x3);
/// assert_eq!(stream.read_bits_as::<u16>(11).unwrap(), 0x7FF);
/// ```
///
/// A stream populated by a single write call is readable immediately, and
/// streams loaded from a file or slice start byte-aligned and ready to
/// read. A stream assembled from several writes must be
/// [`rewind`](BitStream::rewind)-ed before reading; interleaving writes
/// with reads is not supported.
#[derive(Debug, Default)]
pub struct BitStream {
    buf: ByteBuf,
    /// Unread suffix of `buf`, held as indices — never a copy.
    window: Window,
    /// Low bits of the last byte that are meaningful payload, `0..=8`.
    /// 8 both after a load and after a write that fills its tail byte.
    tail_used_bits: usize,
    /// Unconsumed low bits of the window's first byte, `0..=8`. Stays
    /// above 0 while unread bytes remain; 0 only before reading is
    /// established.
    head_unread_bits: usize,
}

impl BitStream {
    /// An empty stream; both cursors unestablished.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-loads the raw bytes of a caller-owned typed sequence (host
    /// byte order), ready to read from the first bit.
    ///
    /// ```
    /// use bit_stream::BitStream;
    ///
    /// let mut stream = BitStream::from_slice(&[64u8, 1]);
    /// assert_eq!(stream.read_bits_as::<u8>(8).unwrap(), 64);
    /// ```
    pub fn from_slice<T: Pod>(values: &[T]) -> Self {
        Self::from_buf(ByteBuf::from_pod_slice(values))
    }

    /// Bulk-loads an already-assembled byte buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_buf(ByteBuf::from_bytes(bytes))
    }

    /// Bulk-loads the entire contents of a regular file.
    ///
    /// # Errors
    ///
    /// Fails when the path does not name a readable regular file; the
    /// error carries the path. Interrupted reads surface as failures,
    /// never as a partially filled stream.
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BitStreamError> {
        Ok(Self::from_buf(ByteBuf::read_from_file(path)?))
    }

    fn from_buf(buf: ByteBuf) -> Self {
        let aligned = if buf.is_empty() { 0 } else { 8 };
        BitStream {
            window: Window::full(buf.len()),
            buf,
            tail_used_bits: aligned,
            head_unread_bits: aligned,
        }
    }

    /// Appends the low `n_bits` bits of `item`'s native byte
    /// representation.
    ///
    /// New bits land directly above any partially filled tail byte, so
    /// the buffer never contains an interior partial byte. Writing 0 bits
    /// changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `n_bits` exceeds the bit width of `T`.
    pub fn write_bits<T: Pod>(&mut self, item: &T, n_bits: usize) {
        let item_bits = size_of::<T>() * 8;
        assert!(
            n_bits <= item_bits,
            "cannot take {n_bits} bits from a {item_bits}-bit value"
        );
        if n_bits == 0 {
            return;
        }

        let was_empty = self.buf.is_empty();

        let mut out: Vec<u8>;
        let out_bits;
        if self.tail_used_bits > 0 && self.tail_used_bits < 8 {
            // Reclaim the partial tail byte and splice the new bits in
            // above its payload.
            let tail = self
                .buf
                .pop()
                .expect("partial tail byte recorded for an empty buffer");
            out = bit_ops::shl_seed(bytemuck::bytes_of(item), self.tail_used_bits, tail);
            out_bits = self.tail_used_bits + n_bits;
        } else {
            out = bytemuck::bytes_of(item).to_vec();
            out_bits = n_bits;
        }

        // Stale high bits of the storage type must not reach the buffer.
        bit_ops::mask_above(&mut out, out_bits);
        self.buf
            .extend_from_slice(&out[..bit_ops::bytes_for_bits(out_bits)]);

        self.tail_used_bits = match out_bits % 8 {
            0 => 8,
            rem => rem,
        };

        if was_empty {
            // First bits of the stream: establish the read cursor so a
            // single-shot writer can read straight back.
            self.window = Window::full(self.buf.len());
            self.head_unread_bits = out_bits.min(8);
        }
    }

    /// Appends every bit of `item` ([`write_bits`](BitStream::write_bits)
    /// at the full storage width).
    pub fn write<T: Pod>(&mut self, item: &T) {
        self.write_bits(item, size_of::<T>() * 8);
    }

    /// Consumes `n_bits` bits from the front of the unread window and
    /// returns them zero-extended into `T`. A subsequent call continues
    /// exactly where this one stopped.
    ///
    /// Reading 0 bits yields `T::zeroed()` and consumes nothing.
    ///
    /// # Errors
    ///
    /// [`BitStreamError::ReadPastEnd`] when fewer unread bytes remain
    /// than the request touches; no state changes in that case.
    ///
    /// # Panics
    ///
    /// Panics if `n_bits` exceeds the bit width of `T`, or if the stream
    /// was never made readable (no load, no write, no
    /// [`rewind`](BitStream::rewind)).
    pub fn read_bits_as<T: Pod>(&mut self, n_bits: usize) -> Result<T, BitStreamError> {
        let item_bits = size_of::<T>() * 8;
        assert!(
            n_bits <= item_bits,
            "cannot read {n_bits} bits into a {item_bits}-bit value"
        );
        if n_bits == 0 {
            return Ok(T::zeroed());
        }
        assert!(
            self.head_unread_bits > 0,
            "read cursor not established; load data or rewind the stream first"
        );

        let head_read_bits = 8 - self.head_unread_bits;
        let n_bytes = bit_ops::bytes_for_bits(n_bits + head_read_bits);
        let taken = self
            .window
            .sub(0, n_bytes)
            .ok_or(BitStreamError::ReadPastEnd {
                requested: n_bytes,
                available: self.window.len(),
            })?;

        let mut scratch = self.buf.as_slice()[taken.range()].to_vec();
        bit_ops::shr_in_place(&mut scratch, head_read_bits);
        bit_ops::mask_above(&mut scratch, n_bits);
        // Everything above `n_bits` is now zero, so resizing to the
        // storage width drops only zero bytes or appends zero bytes.
        scratch.resize(size_of::<T>(), 0);
        let value: T = bytemuck::pod_read_unaligned(&scratch);

        let consumed_bits = head_read_bits + n_bits;
        if consumed_bits % 8 == 0 {
            self.window = self
                .window
                .tail(n_bytes)
                .expect("window shorter than the bytes just taken");
            self.head_unread_bits = 8;
        } else {
            // The last byte touched is only partially consumed and stays
            // at the front of the window.
            self.window = self
                .window
                .tail(n_bytes - 1)
                .expect("window shorter than the bytes just taken");
            self.head_unread_bits = 8 - consumed_bits % 8;
        }

        Ok(value)
    }

    /// [`read_bits_as`](BitStream::read_bits_as) at the full storage
    /// width of `T`.
    pub fn read_as<T: Pod>(&mut self) -> Result<T, BitStreamError> {
        self.read_bits_as(size_of::<T>() * 8)
    }

    /// Seeks the read cursor back to the first bit of the buffer.
    ///
    /// Required before reading back a stream that was assembled from more
    /// than one write call.
    pub fn rewind(&mut self) {
        self.window = Window::full(self.buf.len());
        self.head_unread_bits = if self.buf.is_empty() { 0 } else { 8 };
    }

    /// Writes the whole buffer verbatim to `path`, truncating any
    /// existing file. A trailing partial byte is flushed as-is; its
    /// unfilled high bits are zero.
    #[cfg(feature = "std")]
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BitStreamError> {
        self.buf.write_to_file(path)?;
        Ok(())
    }

    /// The full byte buffer, consumed bytes included.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// The last byte of the buffer, if any.
    pub fn tail_byte(&self) -> Option<u8> {
        self.buf.last()
    }

    /// Buffer length in whole bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Total meaningful bits in the buffer.
    pub fn bit_len(&self) -> usize {
        match self.buf.len() {
            0 => 0,
            n => (n - 1) * 8 + self.tail_used_bits,
        }
    }

    /// Unread bytes remaining in the read window.
    pub fn remaining_bytes(&self) -> usize {
        self.window.len()
    }

    /// Meaningful low bits of the tail byte; 8 when the buffer is
    /// byte-aligned, 0 only for an empty stream.
    pub fn tail_used_bits(&self) -> usize {
        self.tail_used_bits
    }

    /// Unconsumed low bits of the current head byte; 0 until reading is
    /// established.
    pub fn head_unread_bits(&self) -> usize {
        self.head_unread_bits
    }
}
