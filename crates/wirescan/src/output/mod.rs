//! Write-oriented output buffer with geometric growth up to a hard cap.
//!
//! [`GrowBuf`] is not a window buffer: it accumulates outgoing bytes and is
//! drained through a borrowed view. The logical capacity is tracked
//! separately from the `Vec`'s own allocation so growth stays at exactly 2×
//! per step and never exceeds the configured maximum — `Vec::push`'s
//! amortized doubling would silently sail past the cap.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::error::{Error, Result};

/// A growable output accumulator bounded by `max_size`.
pub struct GrowBuf {
    data: Vec<u8>,
    cap: usize,
    max_size: usize,
}

impl GrowBuf {
    /// Creates a buffer with the given initial capacity, clamped to
    /// `max_size`.
    #[must_use]
    pub fn with_capacity(initial: usize, max_size: usize) -> Self {
        let cap = initial.min(max_size);
        Self {
            data: Vec::with_capacity(cap),
            cap,
            max_size,
        }
    }

    /// Appends one byte.
    ///
    /// When the logical capacity is full and still below `max_size`, the
    /// capacity doubles (clamped to `max_size`) before the byte is
    /// written. Once the buffer is full at `max_size`, the write is
    /// rejected and nothing is stored.
    pub fn write(&mut self, byte: u8) -> Result<()> {
        if self.data.len() == self.cap {
            if self.cap >= self.max_size {
                return Err(Error::WriteBeyondMax {
                    max_size: self.max_size,
                });
            }
            self.cap = self.cap.saturating_mul(2).max(1).min(self.max_size);
            self.data.reserve_exact(self.cap - self.data.len());
        }
        self.data.push(byte);
        Ok(())
    }

    /// Appends a run of bytes, stopping at the first one that does not
    /// fit. Bytes before the failing one remain written.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        for &b in bytes {
            self.write(b)?;
        }
        Ok(())
    }

    /// The bytes written so far.
    ///
    /// The view is a borrow: it must be dropped before the next `write`,
    /// so a growth-triggering write can never invalidate it.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current logical capacity (grows geometrically, never past
    /// `max_size`).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Discards written bytes; capacity already grown is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl fmt::Debug for GrowBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowBuf")
            .field("cap", &self.cap)
            .field("max_size", &self.max_size)
            .field("bytes", &BStr::new(&self.data))
            .finish()
    }
}
