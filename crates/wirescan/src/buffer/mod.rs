//! Window buffers: bounded readable regions walked by a cursor.
//!
//! A window is the readable sub-range `[start, end)` of a backing byte
//! slice, with `current` marking the read position. Windows are plain
//! offsets, never pointers: every access is validated against the backing
//! slice, so replacing or re-feeding a buffer can never leave a dangling
//! view — at worst a stale reader observes an empty span.
//!
//! Two implementations are provided: [`SliceBuf`] views bytes owned by the
//! caller, and [`ArrayBuf`] owns a fixed-size array that can be fed
//! incrementally from a streaming source.

use core::fmt;

use bstr::BStr;

use crate::error::{Error, Result};

/// Offsets into a buffer's backing storage: `start <= current <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub start: usize,
    pub current: usize,
    pub end: usize,
}

impl Window {
    /// The cleared state: all offsets zero, nothing readable.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start: 0,
            current: 0,
            end: 0,
        }
    }

    pub(crate) fn debug_check(self, len: usize) {
        debug_assert!(
            self.start <= self.current && self.current <= self.end && self.end <= len,
            "window {self:?} out of order or past backing length {len}"
        );
    }
}

/// A readable byte region with explicit window semantics.
///
/// `set_window` is the only mutation primitive besides `reset`; it replaces
/// the window atomically and is used by revert guards and feed operations,
/// never partially. All provided methods are bounds-checked against the
/// current window — no operation reads past `end`.
pub trait WindowBuf {
    /// The backing bytes the window offsets index into.
    fn data(&self) -> &[u8];

    fn window(&self) -> Window;

    /// Atomically replaces the window.
    fn set_window(&mut self, window: Window);

    /// Clears the window to empty, discarding any buffered content.
    fn reset(&mut self);

    /// Read position as an offset from the window start.
    fn position(&self) -> usize {
        let w = self.window();
        w.current - w.start
    }

    /// Bytes between the read position and the window end.
    fn remaining(&self) -> usize {
        let w = self.window();
        w.end - w.current
    }

    /// Byte at the read position, or `None` at end of data.
    fn peek(&self) -> Option<u8> {
        let w = self.window();
        if w.current >= w.end {
            return None;
        }
        self.data().get(w.current).copied()
    }

    /// Byte immediately after the read position, without advancing.
    ///
    /// `None` when fewer than two readable bytes remain.
    fn peek_next(&self) -> Option<u8> {
        let w = self.window();
        if w.current + 1 >= w.end {
            return None;
        }
        self.data().get(w.current + 1).copied()
    }

    /// The unread span `[current, end)`.
    fn rest(&self) -> &[u8] {
        let w = self.window();
        &self.data()[w.current..w.end]
    }

    /// The span from `start + n` to the window end.
    ///
    /// # Panics
    ///
    /// Panics if `start + n` lies past the window end.
    fn rest_from(&self, n: usize) -> &[u8] {
        let w = self.window();
        &self.data()[w.start + n..w.end]
    }
}

/// A read-only window over bytes owned elsewhere.
///
/// The borrow keeps the bytes alive for the buffer's whole lifetime; there
/// is no append, and `reset` merely empties the window.
#[derive(Clone)]
pub struct SliceBuf<'a> {
    data: &'a [u8],
    window: Window,
}

impl<'a> SliceBuf<'a> {
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            window: Window {
                start: 0,
                current: 0,
                end: data.len(),
            },
        }
    }
}

impl WindowBuf for SliceBuf<'_> {
    fn data(&self) -> &[u8] {
        self.data
    }

    fn window(&self) -> Window {
        self.window
    }

    fn set_window(&mut self, window: Window) {
        window.debug_check(self.data.len());
        self.window = window;
    }

    fn reset(&mut self) {
        self.window = Window::empty();
    }
}

impl fmt::Debug for SliceBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceBuf")
            .field("window", &self.window)
            .field("rest", &BStr::new(self.rest()))
            .finish()
    }
}

/// A fixed-capacity buffer that owns its storage and supports incremental
/// append for streaming partial reads.
///
/// `feed` keeps one byte of headroom: a feed that would make `size` reach
/// `N` is rejected without mutating state.
pub struct ArrayBuf<const N: usize> {
    bytes: [u8; N],
    size: usize,
    window: Window,
}

impl<const N: usize> ArrayBuf<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            size: 0,
            window: Window::empty(),
        }
    }

    /// Seeds a buffer from an existing byte run of length at most `N`.
    ///
    /// The window covers the whole run with the read position at its
    /// start. Note that a buffer seeded to exactly `N` has no headroom
    /// left, so every subsequent `feed` fails.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if data.len() > N {
            return Err(Error::Overflow {
                len: data.len(),
                size: 0,
                capacity: N,
            });
        }
        let mut bytes = [0; N];
        bytes[..data.len()].copy_from_slice(data);
        Ok(Self {
            bytes,
            size: data.len(),
            window: Window {
                start: 0,
                current: 0,
                end: data.len(),
            },
        })
    }

    /// Appends `data` at the current write offset.
    ///
    /// Fails without mutating state when `size + len` would reach the
    /// capacity `N` (the bound is strict — one byte of headroom is
    /// reserved). On success the window end extends to the new total and
    /// the read position is set to the *previous* size: new data becomes
    /// readable from where the prior feed ended, and already-consumed
    /// bytes are not rewound.
    pub fn feed(&mut self, data: &[u8]) -> Result<()> {
        if data.len() >= N - self.size {
            return Err(Error::Overflow {
                len: data.len(),
                size: self.size,
                capacity: N,
            });
        }
        self.bytes[self.size..self.size + data.len()].copy_from_slice(data);
        self.window = Window {
            start: 0,
            current: self.size,
            end: self.size + data.len(),
        };
        self.size += data.len();
        Ok(())
    }

    /// Bytes written so far.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<const N: usize> Default for ArrayBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> WindowBuf for ArrayBuf<N> {
    fn data(&self) -> &[u8] {
        &self.bytes
    }

    fn window(&self) -> Window {
        self.window
    }

    fn set_window(&mut self, window: Window) {
        window.debug_check(N);
        self.window = window;
    }

    fn reset(&mut self) {
        self.bytes = [0; N];
        self.size = 0;
        self.window = Window::empty();
    }
}

impl<const N: usize> fmt::Debug for ArrayBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuf")
            .field("capacity", &N)
            .field("size", &self.size)
            .field("window", &self.window)
            .field("rest", &BStr::new(self.rest()))
            .finish()
    }
}

#[cfg(test)]
mod tests;
