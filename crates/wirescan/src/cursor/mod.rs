//! Cursor: a stateful walker over a window buffer.
//!
//! Why this exists
//! - Matchers and grammar code need peek/advance/backtrack over a window
//!   without caring which buffer implementation backs it. The cursor holds
//!   an exclusive borrow of one [`WindowBuf`]; all position state lives in
//!   the buffer itself, so the cursor is cheap to create and discard per
//!   parse attempt.
//! - [`Token`] captures a start offset so a grammar can extract the exact
//!   bytes consumed since capture, copying only on demand.
//! - [`Revert`] is the transaction primitive: it snapshots the window at
//!   construction and restores it on drop unless committed, so a compound
//!   match that fails halfway undoes all partial advances by simply going
//!   out of scope.
//!
//! Invariants
//! - Tokens are offsets, never addresses: a token retained across a
//!   `feed`/`reset` of its buffer yields a clamped (at worst empty) span
//!   rather than a dangling read.
//! - Nested revert guards borrow each other exclusively, so they can only
//!   be released in reverse construction order — the stack discipline the
//!   rollback semantics require is a compile-time fact.

use core::fmt;
use core::ops::{Deref, DerefMut};

use bstr::{BStr, BString};

use crate::buffer::{Window, WindowBuf};

/// Carriage return, the first byte of a CRLF line ending.
pub const CR: u8 = 0x0D;
/// Line feed, the second byte of a CRLF line ending.
pub const LF: u8 = 0x0A;

/// A walker over a [`WindowBuf`]'s window.
///
/// Multiple cursors over one buffer are possible only sequentially — the
/// exclusive borrow rules out concurrent mutation by construction.
pub struct Cursor<'b, B: WindowBuf + ?Sized> {
    buf: &'b mut B,
}

impl<'b, B: WindowBuf + ?Sized> Cursor<'b, B> {
    pub fn new(buf: &'b mut B) -> Self {
        Self { buf }
    }

    /// A cursor pre-advanced to `pos`, saturating at the window end.
    pub fn at(buf: &'b mut B, pos: usize) -> Self {
        let mut cursor = Self::new(buf);
        let step = pos.min(cursor.remaining());
        let _ = cursor.advance(step);
        cursor
    }

    /// Consumes `count` bytes.
    ///
    /// All-or-nothing: returns `false` without moving when `count`
    /// exceeds [`remaining`](Self::remaining).
    pub fn advance(&mut self, count: usize) -> bool {
        let mut w = self.buf.window();
        if count > w.end - w.current {
            return false;
        }
        w.current += count;
        self.buf.set_window(w);
        true
    }

    /// Byte at the current position, or `None` at end of data.
    #[must_use]
    pub fn current(&self) -> Option<u8> {
        self.buf.peek()
    }

    /// Byte one past the current position, without advancing.
    #[must_use]
    pub fn next(&self) -> Option<u8> {
        self.buf.peek_next()
    }

    #[must_use]
    pub fn eof(&self) -> bool {
        self.remaining() == 0
    }

    /// Strict CRLF test: the current byte is CR *and* the following byte
    /// is LF. A bare LF is not a line ending.
    #[must_use]
    pub fn eol(&self) -> bool {
        self.current() == Some(CR) && self.next() == Some(LF)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.buf.position()
    }

    /// The unread span `[current, end)`, for matchers that compare a run
    /// of bytes directly.
    #[must_use]
    pub fn rest(&self) -> &[u8] {
        self.buf.rest()
    }

    /// The span from window-start + `n` to the window end.
    ///
    /// # Panics
    ///
    /// Panics if `n` lies past the window end.
    #[must_use]
    pub fn rest_from(&self, n: usize) -> &[u8] {
        self.buf.rest_from(n)
    }

    /// Bytes consumed between position `from` and the current position.
    ///
    /// Clamps to the empty span when `from` is at or past the current
    /// position (a stale token after a buffer mutation lands here).
    #[must_use]
    pub fn span(&self, from: usize) -> &[u8] {
        let w = self.buf.window();
        let lo = w.start.saturating_add(from).min(w.current);
        &self.buf.data()[lo..w.current]
    }

    /// Bytes consumed since the earlier position `earlier`.
    #[must_use]
    pub fn diff(&self, earlier: usize) -> usize {
        self.position().saturating_sub(earlier)
    }

    /// Bytes between this cursor's position and a later cursor's.
    #[must_use]
    pub fn diff_to<B2: WindowBuf + ?Sized>(&self, later: &Cursor<'_, B2>) -> usize {
        later.position().saturating_sub(self.position())
    }

    /// Captures the current position for later span extraction.
    #[must_use]
    pub fn token(&self) -> Token {
        Token {
            start: self.position(),
        }
    }

    /// Clears the underlying buffer window entirely. Used when discarding
    /// a fully-consumed message.
    pub fn reset(&mut self) {
        self.buf.reset();
    }
}

impl<B: WindowBuf + ?Sized> fmt::Debug for Cursor<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position())
            .field("rest", &BStr::new(self.rest()))
            .finish()
    }
}

/// An immutable snapshot of a start position.
///
/// `end`/`size`/`text` are computed lazily against the cursor's *live*
/// position at call time, so the same token describes a growing span as
/// the cursor advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    start: usize,
}

impl Token {
    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    /// The cursor's current position.
    #[must_use]
    pub fn end<B: WindowBuf + ?Sized>(self, cursor: &Cursor<'_, B>) -> usize {
        cursor.position()
    }

    /// Length of the span consumed since capture.
    #[must_use]
    pub fn size<B: WindowBuf + ?Sized>(self, cursor: &Cursor<'_, B>) -> usize {
        cursor.position().saturating_sub(self.start)
    }

    /// Materializes a copy of exactly the captured span.
    #[must_use]
    pub fn text<B: WindowBuf + ?Sized>(self, cursor: &Cursor<'_, B>) -> BString {
        BString::from(cursor.span(self.start))
    }

    /// The captured span without copying, valid while the buffer is
    /// unmodified.
    #[must_use]
    pub fn raw_text<'a, B: WindowBuf + ?Sized>(self, cursor: &'a Cursor<'_, B>) -> &'a [u8] {
        cursor.span(self.start)
    }
}

/// RAII transaction over a cursor's window.
///
/// Construct before attempting a compound match; on any failure path just
/// let the guard drop — the snapshot is restored and all partial advances
/// are undone. On success call [`commit`](Self::commit) exactly once.
///
/// The guard derefs to the cursor, so matchers run through it unchanged:
///
/// ```
/// use wirescan::{CaseSensitivity, Cursor, Revert, SliceBuf, match_literal};
///
/// let mut buf = SliceBuf::new(b"GET /");
/// let mut cursor = Cursor::new(&mut buf);
/// {
///     let mut guard = Revert::new(&mut cursor);
///     if match_literal(b'G', &mut guard, CaseSensitivity::Sensitive)
///         && match_literal(b'E', &mut guard, CaseSensitivity::Sensitive)
///         && match_literal(b'T', &mut guard, CaseSensitivity::Sensitive)
///     {
///         guard.commit();
///     }
/// }
/// assert_eq!(cursor.position(), 3);
/// ```
pub struct Revert<'c, 'b, B: WindowBuf + ?Sized> {
    cursor: &'c mut Cursor<'b, B>,
    saved: Window,
    active: bool,
}

impl<'c, 'b, B: WindowBuf + ?Sized> Revert<'c, 'b, B> {
    pub fn new(cursor: &'c mut Cursor<'b, B>) -> Self {
        let saved = cursor.buf.window();
        Self {
            cursor,
            saved,
            active: true,
        }
    }

    /// Keeps the advances made since construction.
    pub fn commit(mut self) {
        self.active = false;
    }

    /// Restores the snapshot immediately instead of waiting for drop.
    pub fn rollback(mut self) {
        self.active = false;
        self.cursor.buf.set_window(self.saved);
    }
}

impl<B: WindowBuf + ?Sized> Drop for Revert<'_, '_, B> {
    fn drop(&mut self) {
        if self.active {
            self.cursor.buf.set_window(self.saved);
        }
    }
}

impl<'b, B: WindowBuf + ?Sized> Deref for Revert<'_, 'b, B> {
    type Target = Cursor<'b, B>;

    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl<B: WindowBuf + ?Sized> DerefMut for Revert<'_, '_, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}
