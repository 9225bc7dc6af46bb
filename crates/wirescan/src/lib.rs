//! Zero-copy, backtrackable scanning primitives over in-memory byte buffers.
//!
//! This crate is the foundation layer for incremental wire-protocol parsers
//! (HTTP-style text/binary hybrids and similar): a [`WindowBuf`] family of
//! bounded readable regions, a [`Cursor`] that walks a window with
//! peek/advance operations, [`Token`] capture for extracting matched spans
//! without copying until necessary, and a small library of matching
//! primitives built purely on the cursor's public contract.
//!
//! A caller owns one buffer ([`SliceBuf`] over borrowed bytes, [`ArrayBuf`]
//! for incremental feeding, or [`GrowBuf`] for output) and constructs a
//! cursor over it. Matchers consume the cursor, advancing on success and
//! leaving it untouched on failure; [`Revert`] guards let a grammar compose
//! matchers speculatively and roll back atomically.
//!
//! Everything here is single-threaded and synchronous: no operation
//! suspends or performs I/O. Independent buffers may be used from separate
//! threads with no shared state.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod cursor;
mod error;
mod matchers;
mod output;


pub use buffer::{ArrayBuf, SliceBuf, Window, WindowBuf};
pub use cursor::{CR, Cursor, LF, Revert, Token};
pub use error::{Error, Result};
pub use matchers::{CaseSensitivity, match_double, match_literal, match_raw, match_until};
pub use output::GrowBuf;
