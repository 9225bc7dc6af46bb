//! Matching primitives built purely on the cursor's public contract.
//!
//! Every matcher either consumes exactly the matched bytes and reports
//! success, or consumes nothing and reports failure — with one deliberate
//! exception: [`match_until`] commits its progress even when the scan
//! exhausts the window, since a scanner that restarts from scratch on
//! every partial feed would rescan the same bytes forever. Callers that
//! need an atomic scan wrap the call in a [`Revert`](crate::Revert)
//! guard.
//!
//! None of these read past the cursor's remaining bytes.

use crate::buffer::WindowBuf;
use crate::cursor::Cursor;

/// ASCII case policy for literal and scan matchers.
///
/// The fold is locale-independent: only `A..=Z`/`a..=z` compare equal
/// across case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

fn byte_eq(a: u8, b: u8, cs: CaseSensitivity) -> bool {
    match cs {
        CaseSensitivity::Sensitive => a == b,
        CaseSensitivity::Insensitive => a.eq_ignore_ascii_case(&b),
    }
}

/// Matches an exact byte sequence at the current position.
///
/// All-or-nothing: a mismatch anywhere, or fewer than `bytes.len()`
/// remaining, consumes nothing. The comparison never prefix-commits.
pub fn match_raw<B: WindowBuf + ?Sized>(bytes: &[u8], cursor: &mut Cursor<'_, B>) -> bool {
    if cursor.remaining() < bytes.len() {
        return false;
    }
    if &cursor.rest()[..bytes.len()] == bytes {
        let advanced = cursor.advance(bytes.len());
        debug_assert!(advanced);
        return true;
    }
    false
}

/// Matches a single byte under the given case policy, advancing by one.
pub fn match_literal<B: WindowBuf + ?Sized>(
    byte: u8,
    cursor: &mut Cursor<'_, B>,
    cs: CaseSensitivity,
) -> bool {
    let Some(current) = cursor.current() else {
        return false;
    };
    if byte_eq(byte, current, cs) {
        let _ = cursor.advance(1);
        return true;
    }
    false
}

/// Scans forward until a byte equal (under the case policy) to any of
/// `targets` is found, leaving the cursor *at* that byte.
///
/// Progress-committing: on success and on exhaustion alike, every byte
/// scanned past stays consumed. An EOF-first scan returns `false` with
/// the cursor at the end of data — there is no rollback here.
pub fn match_until<B: WindowBuf + ?Sized>(
    targets: &[u8],
    cursor: &mut Cursor<'_, B>,
    cs: CaseSensitivity,
) -> bool {
    while let Some(current) = cursor.current() {
        if targets.iter().any(|&t| byte_eq(t, current, cs)) {
            return true;
        }
        let _ = cursor.advance(1);
    }
    false
}

/// Parses a floating-point literal textually at the current position.
///
/// Grammar: optional sign; digits with an optional fractional part, or a
/// fraction-only form like `.5`; an exponent (`e`/`E`, optional sign) is
/// consumed only when at least one digit follows it. On success the
/// cursor advances by exactly the consumed literal; a zero-length match
/// leaves it untouched and returns `None`.
pub fn match_double<B: WindowBuf + ?Sized>(cursor: &mut Cursor<'_, B>) -> Option<f64> {
    let len = float_len(cursor.rest());
    if len == 0 {
        return None;
    }
    // The measured extent is pure ASCII, so both conversions are
    // infallible in practice.
    let text = core::str::from_utf8(&cursor.rest()[..len]).ok()?;
    let value = text.parse::<f64>().ok()?;
    let _ = cursor.advance(len);
    Some(value)
}

/// Length of the numeric-literal prefix of `bytes`, 0 when there is none.
fn float_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if let Some(b'+' | b'-') = bytes.first() {
        i += 1;
    }
    let int_len = digit_run(&bytes[i..]);
    i += int_len;

    let mut frac_len = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_len = digit_run(&bytes[i + 1..]);
        // A trailing dot counts after integer digits ("3." is 3.0), but a
        // lone dot is not a number.
        if int_len > 0 || frac_len > 0 {
            i += 1 + frac_len;
        }
    }
    if int_len == 0 && frac_len == 0 {
        return 0;
    }

    if let Some(b'e' | b'E') = bytes.get(i) {
        let mut j = i + 1;
        if let Some(b'+' | b'-') = bytes.get(j) {
            j += 1;
        }
        let exp_len = digit_run(&bytes[j..]);
        if exp_len > 0 {
            i = j + exp_len;
        }
    }
    i
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
