use super::*;

#[test]
fn slice_buf_opens_full_window() {
    let buf = SliceBuf::new(b"abc");
    assert_eq!(
        buf.window(),
        Window {
            start: 0,
            current: 0,
            end: 3
        }
    );
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.remaining(), 3);
    assert_eq!(buf.peek(), Some(b'a'));
    assert_eq!(buf.peek_next(), Some(b'b'));
    assert_eq!(buf.rest(), b"abc");
}

#[test]
fn peek_next_stops_before_window_end() {
    let mut buf = SliceBuf::new(b"ab");
    let mut w = buf.window();
    w.current = 1;
    buf.set_window(w);
    // Only the last byte remains: peeking one past it must not read the
    // end.
    assert_eq!(buf.peek(), Some(b'b'));
    assert_eq!(buf.peek_next(), None);

    w.current = 2;
    buf.set_window(w);
    assert_eq!(buf.peek(), None);
    assert_eq!(buf.peek_next(), None);
}

#[test]
fn peek_on_empty_window_is_none() {
    let buf = SliceBuf::new(b"");
    assert_eq!(buf.peek(), None);
    assert_eq!(buf.peek_next(), None);
    assert_eq!(buf.remaining(), 0);
}

#[test]
fn set_window_replaces_atomically() {
    let mut buf = SliceBuf::new(b"abcdef");
    let replacement = Window {
        start: 1,
        current: 3,
        end: 5,
    };
    buf.set_window(replacement);
    assert_eq!(buf.window(), replacement);
    assert_eq!(buf.position(), 2);
    assert_eq!(buf.rest(), b"de");
    assert_eq!(buf.rest_from(0), b"bcde");
}

#[test]
fn reset_clears_to_empty() {
    let mut buf = SliceBuf::new(b"abc");
    buf.reset();
    assert_eq!(buf.window(), Window::empty());
    assert_eq!(buf.remaining(), 0);
    assert_eq!(buf.peek(), None);
}

#[test]
fn array_buf_feed_appends_and_positions_at_previous_size() {
    let mut buf: ArrayBuf<16> = ArrayBuf::new();
    buf.feed(b"abc").unwrap();
    assert_eq!(
        buf.window(),
        Window {
            start: 0,
            current: 0,
            end: 3
        }
    );
    assert_eq!(buf.size(), 3);

    buf.feed(b"defg").unwrap();
    // New data is readable from where the previous feed ended.
    assert_eq!(
        buf.window(),
        Window {
            start: 0,
            current: 3,
            end: 7
        }
    );
    assert_eq!(buf.size(), 7);
    assert_eq!(buf.rest(), b"defg");
    assert_eq!(buf.rest_from(0), b"abcdefg");
}

#[test]
fn array_buf_feed_boundary_is_strict() {
    // size + len == N must fail; one byte of headroom stays reserved.
    let mut buf: ArrayBuf<8> = ArrayBuf::new();
    let err = buf.feed(b"12345678").unwrap_err();
    assert_eq!(
        err,
        Error::Overflow {
            len: 8,
            size: 0,
            capacity: 8
        }
    );
    // Failure mutates nothing.
    assert_eq!(buf.size(), 0);
    assert_eq!(buf.window(), Window::empty());

    // size + len == N - 1 is the largest accepted feed.
    buf.feed(b"1234567").unwrap();
    assert_eq!(buf.size(), 7);
    assert!(buf.feed(b"x").is_err());
}

#[test]
fn array_buf_rejected_feed_preserves_prior_content() {
    let mut buf: ArrayBuf<8> = ArrayBuf::new();
    buf.feed(b"abcd").unwrap();
    let before = buf.window();
    assert!(buf.feed(b"efgh").is_err());
    assert_eq!(buf.window(), before);
    assert_eq!(buf.size(), 4);
    assert_eq!(buf.rest(), b"abcd");
}

#[test]
fn array_buf_reset_then_reuse() {
    let mut buf: ArrayBuf<8> = ArrayBuf::new();
    buf.feed(b"abc").unwrap();
    buf.reset();
    assert_eq!(buf.size(), 0);
    assert_eq!(buf.window(), Window::empty());
    buf.feed(b"xy").unwrap();
    assert_eq!(buf.rest_from(0), b"xy");
}

#[test]
fn array_buf_from_slice_seeds_full_window() {
    let buf: ArrayBuf<8> = ArrayBuf::from_slice(b"abcde").unwrap();
    assert_eq!(
        buf.window(),
        Window {
            start: 0,
            current: 0,
            end: 5
        }
    );
    assert_eq!(buf.size(), 5);
}

#[test]
fn array_buf_from_slice_allows_exact_capacity_but_then_never_feeds() {
    let mut buf: ArrayBuf<4> = ArrayBuf::from_slice(b"abcd").unwrap();
    assert!(buf.feed(b"").is_err());

    let err = ArrayBuf::<4>::from_slice(b"abcde").unwrap_err();
    assert_eq!(
        err,
        Error::Overflow {
            len: 5,
            size: 0,
            capacity: 4
        }
    );
}
