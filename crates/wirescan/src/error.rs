use thiserror::Error;

/// Capacity failures that end a buffer's usefulness for the current message.
///
/// Match/no-match outcomes are not errors and are reported through `bool`
/// returns or `Option` sentinels; only capacity exhaustion earns a typed
/// error, since the caller must allocate a larger buffer or abort the
/// message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A `feed` would reach or exceed the buffer's fixed capacity. One byte
    /// of headroom is always reserved, so the bound is strict. State is
    /// unchanged.
    #[error("feed of {len} bytes does not fit ({size} of {capacity} used, one byte reserved)")]
    Overflow {
        len: usize,
        size: usize,
        capacity: usize,
    },
    /// An output write found the buffer full at its configured maximum
    /// size. Nothing was written.
    #[error("output buffer full at maximum size {max_size}")]
    WriteBeyondMax { max_size: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
