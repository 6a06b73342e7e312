//! Error types for building text buffers.

use thiserror::Error;

/// Errors raised while framing strings into a [`TextBuffer`](crate::TextBuffer).
///
/// Tree construction itself cannot fail; only the buffer-building layer
/// validates its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A string body contains the character used to frame it.
    #[error("string {string} contains the sentinel at offset {offset}")]
    SentinelInText { string: usize, offset: usize },

    /// The buffer would no longer be addressable by node indices.
    #[error("text of {len} symbols exceeds the maximum of {max}")]
    TextTooLong { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
