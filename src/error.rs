//! Errors raised by the rewrap core.

use thiserror::Error;

/// Contract violations between the host and the rewrap core.
///
/// These never describe bad user text; any text can be rewrapped. They mean
/// the host handed the core a position that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewrapError {
    #[error("cursor offset {offset} is past the end of the document ({len} chars)")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("line {line} does not exist (document has {count} lines)")]
    LineOutOfBounds { line: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, RewrapError>;
