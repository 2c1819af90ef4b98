//! Error types for the wire-format layer.
//!
//! Parsing in this crate is total: tokenizing, message parsing, and prefix
//! classification always produce a value. Errors arise only on the write path
//! (strict serialization, missing command) and from the strict tokenizer entry
//! point.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level errors produced by this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The strict tokenizer entry point was handed an empty line.
    ///
    /// The lenient [`split`](crate::tokenizer::split) treats the same input as
    /// a no-op and returns no tokens.
    #[error("malformed line: empty input")]
    MalformedLine,

    /// A message without a command cannot be rendered to the wire.
    #[error("missing command")]
    MissingCommand,

    /// Strict serialization found a parameter whose placement would not
    /// re-tokenize losslessly.
    #[error("protocol violation: {0}")]
    ProtocolViolation(#[from] Violation),

    /// A sender prefix failed validation.
    ///
    /// Reserved. Prefix parsing is a best-effort classification that never
    /// fails, so no code path currently produces this variant; it exists so
    /// strict prefix validation could be added without breaking the enum.
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),
}

/// The placement rule a strict serialization run found broken.
///
/// Indices refer to the assembled token vector: tag segment (if any), sender
/// segment (if any), command, then arguments.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Violation {
    /// A parameter other than the trailing one contains a space.
    #[error("space in parameter {0}; only the trailing parameter may contain spaces")]
    SpaceInParam(usize),

    /// A parameter past the sender slot starts with `:` without being the
    /// trailing parameter.
    #[error("parameter {0} starts with ':'")]
    ColonInParam(usize),
}
