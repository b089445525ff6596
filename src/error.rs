use thiserror::Error;

/// Errors returned when decoding a serialized tree.
///
/// `position` is the zero-based index of the offending token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended while a subtree was still expected.
    #[error("malformed input: unexpected end of input at token {position}")]
    UnexpectedEnd {
        /// Index of the missing token.
        position: usize,
    },

    /// A complete tree was decoded but more tokens followed it.
    #[error("malformed input: {remaining} trailing token(s) starting at token {position}")]
    TrailingTokens {
        /// Index of the first unconsumed token.
        position: usize,
        /// Number of unconsumed tokens.
        remaining: usize,
    },

    /// A token was neither the sentinel nor a parsable value.
    #[error("malformed input: invalid value {token:?} at token {position}: {reason}")]
    InvalidValue {
        /// Index of the token.
        position: usize,
        /// The token as it appeared in the input (trimmed).
        token: String,
        /// The parse error reported for the token.
        reason: String,
    },
}

/// Errors returned when building an invalid [`Format`][crate::codec::Format].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The sentinel token was empty (or only whitespace).
    #[error("sentinel token must not be empty")]
    EmptySentinel,

    /// The sentinel token contains the separator and would be split apart.
    #[error("sentinel {sentinel:?} contains the separator {separator:?}")]
    SentinelContainsSeparator {
        /// The rejected sentinel.
        sentinel: String,
        /// The separator it collides with.
        separator: char,
    },

    /// Tokens are trimmed of whitespace, so whitespace cannot separate them.
    #[error("separator {0:?} is whitespace")]
    WhitespaceSeparator(char),
}

/// Returned when a sum of node values does not fit in the value type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("sum of node values overflows the value type")]
pub struct Overflow;
