//! A string encoding for binary trees.
//!
//! A tree is written in pre-order: each node's value, then its left subtree,
//! then its right subtree. Every absent child is written as a sentinel token,
//! which makes the encoding unambiguous. Tokens are joined by a single
//! separator character.
//!
//! ```text
//!       1
//!      / \            1,2,#,#,3,4,#,#,5,#,#
//!     2   3
//!        / \
//!       4   5
//! ```
//!
//! The default [`Format`] uses `#` as the sentinel and `,` as the separator.
//!
//! # Examples
//!
//! ```
//! use bintree::{codec, Node, Tree};
//!
//! let tree = Tree::from(Node::new(1).with_left(Node::new(2)));
//! let encoded = codec::serialize(&tree);
//! assert_eq!(encoded, "1,2,#,#,#");
//!
//! let decoded: Tree<i32> = codec::deserialize(&encoded).unwrap();
//! assert_eq!(decoded, tree);
//! ```

use std::fmt::Display;
use std::str::{FromStr, Split};

use tracing::{debug, warn};

use crate::error::{DecodeError, FormatError};
use crate::tree::Tree;
use crate::walk::{self, Slots};

const DEFAULT_SENTINEL: &str = "#";
const DEFAULT_SEPARATOR: char = ',';

/// Serialize `tree` with the default [`Format`].
pub fn serialize<T>(tree: &Tree<T>) -> String
where
    T: Display,
{
    Format::default().encode(tree)
}

/// Deserialize a tree written with the default [`Format`].
///
/// Empty (or all-whitespace) input decodes to the empty tree.
pub fn deserialize<T>(input: &str) -> Result<Tree<T>, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    Format::default().decode(input)
}

/// The tokens used to encode a tree: a sentinel for absent children and the
/// character separating tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFormat")
)]
pub struct Format {
    sentinel: String,
    separator: char,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_owned(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Format {
    /// Build a format from a sentinel token and a separator.
    ///
    /// The sentinel is trimmed of surrounding whitespace. It must not be
    /// empty or contain the separator, and the separator must not be
    /// whitespace.
    ///
    /// ```
    /// use bintree::{codec::Format, Node, Tree};
    ///
    /// let format = Format::new("null", ' ');
    /// assert!(format.is_err());
    ///
    /// let format = Format::new("null", ';').unwrap();
    /// let tree = Tree::from(Node::new(1));
    /// assert_eq!(format.encode(&tree), "1;null;null");
    /// ```
    pub fn new(sentinel: impl Into<String>, separator: char) -> Result<Self, FormatError> {
        let sentinel = sentinel.into().trim().to_owned();

        if separator.is_whitespace() {
            return Err(FormatError::WhitespaceSeparator(separator));
        }
        if sentinel.is_empty() {
            return Err(FormatError::EmptySentinel);
        }
        if sentinel.contains(separator) {
            return Err(FormatError::SentinelContainsSeparator {
                sentinel,
                separator,
            });
        }

        Ok(Self {
            sentinel,
            separator,
        })
    }

    /// The token written for an absent child.
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// The character placed between tokens.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Encode `tree` as a string of pre-order tokens.
    ///
    /// The empty tree encodes to the sentinel alone. Values are written with
    /// their [`Display`] implementation; a value that renders as the sentinel,
    /// contains the separator, or has surrounding whitespace is written as-is
    /// but will not decode back to the same tree.
    pub fn encode<T>(&self, tree: &Tree<T>) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for slot in Slots::new(tree.root()) {
            match slot {
                None => out.push_str(&self.sentinel),
                Some(n) => {
                    let token = n.value().to_string();
                    if token == self.sentinel
                        || token.contains(self.separator)
                        || token.trim() != token
                    {
                        warn!(%token, "value token will not survive decoding");
                    }
                    out.push_str(&token);
                }
            }
            out.push(self.separator);
        }

        // Every token is followed by a separator, drop the final one.
        out.pop();
        out
    }

    /// Decode a tree from a string of pre-order tokens.
    ///
    /// Empty (or all-whitespace) input decodes to the empty tree. Whitespace
    /// around each token is ignored. The whole input must describe exactly
    /// one tree: truncated input, leftover tokens, and tokens that fail to
    /// parse as `T` are all rejected.
    ///
    /// ```
    /// use bintree::{codec::Format, DecodeError, Tree};
    ///
    /// let format = Format::default();
    ///
    /// let tree: Tree<i32> = format.decode("1, 2, #, #, #").unwrap();
    /// assert_eq!(tree.max_depth(), 2);
    ///
    /// let err = format.decode::<i32>("1,2,#").unwrap_err();
    /// assert_eq!(err, DecodeError::UnexpectedEnd { position: 3 });
    /// ```
    pub fn decode<T>(&self, input: &str) -> Result<Tree<T>, DecodeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        if input.trim().is_empty() {
            return Ok(Tree::empty());
        }

        let mut tokens = Tokens::new(input.split(self.separator));
        match self.decode_tree(&mut tokens) {
            Ok(tree) => {
                debug!(tokens = tokens.position, nodes = tree.len(), "decoded tree");
                Ok(tree)
            }
            Err(error) => {
                debug!(%error, "failed to decode tree");
                Err(error)
            }
        }
    }

    fn decode_tree<T>(&self, tokens: &mut Tokens<'_>) -> Result<Tree<T>, DecodeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let root = walk::assemble(|| self.decode_token(tokens))?;

        let position = tokens.position;
        let remaining = tokens.inner.by_ref().count();
        if remaining > 0 {
            return Err(DecodeError::TrailingTokens {
                position,
                remaining,
            });
        }

        Ok(Tree::new(root))
    }

    /// Reads the next token: `None` for the sentinel, otherwise a value.
    fn decode_token<T>(&self, tokens: &mut Tokens<'_>) -> Result<Option<T>, DecodeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (position, token) = tokens.next().ok_or(DecodeError::UnexpectedEnd {
            position: tokens.position,
        })?;

        if token == self.sentinel {
            return Ok(None);
        }

        token
            .parse::<T>()
            .map(Some)
            .map_err(|e| DecodeError::InvalidValue {
                position,
                token: token.to_owned(),
                reason: e.to_string(),
            })
    }
}

/// A cursor over the trimmed tokens of an encoded tree.
struct Tokens<'a> {
    inner: Split<'a, char>,
    /// Index of the next token to be yielded.
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(inner: Split<'a, char>) -> Self {
        Self { inner, position: 0 }
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        let token = self.inner.next()?;
        let position = self.position;
        self.position += 1;

        Some((position, token.trim()))
    }
}

/// The unvalidated shape of a [`Format`] read from configuration.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawFormat {
    sentinel: String,
    separator: char,
}

#[cfg(feature = "serde")]
impl Default for RawFormat {
    fn default() -> Self {
        let Format {
            sentinel,
            separator,
        } = Format::default();
        Self {
            sentinel,
            separator,
        }
    }
}

#[cfg(feature = "serde")]
impl std::convert::TryFrom<RawFormat> for Format {
    type Error = FormatError;

    fn try_from(raw: RawFormat) -> Result<Self, Self::Error> {
        Self::new(raw.sentinel, raw.separator)
    }
}
