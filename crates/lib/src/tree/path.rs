//! Dotted path parsing.
//!
//! A path string such as `servers.*.host` is split on `.` into an ordered
//! list of [`Segment`]s. Reserved tokens:
//!
//! - `*` - [`Segment::Wildcard`], every entry of the container
//! - `+` - [`Segment::Append`], append on writes, every entry on reads
//! - `$` - [`Segment::Current`], every entry of an array
//! - all-digit - [`Segment::Index`], an array position
//!
//! Anything else is a [`Segment::Key`]. The array meaning of a token only
//! applies when the node it is applied to is an array; against an object
//! every token except `*` is looked up as a literal key.
//!
//! ```rust
//! use cfgtree::tree::path::{Path, Segment};
//! use std::str::FromStr;
//!
//! let path = Path::from_str("servers.0.host")?;
//! assert_eq!(path.len(), 3);
//! assert!(matches!(path.segments()[1], Segment::Index { index: 0, .. }));
//!
//! assert!(Path::from_str("servers..host").is_err());
//! # Ok::<(), cfgtree::tree::path::PathError>(())
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error type for path parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string was empty
    #[error("empty path")]
    Empty,

    /// A segment between two dots (or at either end) was empty
    #[error("empty segment at position {position} in '{path}'")]
    EmptySegment { path: String, position: usize },
}

/// One dot-delimited unit of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object field name
    Key(String),
    /// Array position; `text` keeps the original spelling for object lookups
    Index { index: usize, text: String },
    /// `*`
    Wildcard,
    /// `+`
    Append,
    /// `$`
    Current,
}

impl Segment {
    /// Classifies a single non-empty segment
    pub fn parse(text: &str) -> Self {
        match text {
            "*" => Segment::Wildcard,
            "+" => Segment::Append,
            "$" => Segment::Current,
            _ if is_digits(text) => Segment::Index {
                // Overflowing indices are never in range
                index: text.parse().unwrap_or(usize::MAX),
                text: text.to_string(),
            },
            _ => Segment::Key(text.to_string()),
        }
    }

    /// The segment as written, used when it is looked up as an object key
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Key(key) => key,
            Segment::Index { text, .. } => text,
            Segment::Wildcard => "*",
            Segment::Append => "+",
            Segment::Current => "$",
        }
    }

    /// Returns true for `*`, `+` and digits, the tokens that cannot open a
    /// write path at the root.
    ///
    /// `$` is not among them: it only means "every element" against an
    /// existing array and is a literal key everywhere else.
    pub fn is_array_chain(&self) -> bool {
        matches!(
            self,
            Segment::Wildcard | Segment::Append | Segment::Index { .. }
        )
    }

    /// Returns true for the tokens that address every entry
    pub fn is_fan_out(&self) -> bool {
        matches!(
            self,
            Segment::Wildcard | Segment::Append | Segment::Current
        )
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A parsed path: a non-empty sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Builds a path from already classified segments.
    ///
    /// Returns `None` for an empty list.
    pub fn from_segments(segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; parsed paths have at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends a segment parsed from `text`
    pub fn push(mut self, text: &str) -> Result<Self, PathError> {
        if text.is_empty() {
            return Err(PathError::EmptySegment {
                path: format!("{self}."),
                position: self.segments.len(),
            });
        }
        self.segments.push(Segment::parse(text));
        Ok(self)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let segments = s
            .split('.')
            .enumerate()
            .map(|(position, text)| {
                if text.is_empty() {
                    Err(PathError::EmptySegment {
                        path: s.to_string(),
                        position,
                    })
                } else {
                    Ok(Segment::parse(text))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Renders a slice of segments back to dotted form, for log and error text
pub(crate) fn join(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::as_str)
        .collect::<Vec<_>>()
        .join(".")
}
