//! Self-referential template substitution.
//!
//! String leaves may embed paths into the same tree between a pair of
//! delimiters, `{{db.host}}` by default. Interpolation replaces each marker
//! with the value found at that path, resolved from the tree root, or with
//! an empty string when nothing is there.
//!
//! Interpolation is a single pass over a snapshot of the tree taken before
//! any leaf is rewritten. Substituted text is never scanned again, so a value
//! that points at another marker resolves to that marker's raw text, and
//! reference cycles simply stay unresolved.
//!
//! ```
//! use cfgtree::{Config, Delimiters};
//!
//! let mut config = Config::new();
//! config.set("db.host", "localhost");
//! config.set("db.url", "postgres://{{db.host}}/app");
//! config.prepare(&Delimiters::default())?;
//!
//! assert_eq!(config.get_string("db.url"), "postgres://localhost/app");
//! # Ok::<(), cfgtree::Error>(())
//! ```

use regex::{Captures, Regex};
use thiserror::Error;
use tracing::trace;

use crate::tree::{Array, Config, Object, Value};

/// Errors building an interpolation pattern.
#[derive(Debug, Error)]
pub enum InterpolateError {
    #[error("invalid interpolation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<InterpolateError> for crate::Error {
    fn from(err: InterpolateError) -> Self {
        crate::Error::Interpolate(err)
    }
}

/// Marker delimiters around an embedded path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiters {
    pub left: String,
    pub right: String,
}

impl Delimiters {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new("{{", "}}")
    }
}

/// A compiled marker pattern.
///
/// Markers enclose word characters, `.`, `+`, `*` and `$`. Delimiters are
/// matched literally, so they may contain regex metacharacters.
#[derive(Debug, Clone)]
pub struct Interpolator {
    pattern: Regex,
}

impl Interpolator {
    pub fn new(delimiters: &Delimiters) -> Result<Self, InterpolateError> {
        let pattern = format!(
            r"{}([\w.+*$]+){}",
            regex::escape(&delimiters.left),
            regex::escape(&delimiters.right)
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Rewrites every string leaf of `config` in place.
    ///
    /// Returns the number of leaves that changed.
    pub fn interpolate(&self, config: &mut Config) -> usize {
        let snapshot = config.clone();
        self.rewrite_object(config.root_mut(), &snapshot)
    }

    /// Substitutes the markers in a single string, resolving against `source`.
    pub fn render(&self, text: &str, source: &Config) -> String {
        self.substitute(text, source)
            .unwrap_or_else(|| text.to_string())
    }

    fn substitute(&self, text: &str, source: &Config) -> Option<String> {
        if !self.pattern.is_match(text) {
            return None;
        }
        let replaced = self.pattern.replace_all(text, |caps: &Captures| {
            let path = &caps[1];
            let resolved = source.get_default(path, "");
            trace!(path, resolved = %resolved, "Substituting marker");
            resolved.to_string()
        });
        Some(replaced.into_owned())
    }

    fn rewrite_object(&self, object: &mut Object, source: &Config) -> usize {
        object
            .values_mut()
            .map(|value| self.rewrite_value(value, source))
            .sum()
    }

    fn rewrite_array(&self, array: &mut Array, source: &Config) -> usize {
        array
            .iter_mut()
            .map(|value| self.rewrite_value(value, source))
            .sum()
    }

    fn rewrite_value(&self, value: &mut Value, source: &Config) -> usize {
        match value {
            Value::Text(text) => match self.substitute(text, source) {
                Some(replaced) if replaced != *text => {
                    *text = replaced;
                    1
                }
                _ => 0,
            },
            Value::Object(object) => self.rewrite_object(object, source),
            Value::Array(array) => self.rewrite_array(array, source),
            _ => 0,
        }
    }
}
