//! Loading trees from encoded data.
//!
//! Supported formats are JSON, YAML and XML. Decoded data is normalized into
//! tree nodes eagerly, so the returned [`Config`] never holds codec types.
//!
//! ```
//! use cfgtree::{Config, Format};
//!
//! let config = Config::from_slice(br#"{"db": {"port": 5432}}"#, Format::Json)?;
//! assert_eq!(config.get_int("db.port"), 5432);
//!
//! let config = Config::from_data(b"db:\n  port: 5432\n", "YAML")?;
//! assert_eq!(config.get_int("db.port"), 5432);
//! # Ok::<(), cfgtree::Error>(())
//! ```

use std::{fmt, path::Path as FsPath, str::FromStr};

use tracing::debug;

use crate::tree::{Config, Object, Value};

pub mod errors;
mod xml;

pub use errors::DecodeError;

/// An input encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
    Yaml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
        }
    }

    /// Infers the format from a file extension, if it is a known one.
    pub fn from_extension(path: impl AsRef<FsPath>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for Format {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(DecodeError::InvalidConfigFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes `data` into a normalized value.
///
/// The result may be any shape; [`Config::from_slice`] additionally requires
/// an object at the top.
pub fn decode(data: &[u8], format: Format) -> Result<Value, DecodeError> {
    let value = match format {
        Format::Json => Value::from(serde_json::from_slice::<serde_json::Value>(data)?),
        Format::Yaml => Value::from(serde_yaml::from_slice::<serde_yaml::Value>(data)?),
        Format::Xml => xml::parse(std::str::from_utf8(data)?)?,
    };
    Ok(value)
}

impl Config {
    /// Decodes `data` into a tree.
    ///
    /// A null document (such as an empty YAML file) yields an empty tree. Any
    /// other top-level shape than an object fails with
    /// [`DecodeError::NotAnObject`].
    pub fn from_slice(data: &[u8], format: Format) -> Result<Self, DecodeError> {
        let root = match decode(data, format)? {
            Value::Object(object) => object,
            Value::Null => Object::new(),
            other => {
                return Err(DecodeError::NotAnObject {
                    found: other.type_name(),
                });
            }
        };
        debug!(%format, keys = root.len(), "Decoded config");
        Ok(Config::from_object(root))
    }

    /// Decodes `data` with a textual format tag such as `"json"`.
    ///
    /// Unknown tags fail with [`DecodeError::InvalidConfigFormat`].
    pub fn from_data(data: &[u8], format: &str) -> Result<Self, DecodeError> {
        Self::from_slice(data, format.parse()?)
    }

    /// Reads and decodes a file.
    pub fn from_file(path: impl AsRef<FsPath>, format: Format) -> crate::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        debug!(path = %path.display(), %format, bytes = data.len(), "Read config file");
        Ok(Self::from_slice(&data, format)?)
    }
}
