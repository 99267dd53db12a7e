//! Error types for decoding configuration data.

use thiserror::Error;

/// Errors turning raw bytes into a configuration tree.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The format tag is not one of `json`, `xml`, `yaml`
    #[error("Invalid config format: '{format}'")]
    InvalidConfigFormat { format: String },

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML decode error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid UTF-8 in input: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document decoded to something other than a mapping
    #[error("Top-level value must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// The document ended with elements still open
    #[error("Unclosed XML element '{name}'")]
    UnbalancedXml { name: String },
}

impl DecodeError {
    /// Check if this error is an unknown format tag
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, DecodeError::InvalidConfigFormat { .. })
    }

    /// Check if the input itself was malformed
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            DecodeError::Json(_)
                | DecodeError::Yaml(_)
                | DecodeError::Xml(_)
                | DecodeError::Utf8(_)
                | DecodeError::UnbalancedXml { .. }
        )
    }
}

impl From<DecodeError> for crate::Error {
    fn from(err: DecodeError) -> Self {
        crate::Error::Decode(err)
    }
}
