//! Command implementations.

use std::path::Path;

use cfgtree::{Config, Delimiters, Format, Value};
use tracing::debug;

use crate::cli::GlobalArgs;

pub mod get;
pub mod set;
pub mod show;

/// Picks the input format from `--format`, or from the file extension
pub fn resolve_format(file: &Path, global: &GlobalArgs) -> Result<Format, Box<dyn std::error::Error>> {
    match &global.format {
        Some(tag) => Ok(tag.parse()?),
        None => Format::from_extension(file).ok_or_else(|| {
            format!(
                "cannot infer the format of '{}', pass --format",
                file.display()
            )
            .into()
        }),
    }
}

/// Reads a configuration file, optionally interpolating it
pub fn load(
    file: &Path,
    prepare: bool,
    global: &GlobalArgs,
) -> Result<Config, Box<dyn std::error::Error>> {
    let format = resolve_format(file, global)?;
    let mut config = Config::from_file(file, format)?;
    debug!(file = %file.display(), %format, keys = config.len(), "Loaded config");
    if prepare {
        config.prepare(&delimiters(global))?;
    }
    Ok(config)
}

pub fn delimiters(global: &GlobalArgs) -> Delimiters {
    Delimiters::new(global.left.clone(), global.right.clone())
}

/// Parses a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}
