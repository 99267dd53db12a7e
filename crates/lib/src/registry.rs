//!
//! Named collections of configuration trees.
//!
//! A `Registry` maps names to [`Config`]s, with `"default"` reserved for the
//! tree most callers care about. It is an ordinary value owned by the caller;
//! share it the way you would share any other state.

use std::{collections::HashMap, path::Path as FsPath};

use tracing::info;

use crate::{Config, Format, Result};

/// Name of the tree returned by [`Registry::default_config`]
pub const DEFAULT_NAME: &str = "default";

/// A keyed store of configuration trees.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    configs: HashMap<String, Config>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `config` under `name`, returning the tree it replaced
    pub fn insert(&mut self, name: impl Into<String>, config: Config) -> Option<Config> {
        self.configs.insert(name.into(), config)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Config> {
        self.configs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Config> {
        self.configs.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Config> {
        self.configs.remove(name)
    }

    /// Returns the tree stored under `name`, creating an empty one if needed
    pub fn by_name(&mut self, name: &str) -> &mut Config {
        self.configs.entry(name.to_string()).or_default()
    }

    /// Returns the `"default"` tree, creating it if needed
    pub fn default_config(&mut self) -> &mut Config {
        self.by_name(DEFAULT_NAME)
    }

    /// Loads a file and stores it under `name`.
    ///
    /// On failure the registry is left unchanged.
    pub fn load_file(
        &mut self,
        name: &str,
        path: impl AsRef<FsPath>,
        format: Format,
    ) -> Result<&mut Config> {
        let path = path.as_ref();
        let config = Config::from_file(path, format)?;
        info!(name, path = %path.display(), %format, keys = config.len(), "Loaded config");
        self.insert(name, config);
        Ok(self.by_name(name))
    }

    /// Loads a file as the `"default"` tree
    pub fn load_default_file(
        &mut self,
        path: impl AsRef<FsPath>,
        format: Format,
    ) -> Result<&mut Config> {
        self.load_file(DEFAULT_NAME, path, format)
    }

    /// Registered names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
