//! Named winch configurations kept in a local JSON file.
//!
//! The document shape is `{ "<name>": { ...WinchInputs } }`. Built-in presets
//! are loaded first and entries from the file replace presets of the same name.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::presets;
use crate::winch::{ValidationError, WinchInputs};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration name must not be empty")]
    EmptyName,
    #[error("configuration '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },
    #[error("no configuration named '{0}'")]
    NotFound(String),
    #[error("'{0}' is a built-in configuration and cannot be removed")]
    BuiltIn(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigStore {
    configs: BTreeMap<String, WinchInputs>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the built-in presets.
    pub fn with_presets() -> Self {
        let configs = presets::presets()
            .iter()
            .map(|p| (p.name.to_string(), (p.build)()))
            .collect();
        Self { configs }
    }

    /// Loads presets, then merges the file at `path` over them if it exists.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let mut store = Self::with_presets();
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let saved = Self::from_json(&content)?;
            debug!(path = %path.display(), count = saved.len(), "loaded saved configurations");
            store.merge(saved);
        }
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copies every entry of `other` into this store, replacing same-named ones.
    pub fn merge(&mut self, other: ConfigStore) {
        self.configs.extend(other.configs);
    }

    /// Adds or replaces a configuration after validating it.
    pub fn insert(&mut self, name: &str, inputs: WinchInputs) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        inputs.validate().map_err(|source| StoreError::Invalid {
            name: name.to_string(),
            source,
        })?;
        self.configs.insert(name.to_string(), inputs);
        Ok(())
    }

    /// Deletes a saved configuration. Built-in presets are reloaded on every
    /// [`ConfigStore::load`], so removing one is refused.
    pub fn remove(&mut self, name: &str) -> Result<WinchInputs, StoreError> {
        if presets::presets().iter().any(|p| p.name == name) {
            return Err(StoreError::BuiltIn(name.to_string()));
        }
        self.configs
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&WinchInputs> {
        self.configs.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&WinchInputs, StoreError> {
        self.get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WinchInputs)> {
        self.configs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
