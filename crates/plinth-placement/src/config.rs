// Copyright 2026 the plinth authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Catalog configuration loading.
//!
//! The catalog and the name of its aggregate download group are authored in
//! a JSON file and are immutable once loaded.

use plinth_core::asset::{AssetDescriptor, Catalog};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from reading or parsing the catalog configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read catalog config: {0}")]
    Io(#[from] std::io::Error),
    /// The contents were not a valid catalog configuration.
    #[error("failed to parse catalog config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The authored configuration: a download group plus ordered entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// The remote asset group bundling every catalog asset into one
    /// download unit.
    pub group: String,
    /// Catalog entries, in display order.
    pub entries: Vec<AssetDescriptor>,
}

impl CatalogConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Splits the configuration into the group name and the catalog.
    pub fn into_parts(self) -> (String, Catalog) {
        (self.group, Catalog::new(self.entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONFIG_JSON: &str = r#"{
        "group": "Models",
        "entries": [
            {"display_name": "Chair", "key": "key_chair"},
            {"display_name": "Sofa", "key": "key_sofa", "ui_label": "btn_sofa"}
        ]
    }"#;

    #[test]
    fn test_parse_and_split() {
        let config = CatalogConfig::from_json_str(CONFIG_JSON).unwrap();
        let (group, catalog) = config.into_parts();
        assert_eq!(group, "Models");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entry(0).unwrap().display_name, "Chair");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG_JSON.as_bytes()).unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.group, "Models");
        assert_eq!(config.entries.len(), 2);
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let err = CatalogConfig::from_json_str("{\"entries\": []}").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
