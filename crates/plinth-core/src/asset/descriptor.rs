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

use super::key::AssetKey;
use serde::{Deserialize, Serialize};

/// Serializable metadata that maps a human-readable label to a remote asset.
///
/// Descriptors are authored in the catalog configuration and are immutable
/// after load. They carry everything the selector UI needs to present an
/// entry without touching the asset itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// The label shown to the user for this entry.
    pub display_name: String,

    /// The opaque key the remote service resolves this asset by.
    pub key: AssetKey,

    /// An optional reference to the externally owned UI control bound to
    /// this entry (an identifier the UI layer understands; the core never
    /// interprets it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_label: Option<String>,
}

/// An ordered collection of asset descriptors.
///
/// Order is display order: entry `i` of the catalog is the `i`-th control
/// in the selector UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<AssetDescriptor>,
}

impl Catalog {
    /// Creates a catalog from descriptors, preserving their order.
    pub fn new(entries: Vec<AssetDescriptor>) -> Self {
        Self { entries }
    }

    /// Parses a catalog from a JSON array of descriptors.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parses a catalog from a reader yielding a JSON array of descriptors.
    pub fn from_reader(reader: impl std::io::Read) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// The descriptor at display position `index`, if in range.
    pub fn entry(&self, index: usize) -> Option<&AssetDescriptor> {
        self.entries.get(index)
    }

    /// The number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over descriptors in display order.
    pub fn iter(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_preserves_authoring_order() {
        let json = r#"[
            {"display_name": "Chair", "key": "key_chair"},
            {"display_name": "Table", "key": "key_table", "ui_label": "btn_1"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entry(0).unwrap().key, AssetKey::from("key_chair"));
        assert_eq!(catalog.entry(1).unwrap().display_name, "Table");
        assert_eq!(catalog.entry(1).unwrap().ui_label.as_deref(), Some("btn_1"));
        assert!(catalog.entry(2).is_none());
    }

    #[test]
    fn test_catalog_from_reader_matches_from_str() {
        let json = r#"[{"display_name": "Chair", "key": "key_chair"}]"#;
        let from_reader = Catalog::from_reader(json.as_bytes()).unwrap();
        let from_str = Catalog::from_json_str(json).unwrap();
        assert_eq!(from_reader.len(), from_str.len());
        assert_eq!(from_reader.entry(0).unwrap().key, from_str.entry(0).unwrap().key);
    }
}
