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

//! The single active selection awaiting placement.

use plinth_core::asset::AssetKey;

/// Holds at most one selected asset key.
///
/// Selecting unconditionally overwrites whatever was selected before; there
/// is no stacking or queueing. The holder does not validate that a key exists; an
/// invalid key simply fails later at resolution. Pure state, no asynchrony.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<AssetKey>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `key`, silently replacing any prior selection.
    pub fn select(&mut self, key: AssetKey) {
        if let Some(previous) = &self.selected {
            log::debug!("Selection '{previous}' replaced by '{key}'.");
        }
        self.selected = Some(key);
    }

    /// The currently selected key, if any.
    pub fn current(&self) -> Option<&AssetKey> {
        self.selected.as_ref()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clears the selection and hands the key to the caller.
    pub fn take(&mut self) -> Option<AssetKey> {
        self.selected.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_overwrites_without_accumulation() {
        let mut selection = SelectionState::new();
        assert!(selection.current().is_none());

        // Any later selection before placement replaces the earlier one.
        for key in ["key_chair", "key_table", "key_lamp"] {
            selection.select(AssetKey::from(key));
            assert_eq!(selection.current(), Some(&AssetKey::from(key)));
        }

        selection.clear();
        assert!(selection.current().is_none());
    }

    #[test]
    fn test_take_consumes_exactly_once() {
        let mut selection = SelectionState::new();
        selection.select(AssetKey::from("key_chair"));
        assert_eq!(selection.take(), Some(AssetKey::from("key_chair")));
        assert_eq!(selection.take(), None);
    }
}
