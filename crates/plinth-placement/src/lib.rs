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

//! # Plinth Placement
//!
//! The asset acquisition and placement core: the aggregate download state
//! machine, the load/instantiate pipeline, the single active selection, and
//! the press-to-surface placement controller that ties them together over
//! the collaborator contracts of `plinth-core`.

#![warn(missing_docs)]

pub mod config;
pub mod download;
pub mod loader;
pub mod placement;
pub mod selection;

pub use config::{CatalogConfig, ConfigError};
pub use download::{DownloadState, DownloadTracker};
pub use loader::AssetLoader;
pub use placement::{Mode, PlacementConfig, PlacementController, PressOutcome};
pub use selection::SelectionState;
