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
use crate::error::ResolveError;
use crate::math::Pose;
use serde::{Deserialize, Serialize};

/// Display metadata attached to a resolved asset instance.
///
/// Resolved at catalog-authoring time by the asset service rather than
/// discovered by searching the instance's node tree at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstanceMetadata {
    /// Preferred display name, if the asset was authored with one.
    pub display_name: Option<String>,
    /// Longer description; used as the display name when no name exists.
    pub description: Option<String>,
}

/// A freshly resolved, independently owned asset instance.
///
/// Each successful load or instantiate produces a new `AssetInstance`; the
/// core never caches them. After placement, ownership transfers to the scene
/// collaborator and the core tracks the instance no further.
#[derive(Debug, Clone)]
pub struct AssetInstance {
    /// The key this instance was resolved from.
    pub key: AssetKey,
    /// The service-assigned identifier of this particular instance.
    pub instance_id: String,
    /// The world transform the instance was spawned with.
    pub pose: Pose,
    /// Authoring-time display metadata.
    pub metadata: InstanceMetadata,
}

impl AssetInstance {
    /// The label to show in diagnostics for this instance.
    ///
    /// Prefers the authored display name, then the description, then the
    /// instance's own identifier. Diagnostic only; placement never depends
    /// on it.
    pub fn label(&self) -> &str {
        self.metadata
            .display_name
            .as_deref()
            .or(self.metadata.description.as_deref())
            .unwrap_or(&self.instance_id)
    }
}

/// The outcome of a single load or instantiate request.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The asset resolved to a fresh instance, ownership transferred to the
    /// caller.
    Loaded(AssetInstance),
    /// Resolution failed; the reason is surfaced for logging, never retried
    /// automatically.
    Failed(ResolveError),
}

/// One result per load/instantiate request, tagged with the requested key.
#[derive(Debug)]
pub struct LoadResult {
    /// The key the request was issued for.
    pub key: AssetKey,
    /// Success or failure of the resolution.
    pub outcome: LoadOutcome,
}

impl LoadResult {
    /// Whether the request resolved successfully.
    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Loaded(_))
    }

    /// Consumes the result, returning the instance if one was produced.
    pub fn into_instance(self) -> Option<AssetInstance> {
        match self.outcome {
            LoadOutcome::Loaded(instance) => Some(instance),
            LoadOutcome::Failed(_) => None,
        }
    }
}
