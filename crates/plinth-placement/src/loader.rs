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

//! The on-demand load-and-instantiate pipeline over the remote service.

use plinth_core::asset::{AssetKey, LoadOutcome, LoadResult};
use plinth_core::math::Pose;
use plinth_core::service::RemoteAssetService;
use std::sync::Arc;

/// Resolves asset keys into loaded or spawned instances.
///
/// `load` and `instantiate` are independent operations: instantiation
/// performs its own resolution and never requires a prior load. Both yield
/// at most one result and cannot be cancelled once issued. Failures are
/// logged and returned; the caller decides whether to ask again.
pub struct AssetLoader<S> {
    service: Arc<S>,
}

impl<S> Clone for AssetLoader<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<S: RemoteAssetService> AssetLoader<S> {
    /// Creates a loader over the given remote service.
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Resolves `key` into a loaded instance without spawning it.
    ///
    /// Useful as an eager prefetch after selection: the result's label is
    /// logged for diagnostics and is not needed by a later `instantiate`.
    pub async fn load(&self, key: &AssetKey) -> LoadResult {
        match self.service.load(key).await {
            Ok(instance) => {
                log::debug!("Model loaded: {}", instance.label());
                LoadResult {
                    key: key.clone(),
                    outcome: LoadOutcome::Loaded(instance),
                }
            }
            Err(err) => {
                log::error!("Failed to load model: {err}");
                LoadResult {
                    key: key.clone(),
                    outcome: LoadOutcome::Failed(err),
                }
            }
        }
    }

    /// Resolves `key` and materializes a fresh instance at `pose`.
    pub async fn instantiate(&self, key: &AssetKey, pose: Pose) -> LoadResult {
        match self.service.instantiate(key, pose).await {
            Ok(instance) => LoadResult {
                key: key.clone(),
                outcome: LoadOutcome::Loaded(instance),
            },
            Err(err) => {
                log::error!("Failed to instantiate model: {err}");
                LoadResult {
                    key: key.clone(),
                    outcome: LoadOutcome::Failed(err),
                }
            }
        }
    }
}
