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

use crate::asset::{AssetInstance, AssetKey};
use crate::error::{ResolveError, TransportError};
use crate::math::Pose;
use async_trait::async_trait;

/// One update on an in-flight aggregate download.
///
/// A well-behaved transport delivers progress fractions in non-decreasing
/// order and exactly one terminal update per download; the consumer clamps
/// and monotonizes regardless.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferUpdate {
    /// Fraction of the download completed, in `[0, 1]`.
    Progress(f32),
    /// The download finished; all bundled assets are locally available.
    Complete,
    /// The download failed with a transport diagnostic.
    Failed(String),
}

/// The remote asset delivery collaborator.
///
/// Abstracts the hosted asset service: one named group bundles every
/// catalog asset into a single aggregate download unit, while individual
/// keys resolve to loadable instances. All operations are asynchronous and
/// non-cancellable once issued; failures are reported through the result,
/// never retried here.
///
/// A concrete implementation wraps the actual delivery backend; tests and
/// the sandbox script one in memory.
#[async_trait]
pub trait RemoteAssetService: Send + Sync {
    /// Queries how many bytes the named group still needs to download.
    ///
    /// Zero means every bundled asset is already available locally.
    async fn download_size(&self, group: &str) -> Result<u64, TransportError>;

    /// Starts downloading the named group's dependencies.
    ///
    /// Returns the receiving end of the update stream. The transport owns
    /// the sending end; dropping the receiver after the terminal update
    /// releases the transfer's transient resources.
    fn download_dependencies(&self, group: &str) -> flume::Receiver<TransferUpdate>;

    /// Resolves a key into a loaded instance without spawning it anywhere.
    async fn load(&self, key: &AssetKey) -> Result<AssetInstance, ResolveError>;

    /// Resolves a key and materializes a fresh instance at `pose`.
    ///
    /// Each call produces an independently owned instance; nothing is cached
    /// across calls.
    async fn instantiate(&self, key: &AssetKey, pose: Pose) -> Result<AssetInstance, ResolveError>;
}
