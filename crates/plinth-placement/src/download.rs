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

//! The aggregate download state machine.
//!
//! All catalog assets are bundled into one named group, so a single tracker
//! covers the whole catalog. The tracker is constructed explicitly and
//! injected where needed; it is not process-global state.

use plinth_core::service::{ProgressSink, RemoteAssetService, TransferUpdate};
use std::sync::Arc;

/// Where the aggregate download currently stands.
///
/// Transitions are driven exclusively by [`DownloadTracker`]; consumers only
/// read the state.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadState {
    /// No size query has completed yet.
    Unknown,
    /// The size query reported zero bytes: everything is already local.
    /// Terminal, and equivalent to `Ready` for consumers.
    NotNeeded,
    /// The group needs fetching.
    NeedsFetch {
        /// How many bytes the fetch will transfer.
        size_bytes: u64,
    },
    /// A download is in flight.
    Fetching {
        /// Fraction completed, monotone non-decreasing in `[0, 1]`.
        progress: f32,
    },
    /// The download finished; bundled assets are locally available.
    Ready,
    /// The size query or the download failed. Retry is a fresh
    /// caller-initiated invocation, never automatic.
    Failed {
        /// The transport diagnostic.
        reason: String,
    },
}

impl DownloadState {
    /// Whether the bundled assets are locally available.
    pub fn is_available(&self) -> bool {
        matches!(self, DownloadState::Ready | DownloadState::NotNeeded)
    }
}

/// Tracks the one aggregate download for a catalog's asset group.
///
/// Mirrors the lifecycle of the remote delivery collaborator: one
/// asynchronous size query, then at most one download at a time, with every
/// progress update forwarded to the progress sink as display text. The
/// transfer stream is a transient resource: it is consumed and dropped
/// inside [`begin_download`](Self::begin_download) whatever the outcome.
pub struct DownloadTracker<S> {
    service: Arc<S>,
    group: String,
    state: DownloadState,
}

impl<S: RemoteAssetService> DownloadTracker<S> {
    /// Creates a tracker for the named asset group.
    pub fn new(service: Arc<S>, group: impl Into<String>) -> Self {
        Self {
            service,
            group: group.into(),
            state: DownloadState::Unknown,
        }
    }

    /// The group this tracker downloads.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The current state, without querying anything.
    pub fn state(&self) -> &DownloadState {
        &self.state
    }

    /// Returns the current state, performing the one-off size query if none
    /// has completed yet.
    ///
    /// From `Unknown`: size `0` goes straight to `NotNeeded`, a positive
    /// size to `NeedsFetch`, and a transport failure to `Failed`. Every
    /// other state is returned as-is.
    pub async fn check_status(&mut self) -> &DownloadState {
        if self.state == DownloadState::Unknown {
            match self.service.download_size(&self.group).await {
                Ok(0) => {
                    log::debug!("Asset group '{}' already downloaded.", self.group);
                    self.state = DownloadState::NotNeeded;
                }
                Ok(size_bytes) => {
                    log::debug!(
                        "Asset group '{}' needs {size_bytes} bytes.",
                        self.group
                    );
                    self.state = DownloadState::NeedsFetch { size_bytes };
                }
                Err(err) => {
                    log::warn!("Size query for '{}' failed: {err}", self.group);
                    self.state = DownloadState::Failed {
                        reason: err.to_string(),
                    };
                }
            }
        }
        &self.state
    }

    /// Forgets any failed outcome so the next `check_status` queries again.
    ///
    /// This is the "download" button reappearing after a failure: the
    /// retry is an explicit caller action.
    pub fn reset(&mut self) {
        if matches!(self.state, DownloadState::Failed { .. }) {
            self.state = DownloadState::Unknown;
        }
    }

    /// Runs one download to completion, reporting progress as it goes.
    ///
    /// Resolves the size query first if it never ran. When a fetch is
    /// actually needed, transitions to `Fetching(0)` and drains the
    /// service's update stream: progress updates are clamped to `[0, 1]`,
    /// made monotone non-decreasing, and reported as `"Downloading: N%"`;
    /// the invocation ends on exactly one terminal update, `Ready` with
    /// `"Download Complete!"` or `Failed` with `"Download Failed!"`. A
    /// stream that closes without a terminal counts as a failure.
    ///
    /// Calling this from `Ready`/`NotNeeded` is a no-op; calling it after a
    /// failure retries the fetch.
    pub async fn begin_download(&mut self, progress: &mut dyn ProgressSink) -> &DownloadState {
        if self.state == DownloadState::Unknown {
            self.check_status().await;
        }
        match self.state {
            DownloadState::NeedsFetch { .. } | DownloadState::Failed { .. } => {}
            // Already available, or a fetch is in flight.
            _ => return &self.state,
        }

        self.state = DownloadState::Fetching { progress: 0.0 };
        let updates = self.service.download_dependencies(&self.group);
        let mut reached = 0.0_f32;

        loop {
            match updates.recv_async().await {
                Ok(TransferUpdate::Progress(p)) => {
                    reached = p.clamp(0.0, 1.0).max(reached);
                    self.state = DownloadState::Fetching { progress: reached };
                    progress.report(&format!(
                        "Downloading: {}%",
                        (reached * 100.0).round() as u32
                    ));
                }
                Ok(TransferUpdate::Complete) => {
                    self.state = DownloadState::Ready;
                    progress.report("Download Complete!");
                    break;
                }
                Ok(TransferUpdate::Failed(reason)) => {
                    log::error!("Download of '{}' failed: {reason}", self.group);
                    self.state = DownloadState::Failed { reason };
                    progress.report("Download Failed!");
                    break;
                }
                Err(_) => {
                    log::error!(
                        "Transfer stream for '{}' closed without a terminal update.",
                        self.group
                    );
                    self.state = DownloadState::Failed {
                        reason: "transfer stream closed unexpectedly".to_string(),
                    };
                    progress.report("Download Failed!");
                    break;
                }
            }
        }

        // `updates` drops here, releasing the transfer's resources on both
        // the success and failure paths.
        &self.state
    }
}
