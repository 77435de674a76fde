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

use async_trait::async_trait;
use plinth_core::asset::{AssetInstance, AssetKey};
use plinth_core::error::{ResolveError, TransportError};
use plinth_core::event::EventBus;
use plinth_core::math::Pose;
use plinth_core::service::{ProgressSink, RemoteAssetService, TransferUpdate};
use plinth_placement::{DownloadState, DownloadTracker};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// --- Test Setup: scripted transport and a recording progress sink ---

/// A transport whose size queries and transfer streams are scripted per
/// invocation, front to back.
struct ScriptedTransport {
    sizes: Mutex<VecDeque<Result<u64, TransportError>>>,
    transfers: Mutex<VecDeque<Vec<TransferUpdate>>>,
}

impl ScriptedTransport {
    fn new(
        sizes: Vec<Result<u64, TransportError>>,
        transfers: Vec<Vec<TransferUpdate>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            sizes: Mutex::new(sizes.into()),
            transfers: Mutex::new(transfers.into()),
        })
    }
}

#[async_trait]
impl RemoteAssetService for ScriptedTransport {
    async fn download_size(&self, _group: &str) -> Result<u64, TransportError> {
        self.sizes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted size query")
    }

    fn download_dependencies(&self, _group: &str) -> flume::Receiver<TransferUpdate> {
        let bus = EventBus::new();
        let script = self.transfers.lock().unwrap().pop_front().unwrap_or_default();
        for update in script {
            bus.publish(update);
        }
        // Consuming the bus closes the stream after the scripted updates.
        bus.into_receiver()
    }

    async fn load(&self, key: &AssetKey) -> Result<AssetInstance, ResolveError> {
        Err(ResolveError::UnknownKey { key: key.clone() })
    }

    async fn instantiate(
        &self,
        key: &AssetKey,
        _pose: Pose,
    ) -> Result<AssetInstance, ResolveError> {
        Err(ResolveError::UnknownKey { key: key.clone() })
    }
}

#[derive(Default)]
struct TextLog(Vec<String>);

impl ProgressSink for TextLog {
    fn report(&mut self, text: &str) {
        self.0.push(text.to_string());
    }
}

// ---

#[test]
fn test_zero_size_short_circuits_to_not_needed() {
    let transport = ScriptedTransport::new(vec![Ok(0)], vec![]);
    let mut tracker = DownloadTracker::new(transport, "Models");
    let mut log = TextLog::default();

    assert_eq!(
        pollster::block_on(tracker.check_status()),
        &DownloadState::NotNeeded
    );

    // NotNeeded is terminal: begin_download never enters Fetching and
    // reports nothing.
    let state = pollster::block_on(tracker.begin_download(&mut log));
    assert_eq!(state, &DownloadState::NotNeeded);
    assert!(log.0.is_empty());
}

#[test]
fn test_positive_size_reports_needs_fetch() {
    let transport = ScriptedTransport::new(vec![Ok(4096)], vec![]);
    let mut tracker = DownloadTracker::new(transport, "Models");

    assert_eq!(
        pollster::block_on(tracker.check_status()),
        &DownloadState::NeedsFetch { size_bytes: 4096 }
    );
    // The query ran once; a second check returns the cached answer.
    assert_eq!(
        pollster::block_on(tracker.check_status()),
        &DownloadState::NeedsFetch { size_bytes: 4096 }
    );
}

#[test]
fn test_progress_string_sequence_then_complete() {
    let transport = ScriptedTransport::new(
        vec![Ok(1024)],
        vec![vec![
            TransferUpdate::Progress(0.0),
            TransferUpdate::Progress(0.3),
            TransferUpdate::Progress(0.7),
            TransferUpdate::Progress(1.0),
            TransferUpdate::Complete,
        ]],
    );
    let mut tracker = DownloadTracker::new(transport, "Models");
    let mut log = TextLog::default();

    let state = pollster::block_on(tracker.begin_download(&mut log));
    assert_eq!(state, &DownloadState::Ready);
    assert_eq!(
        log.0,
        vec![
            "Downloading: 0%",
            "Downloading: 30%",
            "Downloading: 70%",
            "Downloading: 100%",
            "Download Complete!",
        ]
    );
}

#[test]
fn test_progress_is_clamped_and_monotone() {
    let transport = ScriptedTransport::new(
        vec![Ok(1024)],
        vec![vec![
            TransferUpdate::Progress(0.5),
            TransferUpdate::Progress(0.3),
            TransferUpdate::Progress(1.5),
            TransferUpdate::Complete,
        ]],
    );
    let mut tracker = DownloadTracker::new(transport, "Models");
    let mut log = TextLog::default();

    pollster::block_on(tracker.begin_download(&mut log));
    assert_eq!(
        log.0,
        vec![
            "Downloading: 50%",
            "Downloading: 50%",
            "Downloading: 100%",
            "Download Complete!",
        ]
    );
}

#[test]
fn test_transport_failure_then_caller_retry_succeeds() {
    let transport = ScriptedTransport::new(
        vec![Ok(1024)],
        vec![
            vec![
                TransferUpdate::Progress(0.2),
                TransferUpdate::Failed("link down".to_string()),
            ],
            vec![TransferUpdate::Progress(1.0), TransferUpdate::Complete],
        ],
    );
    let mut tracker = DownloadTracker::new(transport, "Models");
    let mut log = TextLog::default();

    let state = pollster::block_on(tracker.begin_download(&mut log));
    assert_eq!(
        state,
        &DownloadState::Failed {
            reason: "link down".to_string()
        }
    );
    assert_eq!(log.0, vec!["Downloading: 20%", "Download Failed!"]);

    // No automatic retry happened; re-invoking is the caller's fresh action.
    let mut log = TextLog::default();
    let state = pollster::block_on(tracker.begin_download(&mut log));
    assert_eq!(state, &DownloadState::Ready);
    assert_eq!(log.0, vec!["Downloading: 100%", "Download Complete!"]);
}

#[test]
fn test_stream_closing_without_terminal_is_a_failure() {
    let transport = ScriptedTransport::new(
        vec![Ok(1024)],
        vec![vec![TransferUpdate::Progress(0.4)]],
    );
    let mut tracker = DownloadTracker::new(transport, "Models");
    let mut log = TextLog::default();

    let state = pollster::block_on(tracker.begin_download(&mut log));
    assert!(matches!(state, DownloadState::Failed { .. }));
    assert_eq!(log.0, vec!["Downloading: 40%", "Download Failed!"]);
}

#[test]
fn test_size_query_failure_is_retryable_after_reset() {
    let transport = ScriptedTransport::new(
        vec![
            Err(TransportError::SizeQueryFailed {
                reason: "offline".to_string(),
            }),
            Ok(0),
        ],
        vec![],
    );
    let mut tracker = DownloadTracker::new(transport, "Models");

    assert!(matches!(
        pollster::block_on(tracker.check_status()),
        DownloadState::Failed { .. }
    ));

    tracker.reset();
    assert_eq!(tracker.state(), &DownloadState::Unknown);
    assert_eq!(
        pollster::block_on(tracker.check_status()),
        &DownloadState::NotNeeded
    );
}
