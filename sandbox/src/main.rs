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

//! Runs the acquisition-and-placement flow end to end against scripted
//! collaborators: size query, aggregate download, selection, and a couple
//! of surface presses.

use anyhow::Result;
use async_trait::async_trait;
use plinth_core::asset::{AssetInstance, AssetKey, InstanceMetadata};
use plinth_core::error::{ResolveError, TransportError};
use plinth_core::event::EventBus;
use plinth_core::input::PlacementEvent;
use plinth_core::math::{Pose, Quaternion, Vec2, Vec3};
use plinth_core::service::{
    MenuSurface, ProgressSink, RemoteAssetService, SceneGraph, SurfaceHitTester, TransferUpdate,
    ViewerPose,
};
use plinth_placement::{CatalogConfig, DownloadTracker, PlacementConfig, PlacementController};
use std::sync::Arc;

const CATALOG_JSON: &str = r#"{
    "group": "Models",
    "entries": [
        {"display_name": "Chair", "key": "key_chair"},
        {"display_name": "Sofa", "key": "key_sofa"},
        {"display_name": "Lamp", "key": "key_lamp"}
    ]
}"#;

/// A hosted asset service scripted in memory: one sized download, then
/// resolution for the catalog's keys.
struct DemoService;

#[async_trait]
impl RemoteAssetService for DemoService {
    async fn download_size(&self, _group: &str) -> Result<u64, TransportError> {
        Ok(24 * 1024 * 1024)
    }

    fn download_dependencies(&self, group: &str) -> flume::Receiver<TransferUpdate> {
        log::info!("Starting download of group '{group}'.");
        let bus = EventBus::new();
        for step in [0.0, 0.25, 0.5, 0.75, 1.0] {
            bus.publish(TransferUpdate::Progress(step));
        }
        bus.publish(TransferUpdate::Complete);
        bus.into_receiver()
    }

    async fn load(&self, key: &AssetKey) -> Result<AssetInstance, ResolveError> {
        self.instantiate(key, Pose::IDENTITY).await
    }

    async fn instantiate(&self, key: &AssetKey, pose: Pose) -> Result<AssetInstance, ResolveError> {
        if !key.as_str().starts_with("key_") {
            return Err(ResolveError::UnknownKey { key: key.clone() });
        }
        Ok(AssetInstance {
            key: key.clone(),
            instance_id: format!("{key}#0"),
            pose,
            metadata: InstanceMetadata {
                display_name: Some(key.as_str().trim_start_matches("key_").to_string()),
                description: None,
            },
        })
    }
}

/// Every press lands on the same tabletop surface.
struct Tabletop;

impl SurfaceHitTester for Tabletop {
    fn hit_test(&self, point: Vec2) -> Option<Pose> {
        Some(Pose::new(
            Vec3::new(point.x / 100.0, 0.0, point.y / 100.0),
            Quaternion::IDENTITY,
        ))
    }
}

struct LoggingMenu;

impl MenuSurface for LoggingMenu {
    fn show(&mut self) {
        log::info!("[menu] shown");
    }
    fn hide(&mut self) {
        log::info!("[menu] hidden");
    }
}

struct PrintingScene;

impl SceneGraph for PrintingScene {
    fn insert(&mut self, instance: AssetInstance) {
        println!(
            "spawned '{}' at {:?}",
            instance.label(),
            instance.pose.position
        );
    }
}

/// Fans progress text out through an event bus instead of printing
/// directly; the owner drains and displays it.
struct BusProgress<'a>(&'a EventBus<String>);

impl ProgressSink for BusProgress<'_> {
    fn report(&mut self, text: &str) {
        self.0.publish(text.to_string());
    }
}

struct FixedViewer;

impl ViewerPose for FixedViewer {
    fn viewer_position(&self) -> Vec3 {
        Vec3::new(0.0, 1.7, -2.0)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let service = Arc::new(DemoService);
    let (group, catalog) = CatalogConfig::from_json_str(CATALOG_JSON)?.into_parts();

    pollster::block_on(async {
        let mut tracker = DownloadTracker::new(service.clone(), group);
        tracker.check_status().await;

        let progress = EventBus::new();
        tracker.begin_download(&mut BusProgress(&progress)).await;
        for line in progress.drain() {
            println!("{line}");
        }

        let config = PlacementConfig {
            surface_offset: 0.02,
            face_viewer: true,
        };
        let mut controller = PlacementController::new(
            catalog,
            config,
            service,
            Tabletop,
            LoggingMenu,
            PrintingScene,
            FixedViewer,
        );

        // A press with nothing selected summons the selector menu.
        let press = |x, y| PlacementEvent {
            screen: Vec2::new(x, y),
            timestamp_ms: 0,
        };
        let outcome = controller.handle_press(press(120.0, 80.0)).await;
        log::info!("first press: {outcome:?}");

        // Pick the chair and place it.
        controller.select_entry(0);
        let outcome = controller.handle_press(press(120.0, 80.0)).await;
        log::info!("second press: {outcome:?}");
    });

    Ok(())
}
