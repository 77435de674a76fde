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

//! The placement controller: press events in, placed instances out.
//!
//! One discrete press-start event enters, a hit test decides whether it
//! struck a tracked surface, and the active selection decides whether that
//! hit places an instance or summons the selector menu.

use crate::loader::AssetLoader;
use crate::selection::SelectionState;
use plinth_core::asset::{AssetKey, Catalog, LoadOutcome};
use plinth_core::input::PlacementEvent;
use plinth_core::math::{Quaternion, Vec3};
use plinth_core::service::{
    MenuSurface, RemoteAssetService, SceneGraph, SurfaceHitTester, ViewerPose,
};
use std::sync::Arc;

/// Tunable placement behavior.
#[derive(Debug, Clone, Copy)]
pub struct PlacementConfig {
    /// Additive world-Y offset applied to the hit position.
    pub surface_offset: f32,
    /// Whether a placed instance is re-oriented to face the viewer.
    pub face_viewer: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            surface_offset: 0.0,
            face_viewer: true,
        }
    }
}

/// The controller's observable mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No selection held; a surface press summons the menu.
    Idle,
    /// A selection is held; a surface press places it.
    Selected,
}

/// What a single press event amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum PressOutcome {
    /// A placement from an earlier press was still pending; the event was
    /// dropped.
    Ignored,
    /// The press struck no tracked surface; swallowed, not an error.
    NoHit,
    /// No selection was active, so the selector menu was shown instead.
    MenuShown,
    /// The selected asset was instantiated and handed to the scene.
    Placed {
        /// The key that was placed.
        key: AssetKey,
    },
    /// Instantiation failed; the selection was consumed regardless, so a
    /// retry starts with a fresh selection.
    PlacementFailed {
        /// The key that failed to place.
        key: AssetKey,
    },
}

/// Orchestrates selection, hit testing, and instantiation.
///
/// Owns the catalog and the selection; everything else is an injected
/// collaborator. All methods run on the one logical control thread; the
/// `&mut self` receiver on [`handle_press`](Self::handle_press) keeps
/// invocations serialized, and an in-flight flag makes the re-entrancy
/// policy explicit: presses that arrive while an instantiate is pending are
/// ignored.
pub struct PlacementController<S, H, M, G, V> {
    catalog: Catalog,
    config: PlacementConfig,
    loader: AssetLoader<S>,
    selection: SelectionState,
    hit_tester: H,
    menu: M,
    scene: G,
    viewer: V,
    instantiate_in_flight: bool,
}

impl<S, H, M, G, V> PlacementController<S, H, M, G, V>
where
    S: RemoteAssetService,
    H: SurfaceHitTester,
    M: MenuSurface,
    G: SceneGraph,
    V: ViewerPose,
{
    /// Wires a controller to its collaborators.
    pub fn new(
        catalog: Catalog,
        config: PlacementConfig,
        service: Arc<S>,
        hit_tester: H,
        menu: M,
        scene: G,
        viewer: V,
    ) -> Self {
        Self {
            catalog,
            config,
            loader: AssetLoader::new(service),
            selection: SelectionState::new(),
            hit_tester,
            menu,
            scene,
            viewer,
            instantiate_in_flight: false,
        }
    }

    /// The catalog this controller places from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The loader, for eager prefetching after selection.
    pub fn loader(&self) -> &AssetLoader<S> {
        &self.loader
    }

    /// The currently selected key, if any.
    pub fn selection(&self) -> Option<&AssetKey> {
        self.selection.current()
    }

    /// The controller's observable mode.
    pub fn mode(&self) -> Mode {
        if self.selection.current().is_some() {
            Mode::Selected
        } else {
            Mode::Idle
        }
    }

    /// Binds a catalog-entry click: selects entry `index` and hides the
    /// selector menu.
    ///
    /// Returns the selected key, or `None` (with no state change) when the
    /// index is out of range. Overwrites any prior selection.
    pub fn select_entry(&mut self, index: usize) -> Option<&AssetKey> {
        let descriptor = self.catalog.entry(index)?;
        let key = descriptor.key.clone();
        log::debug!("Selected model: {key}");
        self.selection.select(key);
        self.menu.hide();
        self.selection.current()
    }

    /// Selects a key directly, bypassing the catalog, and hides the menu.
    pub fn select_key(&mut self, key: AssetKey) {
        log::debug!("Selected model: {key}");
        self.selection.select(key);
        self.menu.hide();
    }

    /// Handles one discrete press-start event.
    ///
    /// Miss: swallowed. Hit while idle: the menu is shown, nothing placed.
    /// Hit while selected: the selection is consumed and the asset is
    /// instantiated at the hit pose lifted by the configured surface
    /// offset; on success the instance (optionally re-oriented toward the
    /// viewer) transfers to the scene. The selection stays consumed whether
    /// instantiation succeeds or fails.
    pub async fn handle_press(&mut self, event: PlacementEvent) -> PressOutcome {
        if self.instantiate_in_flight {
            log::debug!("Press ignored: placement already in flight.");
            return PressOutcome::Ignored;
        }

        let Some(hit) = self.hit_tester.hit_test(event.screen) else {
            return PressOutcome::NoHit;
        };

        let Some(key) = self.selection.take() else {
            self.menu.show();
            return PressOutcome::MenuShown;
        };

        let spawn = hit.with_vertical_offset(self.config.surface_offset);

        self.instantiate_in_flight = true;
        let in_flight = InFlightGuard(&mut self.instantiate_in_flight);
        let result = self.loader.instantiate(&key, spawn).await;
        drop(in_flight);

        match result.outcome {
            LoadOutcome::Loaded(mut instance) => {
                if self.config.face_viewer {
                    if let Some(rotation) =
                        facing_rotation(instance.pose.position, self.viewer.viewer_position())
                    {
                        instance.pose.rotation = rotation;
                    }
                }
                log::debug!("Spawned {key} at {:?}", instance.pose.position);
                self.scene.insert(instance);
                PressOutcome::Placed { key }
            }
            LoadOutcome::Failed(_) => PressOutcome::PlacementFailed { key },
        }
    }
}

/// Resets the in-flight flag when dropped, so a press future abandoned
/// mid-await (host timeout, select) cannot leave the controller ignoring
/// every later press.
struct InFlightGuard<'a>(&'a mut bool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// The yaw-only rotation that turns an instance at `position` toward the
/// viewer at `viewer_position`.
///
/// Works in the horizontal plane: the vertical component of the
/// instance-to-viewer direction is discarded, and the instance's forward
/// axis ends up pointing away from the viewer. Returns `None` when the
/// horizontal direction is exactly zero (viewer directly above or below),
/// in which case the orientation must be left unchanged.
fn facing_rotation(position: Vec3, viewer_position: Vec3) -> Option<Quaternion> {
    let look_direction = (viewer_position - position).horizontal();
    if look_direction == Vec3::ZERO {
        return None;
    }
    Some(Quaternion::from_look_direction(
        -look_direction.normalize(),
        Vec3::Y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_core::math::EPSILON;

    #[test]
    fn test_facing_rotation_points_away_from_viewer() {
        let position = Vec3::new(1.0, 0.0, 2.0);
        let viewer = Vec3::new(4.0, 1.5, 6.0);

        let rotation = facing_rotation(position, viewer).unwrap();
        let forward = rotation.forward().horizontal();
        let toward_viewer = (viewer - position).horizontal().normalize();

        // Forward's horizontal component points away from the viewer.
        assert!(forward.dot(toward_viewer) < -1.0 + EPSILON * 100.0);
    }

    #[test]
    fn test_facing_rotation_degenerate_when_viewer_overhead() {
        let position = Vec3::new(1.0, 0.0, 2.0);
        let overhead = Vec3::new(1.0, 3.0, 2.0);
        assert_eq!(facing_rotation(position, overhead), None);
    }
}
