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

use crate::asset::AssetInstance;
use crate::math::{Pose, Vec2, Vec3};

/// Converts a 2D screen coordinate into a pose on a detected surface.
///
/// Implemented by the tracked-surface collaborator. Returns the
/// first/closest valid hit constrained to the interior of a detected planar
/// region, or `None` when the coordinate strikes no surface. Pure query; a
/// miss is not an error.
pub trait SurfaceHitTester {
    /// The hit pose for `point`, if any surface was struck.
    fn hit_test(&self, point: Vec2) -> Option<Pose>;
}

/// The radial selector menu, shown and hidden by the placement controller.
///
/// The core owns none of the menu's rendering state; fade animation and
/// circular layout are the collaborator's business.
pub trait MenuSurface {
    /// Requests the selector become visible.
    fn show(&mut self);
    /// Requests the selector become hidden.
    fn hide(&mut self);
}

/// Receives plain-text download progress for display.
pub trait ProgressSink {
    /// Reports one progress line, e.g. `"Downloading: 30%"`.
    fn report(&mut self, text: &str);
}

/// The scene graph that takes ownership of spawned instances.
///
/// Once inserted, the core tracks the instance's lifetime no further.
pub trait SceneGraph {
    /// Transfers a spawned instance into the scene.
    fn insert(&mut self, instance: AssetInstance);
}

/// Reports where the viewer (camera) currently is.
///
/// Consulted by the camera-facing override after a successful placement.
pub trait ViewerPose {
    /// The viewer's world-space position.
    fn viewer_position(&self) -> Vec3;
}
