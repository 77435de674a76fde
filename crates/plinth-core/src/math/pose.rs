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

//! A rigid transform pairing a position with an orientation.

use serde::{Deserialize, Serialize};

use super::{Quaternion, Vec3};

/// A position and orientation in world space.
///
/// Surface hits are reported as poses, and spawn transforms are poses
/// derived from them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// The world-space position.
    pub position: Vec3,
    /// The world-space orientation.
    pub rotation: Quaternion,
}

impl Pose {
    /// The pose at the origin with no rotation.
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quaternion::IDENTITY,
    };

    /// Creates a pose from a position and rotation.
    #[inline]
    pub const fn new(position: Vec3, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }

    /// Returns this pose translated upward along world Y by `offset`.
    ///
    /// Placement applies the configured surface offset this way, additively
    /// on top of the hit position.
    #[inline]
    pub fn with_vertical_offset(&self, offset: f32) -> Self {
        Self {
            position: self.position + Vec3::Y * offset,
            rotation: self.rotation,
        }
    }
}
