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

//! Discrete press-start events and the edge detection that produces them.

use crate::math::Vec2;

/// One discrete press-start at a screen coordinate.
///
/// Ephemeral: consumed by the placement controller the moment it arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementEvent {
    /// The 2D screen coordinate of the press.
    pub screen: Vec2,
    /// Milliseconds since an arbitrary epoch; diagnostic only.
    pub timestamp_ms: u64,
}

/// A polled reading from one input source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Whether the source is currently pressed.
    pub pressed: bool,
    /// The source's current screen position.
    pub position: Vec2,
}

/// Turns per-tick polled input into at most one press-start event.
///
/// When both a touch source and a pointer source report in the same tick,
/// the touch source wins and the pointer reading is ignored entirely; the
/// pointer exists as a fallback for desktop testing.
#[derive(Debug, Default)]
pub struct InputEdge {
    touch_was_pressed: bool,
    pointer_was_pressed: bool,
}

impl InputEdge {
    /// Creates a detector with both sources released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one tick's readings; returns a press-start if one occurred.
    ///
    /// An absent source (`None`) is treated as released so a press held
    /// across a source disappearing does not retrigger when it returns.
    pub fn sample(
        &mut self,
        touch: Option<PointerSample>,
        pointer: Option<PointerSample>,
        timestamp_ms: u64,
    ) -> Option<PlacementEvent> {
        if let Some(touch) = touch {
            let started = touch.pressed && !self.touch_was_pressed;
            self.touch_was_pressed = touch.pressed;
            // Track the pointer edge even while touch is authoritative.
            self.pointer_was_pressed = pointer.map(|p| p.pressed).unwrap_or(false);
            return started.then_some(PlacementEvent {
                screen: touch.position,
                timestamp_ms,
            });
        }
        self.touch_was_pressed = false;

        if let Some(pointer) = pointer {
            let started = pointer.pressed && !self.pointer_was_pressed;
            self.pointer_was_pressed = pointer.pressed;
            return started.then_some(PlacementEvent {
                screen: pointer.position,
                timestamp_ms,
            });
        }
        self.pointer_was_pressed = false;

        None
    }
}
