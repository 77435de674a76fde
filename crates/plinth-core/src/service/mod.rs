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

//! Contracts for the external collaborators the placement core talks to.
//!
//! The core is a pure orchestration layer: asset delivery, surface tracking,
//! the selector menu, the progress readout, the scene graph, and the viewer
//! pose are all behind the traits defined here. Concrete implementations
//! live with the host application; tests script them in memory.

mod collaborators;
mod remote;

pub use collaborators::*;
pub use remote::*;
