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

//! Primitive types for the asset catalog and the load/instantiate pipeline.
//!
//! This module defines the common language for asset acquisition: opaque
//! keys, catalog descriptors, resolved instances, and per-request results.
//! It has no knowledge of how assets are fetched or spawned; those concerns
//! live behind the collaborator traits in [`crate::service`].

mod descriptor;
mod instance;
mod key;

pub use descriptor::*;
pub use instance::*;
pub use key::*;
