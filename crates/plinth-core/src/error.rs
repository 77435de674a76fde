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

//! Defines the error taxonomy for asset acquisition and placement.
//!
//! Every failure here is local to the operation that produced it; nothing in
//! this crate escalates a failed download or resolution into a process-fatal
//! condition. Retry is always a fresh caller-initiated action.

use crate::asset::AssetKey;
use std::fmt;

/// An error from the remote transport: the size query or the aggregate
/// dependency fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The download-size query could not complete.
    SizeQueryFailed {
        /// The underlying transport diagnostic.
        reason: String,
    },
    /// The dependency download was interrupted or rejected.
    FetchFailed {
        /// The underlying transport diagnostic.
        reason: String,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::SizeQueryFailed { reason } => {
                write!(f, "Download size query failed: {reason}")
            }
            TransportError::FetchFailed { reason } => {
                write!(f, "Dependency download failed: {reason}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// An error resolving an individual asset key into a loaded instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The service knows no asset under this key.
    UnknownKey {
        /// The key that failed to resolve.
        key: AssetKey,
    },
    /// The key is known but the asset could not be materialized
    /// (corrupt data, dependency failure, ...).
    ResolutionFailed {
        /// The key that failed to resolve.
        key: AssetKey,
        /// The underlying resolution diagnostic.
        reason: String,
    },
}

impl ResolveError {
    /// The key the failed request was issued for.
    pub fn key(&self) -> &AssetKey {
        match self {
            ResolveError::UnknownKey { key } => key,
            ResolveError::ResolutionFailed { key, .. } => key,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownKey { key } => {
                write!(f, "No asset known for key '{key}'")
            }
            ResolveError::ResolutionFailed { key, reason } => {
                write!(f, "Failed to resolve asset '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_key_and_reason() {
        let err = ResolveError::ResolutionFailed {
            key: AssetKey::from("key_missing"),
            reason: "no such entry".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("key_missing"));
        assert!(text.contains("no such entry"));
        assert_eq!(err.key(), &AssetKey::from("key_missing"));
    }
}
