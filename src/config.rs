// ABOUTME: Client configuration assembled from environment variables
// ABOUTME: API base path and credential snapshot directory with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

use std::path::PathBuf;

use crate::constants::env_config;

/// Runtime configuration for the client core.
///
/// Everything here has a default, so `from_env` never fails: unset variables
/// fall back to `http://localhost:8080/api` and the platform data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base path of the activity API, e.g. `http://localhost:8080/api`
    pub api_base: String,
    /// Directory holding the credential snapshot
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Build configuration from `FITTRACK_API_BASE` and `FITTRACK_DATA_DIR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base: env_config::api_base(),
            data_dir: env_config::data_dir(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
