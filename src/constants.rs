// ABOUTME: Application-wide constants and environment-based configuration values
// ABOUTME: Weekly goal targets, storage keys, request headers, API routes, env lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! # Constants Module
//!
//! Application constants and environment variable configuration. Goal targets
//! are fixed product constants; everything network- or filesystem-facing can be
//! overridden via environment variables.

use std::env;
use std::path::PathBuf;

/// Fixed weekly goal targets the dashboard measures progress against
pub mod goals {
    /// Weekly activity-count goal
    pub const WEEKLY_ACTIVITIES: u32 = 7;

    /// Weekly duration goal in minutes
    pub const WEEKLY_DURATION_MINUTES: u32 = 420;

    /// Weekly calorie-burn goal
    pub const WEEKLY_CALORIES: u32 = 2000;

    /// Weekly distance goal in kilometers
    pub const WEEKLY_DISTANCE_KM: f64 = 50.0;
}

/// Keys under which the credential snapshot is persisted
pub mod storage_keys {
    /// Serialized user profile (JSON)
    pub const USER: &str = "user";

    /// Bearer token string
    pub const TOKEN: &str = "token";

    /// User identifier string
    pub const USER_ID: &str = "userId";
}

/// Request header names attached to authenticated API calls
pub mod headers {
    /// Identifying header carrying the session user id
    pub const USER_ID: &str = "X-User-Id";
}

/// Activity API route fragments, joined onto the configured base path
pub mod routes {
    /// List and create activities
    pub const ACTIVITIES: &str = "/activities";

    /// Activity detail with derived recommendation fields; takes the activity id
    pub const ACTIVITY_RECOMMENDATION: &str = "/recommendations/activity";
}

/// Environment-based configuration
pub mod env_config {
    use super::{env, PathBuf};

    /// Default API base path when `FITTRACK_API_BASE` is unset
    pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

    /// Get the activity API base URL from environment or default
    #[must_use]
    pub fn api_base() -> String {
        env::var("FITTRACK_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into())
    }

    /// Get the credential snapshot directory from environment or the
    /// platform data directory
    #[must_use]
    pub fn data_dir() -> PathBuf {
        env::var("FITTRACK_DATA_DIR").map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("fittrack")
            },
            PathBuf::from,
        )
    }

    /// Get the log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }
}
