// ABOUTME: Shared test utilities for building activity records and profiles
// ABOUTME: Keeps record construction out of individual test bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack
#![allow(dead_code, clippy::unwrap_used, missing_docs)]

use fittrack::models::{ActivityRecord, ActivityType, AdditionalMetrics, UserProfile};

/// Build a record with the fields the aggregation engine reads.
pub fn record(
    id: &str,
    activity_type: ActivityType,
    duration: Option<u32>,
    calories: Option<u32>,
    distance: Option<f64>,
) -> ActivityRecord {
    ActivityRecord {
        id: id.to_owned(),
        user_id: None,
        activity_type,
        duration,
        calories_burned: calories,
        start_time: None,
        additional_metrics: distance.map(|d| AdditionalMetrics {
            distance: Some(d),
            ..AdditionalMetrics::default()
        }),
        created_at: None,
        updated_at: None,
    }
}

/// Profile with a subject and display name.
pub fn profile(sub: &str, name: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({"sub": sub, "name": name})).unwrap()
}
