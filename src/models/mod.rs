// ABOUTME: Core data models shared across the client core
// ABOUTME: Activity records, submission payloads, user profile, session credential
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Shared domain models.
//!
//! All wire-facing types use the server's camelCase field names via serde
//! renames; Rust code sees snake_case throughout.

/// Activity record, type, metrics, and submission payloads
pub mod activity;

/// User profile and session credential
pub mod user;

pub use activity::{
    ActivityDetail, ActivityDraft, ActivityRecord, ActivitySubmission, ActivityType,
    AdditionalMetrics, SubmissionMetrics,
};
pub use user::{Credential, UserProfile};
