// ABOUTME: Main library entry point for the FitTrack client core
// ABOUTME: Session/credential synchronization, activity API client, and dashboard aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

#![deny(unsafe_code)]

//! # FitTrack Client Core
//!
//! The non-visual core of the FitTrack fitness dashboard: everything the
//! presentation layer needs that is not layout or styling.
//!
//! Three pieces carry the actual logic:
//!
//! - [`session`] reconciles externally delivered authentication results with a
//!   durable credential snapshot and the in-memory session credential.
//! - [`client`] is the boundary to the activity API: it attaches the session
//!   credential to every request and maps HTTP failures onto [`errors::ApiError`].
//! - [`stats`] turns a raw activity list into the aggregated dashboard view
//!   (totals, per-type breakdown, weekly goal progress, recent activities) as a
//!   pure recomputation on every input change.
//!
//! Authentication itself (token issuance, refresh) is owned by an external
//! identity provider; this crate only consumes its results.

/// Activity API client and the repository trait it implements
pub mod client;

/// Client configuration assembled from environment variables
pub mod config;

/// Application constants: goals, storage keys, headers, routes, env config
pub mod constants;

/// Error taxonomy for API and persistence failures
pub mod errors;

/// Structured logging setup over `tracing`
pub mod logging;

/// Core data models (activities, credentials, user profile)
pub mod models;

/// Credential snapshot store and session synchronizer
pub mod session;

/// Dashboard aggregation engine
pub mod stats;

pub use client::{ActivityRepository, ApiClient};
pub use config::ClientConfig;
pub use errors::{ApiError, PersistenceError};
pub use models::{
    ActivityDetail, ActivityDraft, ActivityRecord, ActivityType, AdditionalMetrics, Credential,
    UserProfile,
};
pub use session::{CredentialStore, SessionManager};
pub use stats::{DashboardStats, GoalConstants};
