// ABOUTME: Session layer: durable credential snapshot store and session synchronizer
// ABOUTME: Bridges external auth results into persisted and in-memory credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Session and credential management.
//!
//! [`CredentialStore`] is the durable mirror of the current credential;
//! [`SessionManager`] is its sole writer and the owner of the in-memory,
//! application-wide credential. Everything else in the crate reads the
//! credential through [`SessionManager::current`].

/// Durable key-value snapshot of the session credential
pub mod store;

/// Synchronizer reacting to external authentication results
pub mod sync;

pub use store::CredentialStore;
pub use sync::SessionManager;
