// ABOUTME: Session synchronizer reconciling external auth results with client state
// ABOUTME: Sole writer of the in-memory credential; sequences compute, persist, publish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

use std::sync::RwLock;

use tracing::{debug, info, warn};

use crate::models::{Credential, UserProfile};
use crate::session::store::CredentialStore;

/// Bridges externally delivered authentication results into the durable
/// credential and the in-memory, application-wide credential.
///
/// Constructed at process start by hydrating from the snapshot store; owns the
/// only mutable copy of the credential. All other components are read-only
/// consumers via [`current`](Self::current).
///
/// `on_auth_result` may fire repeatedly (token refresh): each invocation fully
/// supersedes the previous credential, last call wins.
#[derive(Debug)]
pub struct SessionManager {
    store: CredentialStore,
    credential: RwLock<Credential>,
}

impl SessionManager {
    /// Create a manager hydrated from `store`.
    #[must_use]
    pub fn new(store: CredentialStore) -> Self {
        let credential = store.read();
        if credential.is_authenticated() {
            info!(
                user_id = credential.user_id.as_deref().unwrap_or("<absent>"),
                "session restored from credential snapshot"
            );
        } else {
            debug!("no credential snapshot; starting unauthenticated");
        }
        Self {
            store,
            credential: RwLock::new(credential),
        }
    }

    /// React to an authentication result from the external identity source.
    ///
    /// Sequenced as compute, persist, publish: the next credential is built
    /// purely via [`Credential::from_auth`], written to the snapshot store
    /// (failure logged and suppressed), then published in memory. Calling
    /// again with the same token and payload is a no-op in effect.
    ///
    /// A payload without a subject still yields a credential; the absent user
    /// id is surfaced as a warning, not an error.
    pub fn on_auth_result(&self, token: &str, profile: UserProfile) {
        if token.is_empty() {
            debug!("ignoring auth result with empty token");
            return;
        }

        let next = Credential::from_auth(token, profile);
        if next.user_id.is_none() {
            warn!("auth payload carried no subject identifier; user id left absent");
        }

        if let Err(err) = self.store.write(&next) {
            warn!(
                error = %err,
                "credential snapshot write failed; in-memory credential remains authoritative"
            );
        }

        self.publish(next);
        info!("session credential updated from auth result");
    }

    /// Erase the session: clear the snapshot store and reset the in-memory
    /// credential to unauthenticated.
    ///
    /// Store failures are logged and never block logical logout.
    pub fn logout(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "credential snapshot clear failed; logging out anyway");
        }
        self.publish(Credential::unauthenticated());
        info!("session logged out");
    }

    /// Snapshot of the current credential for read-only consumers
    #[must_use]
    pub fn current(&self) -> Credential {
        match self.credential.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn publish(&self, next: Credential) {
        match self.credential.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}
