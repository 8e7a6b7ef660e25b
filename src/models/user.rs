// ABOUTME: User profile and session credential models
// ABOUTME: Credential is the normalized {token, user, userId} triple for the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded identity-token payload delivered by the external identity provider.
///
/// Only the claims the client actually reads get named fields; everything else
/// is kept verbatim in `extra` so the profile survives a round trip through
/// the snapshot store without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Subject identifier assigned by the identity provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Preferred username claim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    /// Remaining claims, preserved untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Subject identifier, when the payload carried one
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }
}

/// The normalized session credential: `{token, user, userId}`.
///
/// Invariant: `token` is present if and only if `user` is present. `user_id`
/// is derived from the profile subject when not independently supplied; an
/// authenticated credential may still lack it (incomplete payload, a
/// data-quality case the session layer surfaces in logs).
///
/// A credential with no token represents "unauthenticated".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Opaque bearer token, absent when unauthenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Profile of the authenticated user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    /// Identifier sent as the `X-User-Id` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Credential {
    /// The credential representing "no auth result yet"
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Pure state transition from an external authentication result to the
    /// next credential. No side effects; persistence and publication are
    /// sequenced separately by the session synchronizer.
    #[must_use]
    pub fn from_auth(token: impl Into<String>, profile: UserProfile) -> Self {
        let user_id = profile.subject().map(str::to_owned);
        Self {
            token: Some(token.into()),
            user: Some(profile),
            user_id,
        }
    }

    /// Whether this credential carries a usable token
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
