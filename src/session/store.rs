// ABOUTME: Durable credential snapshot store over a client-local directory
// ABOUTME: Three independent entries (user, token, userId), one file per key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::storage_keys;
use crate::errors::PersistenceError;
use crate::models::{Credential, UserProfile};

/// Durable mirror of the current [`Credential`].
///
/// Entries live as one file per storage key under a data directory so the
/// snapshot survives process restarts. The store is deliberately forgiving:
/// reads never fail (anything missing or unparseable yields the
/// unauthenticated credential) and callers are expected to treat write
/// failures as a logged side effect, not a hard error.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at `dir`. The directory is created lazily on the
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the snapshot entries
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `credential` under the three storage keys.
    ///
    /// Absent fields remove their entry, so writing the unauthenticated
    /// credential is equivalent to [`clear`](Self::clear).
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the medium is missing or not
    /// writable. The session layer logs and suppresses this; the in-memory
    /// credential stays authoritative for the process lifetime.
    pub fn write(&self, credential: &Credential) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir).map_err(|source| PersistenceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let user_json = credential
            .user
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|source| PersistenceError::Serialization {
                key: storage_keys::USER,
                source,
            })?;

        self.put(storage_keys::USER, user_json.as_deref())?;
        self.put(storage_keys::TOKEN, credential.token.as_deref())?;
        self.put(storage_keys::USER_ID, credential.user_id.as_deref())?;
        debug!(dir = %self.dir.display(), "credential snapshot written");
        Ok(())
    }

    /// Reconstruct a credential from the snapshot.
    ///
    /// Total: a missing or unparseable `token` or `user` entry yields the
    /// unauthenticated credential. A missing `userId` alone is tolerated as an
    /// absent id, matching the incomplete-payload case the synchronizer can
    /// legitimately persist.
    #[must_use]
    pub fn read(&self) -> Credential {
        let Some(token) = self.get(storage_keys::TOKEN) else {
            return Credential::unauthenticated();
        };
        let Some(user) = self
            .get(storage_keys::USER)
            .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok())
        else {
            return Credential::unauthenticated();
        };

        Credential {
            token: Some(token),
            user: Some(user),
            user_id: self.get(storage_keys::USER_ID),
        }
    }

    /// Remove all three entries.
    ///
    /// Best effort per key and not atomic: every key is attempted even when an
    /// earlier removal fails, so an interrupted clear never blocks logical
    /// logout. The first failure is reported after all attempts.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] for the first entry that could not be
    /// removed.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        let mut first_failure = None;
        for key in [
            storage_keys::USER,
            storage_keys::TOKEN,
            storage_keys::USER_ID,
        ] {
            if let Err(err) = self.remove(key) {
                first_failure.get_or_insert(err);
            }
        }
        first_failure.map_or(Ok(()), Err)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn put(&self, key: &'static str, value: Option<&str>) -> Result<(), PersistenceError> {
        let path = self.entry_path(key);
        match value {
            Some(raw) => {
                fs::write(&path, raw).map_err(|source| PersistenceError::Io { path, source })
            }
            None => self.remove(key),
        }
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistenceError::Io { path, source }),
        }
    }
}
