use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{UserProfile, ADMIN_ROLE, DEFAULT_ROLE};

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

/// Persisted session state: the auth token plus the cached user profile.
///
/// An empty token means unauthenticated; the token is never absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionData {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// Single-instance session store for the running client.
///
/// State is written to `session.json` on every mutation and read back with
/// [`Session::load`] at startup so a session survives a full restart. A
/// store created with [`Session::in_memory`] skips disk I/O entirely.
pub struct Session {
    data_dir: Option<PathBuf>,
    data: SessionData,
}

impl Session {
    /// Create a store persisted under `data_dir`. Call `load` to pick up
    /// state from a previous run.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Some(data_dir),
            data: SessionData::default(),
        }
    }

    /// Create a store with no backing file. Used for tests and one-shot tools.
    pub fn in_memory() -> Self {
        Self {
            data_dir: None,
            data: SessionData::default(),
        }
    }

    /// Load persisted state from disk. Returns true when a session file was
    /// found and parsed.
    pub fn load(&mut self) -> Result<bool> {
        let Some(path) = self.session_path() else {
            return Ok(false);
        };
        if !path.exists() {
            return Ok(false);
        }
        let contents = std::fs::read_to_string(&path).context("Failed to read session file")?;
        self.data = serde_json::from_str(&contents).context("Failed to parse session file")?;
        debug!(authenticated = !self.data.token.is_empty(), "Session loaded");
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        let Some(path) = self.session_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        let contents = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(path, contents).context("Failed to write session file")?;
        Ok(())
    }

    /// Replace the stored token unconditionally. Any string is accepted,
    /// including the empty string.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        self.data.token = token.into();
        self.save()
    }

    /// Clear the token. Used on logout and on session-expiry recovery.
    pub fn remove_token(&mut self) -> Result<()> {
        self.data.token.clear();
        self.save()
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    pub fn has_token(&self) -> bool {
        !self.data.token.is_empty()
    }

    /// Replace the profile wholesale. No merge, no backfill.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.data.profile = Some(profile);
        self.save()
    }

    /// Store a profile fetched from the user-info endpoint, backfilling the
    /// role to `"user"` when the server omitted or emptied it.
    pub fn store_user_info(&mut self, mut profile: UserProfile) -> Result<()> {
        if profile.role.is_empty() {
            profile.role = DEFAULT_ROLE.to_string();
        }
        self.set_profile(profile)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.data.profile.as_ref()
    }

    /// True iff the stored profile's role is `"admin"`. False when no
    /// profile has been stored.
    pub fn is_admin(&self) -> bool {
        self.data
            .profile
            .as_ref()
            .map(|p| p.role == ADMIN_ROLE)
            .unwrap_or(false)
    }

    /// Drop all state and remove the session file.
    pub fn clear(&mut self) -> Result<()> {
        self.data = SessionData::default();
        if let Some(path) = self.session_path() {
            if path.exists() {
                std::fs::remove_file(path).context("Failed to remove session file")?;
            }
        }
        Ok(())
    }

    fn session_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(SESSION_FILE))
    }
}
