//! Session file storage.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{CoderlmError, Result};

use super::SessionState;

/// Storage for the cached session descriptor.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location under a working directory.
    pub fn in_dir(root: &Path) -> Self {
        Self::new(super::default_state_path(root))
    }

    /// Get the session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the descriptor.
    ///
    /// Returns `None` when no session file exists.
    pub fn load(&self) -> Result<Option<SessionState>> {
        if !self.path.exists() {
            tracing::debug!("No session file at {:?}", self.path);
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file {:?}", self.path))?;
        let state =
            serde_json::from_str(&json).map_err(|e| CoderlmError::StateFile {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!("Loaded session file {:?}", self.path);
        Ok(Some(state))
    }

    /// Save the descriptor, creating parent directories as needed.
    pub fn save(&self, state: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write session to {:?}", self.path))?;

        tracing::debug!("Saved session {} to {:?}", state.session_id, self.path);
        Ok(())
    }

    /// Delete the descriptor file.
    ///
    /// Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove session file {:?}", self.path))?;

        tracing::debug!("Cleared session file {:?}", self.path);
        Ok(true)
    }
}
