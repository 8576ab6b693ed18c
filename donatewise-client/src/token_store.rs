//! Token persistence
//!
//! The bearer token is kept in a single plain-text file so a restarted
//! client can resume the session.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ClientResult;

/// File-backed token store
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store named `filename` inside `base_path`
    pub fn in_dir(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self::new(base_path.into().join(filename))
    }

    /// Make sure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn save(&self, token: &str) -> ClientResult<()> {
        self.ensure_dir()?;
        fs::write(&self.path, token)?;
        Ok(())
    }

    /// Stored token, `None` when there is no file or it is blank
    pub fn load(&self) -> ClientResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let token = raw.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
