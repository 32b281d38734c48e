//! File-backed bearer token store.
//!
//! The browser frontend kept its token in local storage under a fixed key;
//! here it lives in a small TOML file so it survives process restarts.
//! Reads go through an in-memory cache and lazily fall back to the file;
//! writes go through to disk immediately.

use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
struct Credentials {
    token: String,
}

#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
    cached: Mutex<Option<String>>,
}

impl TokenStore {
    /// Open a store backed by the given file. The file need not exist yet.
    pub fn open(path: PathBuf) -> Self {
        Self {
            path,
            cached: Mutex::new(None),
        }
    }

    /// Default store location: `credentials.toml` under the project config
    /// directory.
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "evpark", "evpark").ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("credentials.toml"))
    }

    /// Store a token: updates the cache and writes through to disk.
    pub fn set(&self, token: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Credentials {
            token: token.to_string(),
        })
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, content)?;

        *self.cached.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    /// Current token, if any. Re-reads the file when the cache is empty so
    /// a token written by an earlier process is picked up.
    pub fn get(&self) -> Option<String> {
        let mut cached = self.cached.lock().unwrap();
        if cached.is_none() {
            *cached = self.read_file();
        }
        cached.clone()
    }

    /// Drop the token from memory and disk.
    pub fn clear(&self) -> Result<()> {
        *self.cached.lock().unwrap() = None;
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn read_file(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let creds: Credentials = toml::from_str(&content).ok()?;
        Some(creds.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");

        let store = TokenStore::open(path.clone());
        store.set("tok-abc").unwrap();
        assert_eq!(store.get(), Some("tok-abc".to_string()));

        // A fresh store instance re-reads the file lazily.
        let fresh = TokenStore::open(path);
        assert_eq!(fresh.get(), Some("tok-abc".to_string()));
    }

    #[test]
    fn test_clear_removes_memory_and_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");

        let store = TokenStore::open(path.clone());
        store.set("tok-abc").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
        assert!(!path.exists());

        let fresh = TokenStore::open(path);
        assert_eq!(fresh.get(), None);
    }

    #[test]
    fn test_missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::open(dir.path().join("never-written.toml"));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_corrupt_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "not = valid = toml").unwrap();

        let store = TokenStore::open(path);
        assert_eq!(store.get(), None);
    }
}
