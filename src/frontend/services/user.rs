//! User configuration.

use crate::utils::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

const USER_CONFIG_FILE: &str = "user.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    pub username: String,
}

impl UserConfig {
    /// Creates a new user config with the given username.
    pub fn new(username: String) -> Self {
        Self { username }
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Gets the path to the user config file.
    fn config_path() -> PathBuf {
        paths::config_file(USER_CONFIG_FILE)
            .unwrap_or_else(|_| PathBuf::from(USER_CONFIG_FILE))
    }

    /// Saves the user config to disk.
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)
            .await
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        Ok(())
    }

    /// Loads the user config from disk, `None` when absent or unreadable.
    pub async fn load() -> Option<Self> {
        let config_path = Self::config_path();
        let json = fs::read_to_string(config_path).await.ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Deletes the user config from disk. A missing file is not an error.
    pub async fn delete() -> Result<()> {
        match fs::remove_file(Self::config_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to delete user config"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_usernames() {
        assert!(UserConfig::is_valid_username("ada"));
        assert!(UserConfig::is_valid_username("grace_hopper"));
        assert!(UserConfig::is_valid_username("user_1234567890"));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(!UserConfig::is_valid_username("ab"));
        assert!(!UserConfig::is_valid_username("a_name_that_is_way_too_long"));
        assert!(!UserConfig::is_valid_username(""));
    }

    #[test]
    fn rejects_non_ascii_and_punctuation() {
        assert!(!UserConfig::is_valid_username("has space"));
        assert!(!UserConfig::is_valid_username("dot.name"));
        assert!(!UserConfig::is_valid_username("héllo"));
    }
}
