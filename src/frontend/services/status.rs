//! Status board data.
//!
//! The board is plain local data: an optional JSON file in the application
//! data directory, with a built-in fallback when the file is missing or
//! does not parse. No probing happens here.

use crate::utils::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

const BOARD_FILE: &str = "status_board.json";

/// Health level of a single service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Operational,
    Degraded,
    Down,
    Unknown,
}

impl StatusLevel {
    /// Human-readable label shown inside the badge.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Degraded => "Degraded",
            Self::Down => "Down",
            Self::Unknown => "Unknown",
        }
    }

    /// CSS class that styles the badge for this level.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Operational => "status-operational",
            Self::Degraded => "status-degraded",
            Self::Down => "status-down",
            Self::Unknown => "status-unknown",
        }
    }
}

impl Default for StatusLevel {
    fn default() -> Self {
        Self::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    #[serde(default)]
    pub level: StatusLevel,
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBoard {
    pub services: Vec<ServiceStatus>,
}

impl StatusBoard {
    /// Gets the path to the board file.
    fn board_path() -> PathBuf {
        paths::config_file(BOARD_FILE).unwrap_or_else(|_| PathBuf::from(BOARD_FILE))
    }

    /// Loads the board from disk, falling back to the sample board.
    pub async fn load() -> Self {
        let path = Self::board_path();
        match fs::read_to_string(&path).await {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(board) => board,
                Err(e) => {
                    log::warn!("ignoring malformed board file {}: {e}", path.display());
                    Self::sample()
                }
            },
            Err(_) => Self::sample(),
        }
    }

    /// Built-in board shown when no file exists yet.
    pub fn sample() -> Self {
        let now = Utc::now();
        let service = |name: &str, level| ServiceStatus {
            name: name.to_string(),
            level,
            checked_at: now,
        };
        Self {
            services: vec![
                service("API", StatusLevel::Operational),
                service("Web", StatusLevel::Operational),
                service("Database", StatusLevel::Degraded),
                service("Mail", StatusLevel::Unknown),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels_match_levels() {
        assert_eq!(StatusLevel::Operational.label(), "Operational");
        assert_eq!(StatusLevel::Down.label(), "Down");
    }

    #[test]
    fn css_classes_are_level_specific() {
        assert_eq!(StatusLevel::Degraded.css_class(), "status-degraded");
        assert_eq!(StatusLevel::Unknown.css_class(), "status-unknown");
    }

    #[test]
    fn decodes_a_board_file() {
        let json = r#"{
            "services": [
                { "name": "API", "level": "down", "checked_at": "2026-08-01T12:00:00Z" },
                { "name": "Web", "checked_at": "2026-08-01T12:00:00Z" }
            ]
        }"#;
        let board: StatusBoard = serde_json::from_str(json).expect("board should decode");
        assert_eq!(board.services.len(), 2);
        assert_eq!(board.services[0].level, StatusLevel::Down);
        // Missing level falls back to Unknown
        assert_eq!(board.services[1].level, StatusLevel::Unknown);
    }

    #[test]
    fn sample_board_is_not_empty() {
        assert!(!StatusBoard::sample().services.is_empty());
    }
}
