//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::api::DEFAULT_CATALOG_URL;

/// How many recently opened shows the home screen keeps
const RECENT_LIMIT: usize = 20;

/// A show the user opened before, for the home screen quick list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentShow {
    pub id: String,
    pub title: String,
    /// When this entry was recorded (Unix timestamp)
    #[serde(default)]
    pub opened_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default)]
    pub recent_shows: Vec<RecentShow>,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            dark_mode: true,
            recent_shows: Vec::new(),
        }
    }
}

impl AppConfig {
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("podshelf");
        fs::create_dir_all(&path).ok();
        path.push("config.json");
        path
    }

    pub fn load() -> Self {
        let path = Self::config_path();

        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(config) = serde_json::from_str(&content) {
                    return config;
                }
            }
        }

        Self::default()
    }

    pub fn save(&self) {
        let path = Self::config_path();
        if let Ok(content) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, content);
        }
    }

    /// Record a successfully opened show, most recent first
    pub fn remember_show(&mut self, id: &str, title: &str) {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        self.recent_shows.retain(|entry| entry.id != id);
        self.recent_shows.insert(
            0,
            RecentShow {
                id: id.to_string(),
                title: title.to_string(),
                opened_at: now,
            },
        );
        self.recent_shows.truncate(RECENT_LIMIT);
    }
}
