//! Data models for the PodShelf podcast browser

use serde::{Deserialize, Serialize};

/// Static genre reference entry. The table is owned by the application
/// shell and handed to the detail view; it is never fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreRef {
    pub id: i64,
    pub title: String,
}

/// A show record as returned by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub genres: Vec<i64>,
    /// RFC 3339 timestamp of the last catalog update
    #[serde(default)]
    pub updated: String,
    /// Total episode count across all seasons; some payloads omit it
    #[serde(default)]
    pub episodes: u32,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

/// An ordered grouping of episodes within a show
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    /// Display number, not an index
    pub season: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// A single playable item within a season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    /// Display number, not an index
    pub episode: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub file: Option<EpisodeFile>,
}

/// Audio file metadata attached to an episode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodeFile {
    /// Length in seconds
    #[serde(default)]
    pub duration: f64,
}
