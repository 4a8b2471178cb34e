//! Show detail view state and presentation helpers

use crate::models::{Episode, Season, Show};

/// Longest episode blurb shown in a list row before truncation
const BLURB_CHARS: usize = 120;

/// What the detail view is presenting. Exactly one variant is active at a
/// time; there is no partial render.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowState {
    Loading,
    Error(String),
    /// The catalog answered but had no record for the id
    NotFound,
    Loaded(Show),
}

/// One open show. A fresh view is created on every identifier change,
/// which is also what resets the season selection back to the first tab.
#[derive(Debug)]
pub struct DetailView {
    pub show_id: String,
    pub state: ShowState,
    pub selected_season: usize,
}

impl DetailView {
    pub fn open(show_id: &str) -> Self {
        Self {
            show_id: show_id.to_string(),
            state: ShowState::Loading,
            selected_season: 0,
        }
    }

    /// Apply a finished fetch. Results tagged with another identifier are
    /// stale (the user navigated on while the request was in flight) and
    /// must not touch current state; the return value says whether the
    /// result was applied.
    pub fn finish(&mut self, show_id: &str, result: Result<Option<Show>, String>) -> bool {
        if show_id != self.show_id {
            return false;
        }
        self.state = match result {
            Ok(Some(show)) => ShowState::Loaded(show),
            Ok(None) => ShowState::NotFound,
            Err(message) => ShowState::Error(message),
        };
        true
    }

    /// Season tab click. No fetch happens; the data is already loaded.
    pub fn select_season(&mut self, index: usize) {
        self.selected_season = index;
    }

    pub fn loading(&self) -> bool {
        matches!(self.state, ShowState::Loading)
    }
}

/// Season at the selected index. An out-of-range selection or a show with
/// no seasons renders the same as an empty season.
pub fn current_season(show: &Show, selected: usize) -> Option<&Season> {
    show.seasons.get(selected)
}

fn non_empty(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Season artwork, falling back to the show cover
pub fn season_artwork<'a>(season: &'a Season, show: &'a Show) -> Option<&'a str> {
    season
        .image
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&show.image))
}

/// Episode artwork, falling back to the season and then the show cover
pub fn episode_artwork<'a>(
    episode: &'a Episode,
    season: &'a Season,
    show: &'a Show,
) -> Option<&'a str> {
    episode
        .image
        .as_deref()
        .and_then(non_empty)
        .or_else(|| season_artwork(season, show))
}

/// Header title for a season: its own title, or "Season N"
pub fn season_heading(season: &Season) -> String {
    match season.title.as_deref().and_then(non_empty) {
        Some(title) => title.to_string(),
        None => format!("Season {}", season.season),
    }
}

/// Cut an episode blurb to at most 120 characters, appending "..." only
/// when something was actually cut
pub fn truncate_blurb(text: &str) -> String {
    if text.chars().count() <= BLURB_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(BLURB_CHARS).collect();
    format!("{}...", cut)
}

/// Whole-minute duration from seconds, rounded
pub fn format_minutes(seconds: f64) -> String {
    format!("{} min", (seconds / 60.0).round() as i64)
}

/// Long-form date for the show header, e.g. "November 3, 2022"
pub fn format_updated(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Short date for episode rows; keeps the raw string when it is not a
/// timestamp the catalog normally emits
pub fn format_episode_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
