//! Podcast catalog API client

use std::time::Duration;
use thiserror::Error;

use crate::models::Show;

/// Public catalog endpoint used when the config has no override
pub const DEFAULT_CATALOG_URL: &str = "https://podcast-api.netlify.app";

/// Failures surfaced by a catalog fetch. An unknown show id is not a
/// failure; `get_show` reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Non-success status from the catalog
    #[error("HTTP {0}")]
    Http(u16),
    /// Connect or read level failure
    #[error("{0}")]
    Network(String),
    /// Body was not a decodable show payload
    #[error("{0}")]
    Parse(String),
}

pub struct CatalogClient {
    base_url: String,
    agent: ureq::Agent,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(60)))
            .build()
            .new_agent();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    fn show_url(&self, show_id: &str) -> String {
        format!("{}/id/{}", self.base_url, show_id)
    }

    /// Fetch one show by identifier. No retries; the caller decides what a
    /// failure means for the view.
    pub fn get_show(&self, show_id: &str) -> Result<Option<Show>, CatalogError> {
        let url = self.show_url(show_id);

        match self.agent.get(&url).call() {
            Ok(mut response) => {
                let body = response
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| CatalogError::Network(e.to_string()))?;
                parse_show_body(&body)
            }
            Err(ureq::Error::StatusCode(code)) => Err(CatalogError::Http(code)),
            Err(e) => Err(CatalogError::Network(e.to_string())),
        }
    }
}

/// Decode a catalog response body. A success status with `null` or an
/// empty body is how the catalog reports an unknown show id.
pub fn parse_show_body(body: &str) -> Result<Option<Show>, CatalogError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }

    let show: Show =
        serde_json::from_str(trimmed).map_err(|e| CatalogError::Parse(e.to_string()))?;
    Ok(Some(show))
}
