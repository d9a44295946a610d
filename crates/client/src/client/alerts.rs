//! Alert-related API methods for [`CirconusClient`].
//!
//! # What this module handles:
//! - Fetching a single alert
//! - Listing alerts
//! - Searching/filtering alerts
//!
//! # What this module does NOT handle:
//! - Low-level alert endpoint HTTP calls (in [`crate::endpoints::alerts`])

use crate::client::CirconusClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alert, SearchFilter, SearchQuery};

impl CirconusClient {
    /// Fetch a single alert by CID.
    ///
    /// # Arguments
    /// * `cid` - Full CID (`/alert/1234`) or bare id (`1234`)
    ///
    /// # Errors
    /// `ClientError::InvalidCid` if the identifier is empty or malformed;
    /// `ClientError::ApiError` with status 404 if the alert does not exist.
    pub async fn fetch_alert(&self, cid: &str) -> Result<Alert> {
        endpoints::get_alert(
            &self.http,
            &self.base_url,
            &self.credentials,
            cid,
            self.max_retries,
        )
        .await
    }

    /// Fetch all alerts.
    pub async fn fetch_alerts(&self) -> Result<Vec<Alert>> {
        endpoints::list_alerts(&self.http, &self.base_url, &self.credentials, self.max_retries)
            .await
    }

    /// Search alerts.
    ///
    /// # Arguments
    /// * `search` - Free-text search expression
    /// * `filter` - Field filters, e.g. `f__cleared_on=null` for open alerts
    ///
    /// With neither argument this returns the same as [`Self::fetch_alerts`].
    pub async fn search_alerts(
        &self,
        search: Option<&SearchQuery>,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<Alert>> {
        endpoints::search_alerts(
            &self.http,
            &self.base_url,
            &self.credentials,
            search,
            filter,
            self.max_retries,
        )
        .await
    }
}
