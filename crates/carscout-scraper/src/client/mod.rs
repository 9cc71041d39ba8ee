//! HTTP client for the used-car inventory search endpoint.

mod headers;

use std::time::Duration;

use carscout_core::{AppConfig, SearchFilter};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::search::ListingSource;
use crate::types::{RawListing, SearchResponse};

/// Client for the inventory search endpoint.
///
/// One request per page, no retries. Non-2xx statuses surface as
/// [`ScraperError::UnexpectedStatus`]; bodies that are not JSON or lack the
/// `data.listings` array surface as [`ScraperError::Deserialize`] and
/// [`ScraperError::UnexpectedShape`] respectively.
pub struct InventoryClient {
    client: Client,
    base_url: Url,
    search_radius: String,
}

impl InventoryClient {
    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`InventoryClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::with_base_url(
            &config.base_url,
            config.request_timeout_secs,
            &config.search_radius,
        )
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        search_radius: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .user_agent(headers::BROWSER_USER_AGENT)
            .default_headers(headers::browser_headers())
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            search_radius: search_radius.to_owned(),
        })
    }

    /// Fetches one page of listings for `filter`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure or timeout.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not valid JSON.
    /// - [`ScraperError::UnexpectedShape`] if `data.listings` is missing or
    ///   is not an array of objects.
    pub async fn fetch_listings_page(
        &self,
        filter: &SearchFilter,
        page: u32,
    ) -> Result<Vec<RawListing>, ScraperError> {
        let url = self.search_url(filter, page);
        tracing::debug!(page, url = %url, "requesting listings page");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ScraperError::Deserialize {
                context: format!("listings page {page}"),
                source: e,
            })?;
        let parsed: SearchResponse =
            serde_json::from_value(value).map_err(|e| ScraperError::UnexpectedShape {
                context: format!("listings page {page}"),
                source: e,
            })?;

        Ok(parsed.data.listings)
    }

    /// Builds the search URL for `filter` and a 1-based `page`.
    ///
    /// Fixed parameters come first in the order the site's own page sends
    /// them; `body_style` and `make` are appended only when set.
    fn search_url(&self, filter: &SearchFilter, page: u32) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("range", &self.search_radius);
            pairs.append_pair("price_max", &filter.price_max);
            pairs.append_pair("mileage_max", &filter.mileage_max);
            pairs.append_pair("used_checked", "1");
            pairs.append_pair("zip", &filter.zip);
            pairs.append_pair("year_min", &filter.year_min);
            pairs.append_pair("year_max", &filter.year_max);
            pairs.append_pair("sort", "0");
            pairs.append_pair("page", &page.to_string());
            if let Some(body_style) = &filter.body_style {
                pairs.append_pair("body_style", body_style);
            }
            if let Some(brand) = &filter.brand {
                pairs.append_pair("make", brand);
            }
        }
        url
    }
}

impl ListingSource for InventoryClient {
    async fn fetch_page(
        &self,
        filter: &SearchFilter,
        page: u32,
    ) -> Result<Vec<RawListing>, ScraperError> {
        self.fetch_listings_page(filter, page).await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
