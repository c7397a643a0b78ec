//! Storefront HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use crate::endpoints::Endpoints;
use crate::error::{ClientError, Endpoint, Result};
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::{CartService, CatalogSource};
use crate::types::{CartOutcome, CartRequest, ItemRecord};
use crate::utils::log_sanitizer::body_excerpt;

/// Client for the storefront's static catalog and cart endpoint
pub struct StorefrontClient {
    pub(crate) client: Client,
    pub(crate) endpoints: Endpoints,
}

impl StorefrontClient {
    /// Create a client after validating the endpoint URLs.
    pub fn new(endpoints: Endpoints, request_timeout: Option<Duration>) -> Result<Self> {
        endpoints.validate()?;
        let client =
            create_http_client(request_timeout).map_err(|e| ClientError::NetworkError {
                endpoint: Endpoint::Catalog,
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl CatalogSource for StorefrontClient {
    async fn fetch_catalog(&self) -> Result<Vec<ItemRecord>> {
        let url = self
            .endpoints
            .catalog_request_url(chrono::Utc::now().timestamp_millis());

        let request = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store, no-cache")
            .header(PRAGMA, "no-cache");

        let (status, body) =
            HttpUtils::execute_request(request, Endpoint::Catalog, "GET", &url).await?;

        if !(200..300).contains(&status) {
            return Err(ClientError::HttpStatus {
                endpoint: Endpoint::Catalog,
                status,
                raw_message: body_excerpt(&body),
            });
        }

        let records: Vec<ItemRecord> = HttpUtils::parse_json(&body, Endpoint::Catalog)?;
        log::debug!("[catalog] Snapshot holds {} records", records.len());
        Ok(records)
    }
}

#[async_trait]
impl CartService for StorefrontClient {
    async fn add_to_cart(&self, request: &CartRequest) -> Result<CartOutcome> {
        let url = self.endpoints.cart_request_url(request);
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), Endpoint::Cart, "GET", &url).await?;

        // Classified on the body alone; the status is only logged.
        let outcome = CartOutcome::from_body(&body);
        log::info!(
            "[cart] {} -> {outcome:?} (HTTP {status})",
            request.tracking_code
        );
        Ok(outcome)
    }
}
