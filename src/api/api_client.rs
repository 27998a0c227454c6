use crate::api::coins::parse_coins;
use crate::api::currencies::parse_currencies;
use crate::api::data_source::DataSource;
use crate::api::price_series::parse_price_series;
use crate::coin_helpers::coin::Coin;
use crate::coin_helpers::currency::Currency;
use crate::coin_helpers::price_series::{PriceSeries, PriceSeriesKind};
use crate::config_scheme::api_config::ApiConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::collections::HashMap;
use std::time::Duration;

/// HTTP client for the coin API. Requests identify themselves the way the
/// site's own frontend does, since the endpoints answer AJAX calls.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(api_config: &ApiConfig, rest_timeout_sec: u64) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(rest_timeout_sec))
            .build()
            .unwrap();

        Self {
            client,
            base_url: api_config.base_url.clone(),
        }
    }

    /// GET an endpoint relative to the base url and return the body text.
    async fn call(&self, endpoint: &str) -> Result<String, String> {
        let url = self.base_url.clone() + endpoint;

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}: {}", url, e))?
            .error_for_status()
            .map_err(|e| format!("Request failed: {}: {}", url, e))?;

        response
            .text()
            .await
            .map_err(|e| format!("Response read failed: {}: {}", url, e))
    }
}

#[async_trait]
impl DataSource for ApiClient {
    async fn coins(&self) -> Result<Vec<Coin>, String> {
        let body = self.call("coins").await?;

        parse_coins(&body)
    }

    async fn currencies(&self) -> Result<Vec<Currency>, String> {
        let body = self.call("currencies").await?;

        parse_currencies(&body)
    }

    async fn price_series(
        &self,
        slug: &str,
    ) -> Result<HashMap<PriceSeriesKind, PriceSeries>, String> {
        let body = self.call(&format!("coins/{}/prices", slug)).await?;

        parse_price_series(&body)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Download failed: {}: {}", url, e))?
            .error_for_status()
            .map_err(|e| format!("Download failed: {}: {}", url, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Download read failed: {}: {}", url, e))?;

        Ok(bytes.to_vec())
    }
}
