//! カタログAPIクライアント（reqwest）

use crate::config::Config;
use crate::error::{Result, StorefrontError};
use std::time::Duration;
use storefront_common::{
    classify_status, parse_categories, parse_product, parse_products, Catalog, CatalogEndpoints,
    Error, Product,
};

pub struct CatalogClient {
    http: reqwest::Client,
    endpoints: CatalogEndpoints,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorefrontError::ClientInit(e.to_string()))?;

        Ok(Self {
            http,
            endpoints: CatalogEndpoints::new(base_url),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_seconds))
    }

    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    /// GETしてボディを文字列で返す
    async fn get_text(&self, url: &str, product_id: Option<u64>) -> storefront_common::Result<String> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        classify_status(response.status().as_u16(), product_id)?;

        response.text().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Network(format!("timeout of {}ms exceeded", self.timeout.as_millis()))
        } else {
            Error::Network(e.to_string())
        }
    }
}

impl Catalog for CatalogClient {
    async fn list_products(&self) -> storefront_common::Result<Vec<Product>> {
        let body = self.get_text(&self.endpoints.products(), None).await?;
        parse_products(&body)
    }

    async fn get_product(&self, id: u64) -> storefront_common::Result<Product> {
        let body = self.get_text(&self.endpoints.product(id), Some(id)).await?;
        parse_product(id, &body)
    }

    async fn list_categories(&self) -> storefront_common::Result<Vec<String>> {
        let body = self.get_text(&self.endpoints.categories(), None).await?;
        parse_categories(&body)
    }
}
