//! `reqwest` implementation of [`CommerceApi`].

use crate::api::{CommerceApi, CATALOG_PATH, IDEMPOTENCY_HEADER, ORDERS_PATH};
use crate::catalog_actor::CatalogError;
use crate::config::StorefrontConfig;
use crate::model::{CatalogPayload, OrderId, OrderRequest, OrderResponse, Product, SubmissionId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Talks to the commerce service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCommerceApi {
    client: Client,
    base_url: String,
}

impl HttpCommerceApi {
    /// Builds a client from the configuration. Fails only if the TLS backend cannot start.
    pub fn new(config: &StorefrontConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl CommerceApi for HttpCommerceApi {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(self.url(CATALOG_PATH))
            .send()
            .await
            .map_err(|error| {
                warn!(error = %error, "catalog request failed");
                CatalogError::Transport(error.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| CatalogError::Transport(error.to_string()))?;
        let payload: CatalogPayload = serde_json::from_slice(&body)
            .map_err(|error| CatalogError::Decode(error.to_string()))?;

        debug!(count = payload.products.len(), "catalog received");
        Ok(payload.products)
    }

    #[instrument(skip(self, request, submission_id), fields(base_url = %self.base_url, %submission_id))]
    async fn create_order(
        &self,
        request: &OrderRequest,
        submission_id: SubmissionId,
    ) -> Result<OrderId, OrderError> {
        debug!(?request, "posting order");
        let response = self
            .client
            .post(self.url(ORDERS_PATH))
            .header(IDEMPOTENCY_HEADER, submission_id.to_string())
            .json(request)
            .send()
            .await
            .map_err(|error| {
                warn!(error = %error, "order request failed");
                OrderError::Transport(error.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| OrderError::Transport(error.to_string()))?;
        let decoded: OrderResponse =
            serde_json::from_slice(&body).map_err(|error| OrderError::Decode(error.to_string()))?;

        decoded.order_id().ok_or(OrderError::MissingOrderId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpCommerceApi::with_client(Client::new(), "http://localhost:8000/");
        assert_eq!(api.url(CATALOG_PATH), "http://localhost:8000/acp/catalog");
        assert_eq!(api.url(ORDERS_PATH), "http://localhost:8000/acp/orders");
    }
}
