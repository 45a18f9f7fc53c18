use crate::config::AdminApiConfig;
use crate::error::{PluginError, Result};
use crate::infrastructure::trxps_api::error_from_response;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Body of the `ship` action: ships `quantity` units of one order line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipItemRequest {
    pub item_id: Option<Uuid>,
    pub version_id: Option<Uuid>,
    pub quantity: Option<u32>,
}

/// Body of the `ship/total` action: ships every remaining item of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipOrderRequest {
    pub order_id: Option<Uuid>,
}

/// Client for the plugin's shipping actions on the host admin API.
pub struct ShippingService {
    base_url: String,
    api_base_path: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl ShippingService {
    /// Creates a new `ShippingService`.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, API path and optional bearer token of the admin API.
    pub fn new(config: &AdminApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_base_path: config.api_base_path.trim_matches('/').to_string(),
            token: config.token.clone(),
            client,
        })
    }

    pub fn api_base_path(&self) -> &str {
        &self.api_base_path
    }

    pub async fn ship(&self, request: &ShipItemRequest) -> Result<Value> {
        self.post("ship", request).await
    }

    pub async fn total(&self, request: &ShipOrderRequest) -> Result<Value> {
        self.post("ship/total", request).await
    }

    fn action_url(&self, action: &str) -> String {
        format!(
            "{}/api/_action/{}/{}",
            self.base_url, self.api_base_path, action
        )
    }

    async fn post<B: Serialize>(&self, action: &str, body: &B) -> Result<Value> {
        let url = self.action_url(action);
        debug!(%url, "Calling shipping action");

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(PluginError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_urls() {
        let config = AdminApiConfig {
            base_url: "https://shop.example/".to_string(),
            api_base_path: "/trxps/".to_string(),
            token: None,
        };
        let service = ShippingService::new(&config).unwrap();

        assert_eq!(service.api_base_path(), "trxps");
        assert_eq!(
            service.action_url("ship/total"),
            "https://shop.example/api/_action/trxps/ship/total"
        );
    }

    #[test]
    fn test_default_bodies_send_nulls() {
        assert_eq!(
            serde_json::to_value(ShipItemRequest::default()).unwrap(),
            json!({ "itemId": null, "versionId": null, "quantity": null })
        );
        assert_eq!(
            serde_json::to_value(ShipOrderRequest::default()).unwrap(),
            json!({ "orderId": null })
        );
    }
}
