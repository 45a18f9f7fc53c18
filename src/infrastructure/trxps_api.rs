use crate::config::ApiConfig;
use crate::domain::ports::MethodsApi;
use crate::domain::remote::{MethodCollection, RemoteMethod};
use crate::error::{PluginError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct MethodListResponse {
    count: usize,
    #[serde(rename = "_embedded", default)]
    embedded: EmbeddedMethods,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddedMethods {
    #[serde(default)]
    methods: Vec<RemoteMethod>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
    title: Option<String>,
}

/// Turns a non-2xx response into `PluginError::ApiError`.
pub(crate) async fn error_from_response(response: reqwest::Response) -> PluginError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(ApiErrorBody {
            detail: Some(detail),
            ..
        }) => detail,
        Ok(ApiErrorBody {
            title: Some(title), ..
        }) => title,
        _ if text.is_empty() => "Unknown error".to_string(),
        _ => text,
    };
    PluginError::ApiError { status, message }
}

/// HTTP client for the Trxps REST API.
pub struct TrxpsApiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl TrxpsApiClient {
    /// Creates a new `TrxpsApiClient`.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::ConfigError` when no API key is configured.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PluginError::ConfigError("Trxps API key is not set".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/v2/{}", self.base_url, path)
    }
}

#[async_trait]
impl MethodsApi for TrxpsApiClient {
    async fn all_active(&self) -> Result<MethodCollection> {
        let url = self.build_url("methods");
        debug!(%url, "Fetching active payment methods");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: MethodListResponse = response.json().await?;
        Ok(MethodCollection {
            count: body.count,
            methods: body.embedded.methods,
        })
    }
}
