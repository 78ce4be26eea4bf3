use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::{debug, error, info};

use crate::{config::Config, errors::TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A request relative to the versioned API root, e.g. `/123/message_templates`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: JsonValue) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: JsonValue,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes one request. Non-2xx replies come back as `Err` carrying the
    /// remote error payload; nothing is retried.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    api_root: String,
    access_token: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|_| TransportError::network("Failed to create HTTP client"))?;

        let api_root = config.api_root();

        info!(api_root = %api_root, "WhatsApp Business Management transport initialized");

        Ok(Self {
            http_client,
            api_root,
            access_token: config.whatsapp_access_token.clone(),
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.api_root, request.path);

        debug!(method = ?request.method, url = %url, "Sending WhatsApp API request");

        let mut builder = match request.method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => self.http_client.post(&url),
        }
        .bearer_auth(&self.access_token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(url = %url, error = %e, "WhatsApp API request could not be sent");
            TransportError::network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::decode(status.as_u16(), e.to_string()))?;

        if !status.is_success() {
            let err = TransportError::from_response(status.as_u16(), &text);
            let payload = err.payload.clone().unwrap_or(JsonValue::Null);
            error!(
                url = %url,
                status = status.as_u16(),
                payload = %payload,
                "WhatsApp API returned an error"
            );
            return Err(err);
        }

        let body = if text.trim().is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_str(&text).map_err(|e| {
                TransportError::decode(
                    status.as_u16(),
                    format!("Failed to parse response JSON: {}", e),
                )
            })?
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}
