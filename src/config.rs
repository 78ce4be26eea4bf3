use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

pub const DEFAULT_API_VERSION: &str = "v23.0";
pub const DEFAULT_API_BASE_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub whatsapp_access_token: String,

    #[serde(default)]
    pub whatsapp_business_account_id: Option<String>,

    #[serde(default = "default_api_version")]
    pub whatsapp_api_version: String,

    #[serde(default = "default_api_base_url")]
    pub whatsapp_api_base_url: String,

    #[serde(default = "default_http_timeout_seconds")]
    pub http_timeout_seconds: u64,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout_seconds() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;

        if config.whatsapp_access_token.trim().is_empty() {
            return Err(anyhow!("WHATSAPP_ACCESS_TOKEN must not be empty"));
        }

        Ok(config)
    }

    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            whatsapp_access_token: access_token.into(),
            whatsapp_business_account_id: None,
            whatsapp_api_version: default_api_version(),
            whatsapp_api_base_url: default_api_base_url(),
            http_timeout_seconds: default_http_timeout_seconds(),
        }
    }

    pub fn with_business_account_id(mut self, waba_id: impl Into<String>) -> Self {
        self.whatsapp_business_account_id = Some(waba_id.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.whatsapp_api_version = api_version.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.whatsapp_api_base_url = base_url.into();
        self
    }

    /// Versioned root every request path is appended to, e.g.
    /// `https://graph.facebook.com/v23.0`.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.whatsapp_api_base_url.trim_end_matches('/'),
            self.whatsapp_api_version.trim_matches('/')
        )
    }
}
