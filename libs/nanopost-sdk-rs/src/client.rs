//! nanoPost client implementation.

use std::time::Duration;

#[cfg(feature = "client")]
use nanopost_types::{ApiReply, MailPayload, RegisterRequest, UpdateDomainRequest};
#[cfg(feature = "client")]
use serde::Serialize;

#[cfg(feature = "client")]
use crate::endpoints::{Endpoint, endpoint_url};
use crate::error::NanopostError;

/// Request timeout used for every call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the nanoPost client.
#[derive(Debug, Clone)]
pub struct NanopostConfig {
    /// Base URL of the remote API (e.g., "https://api.example.com/api")
    pub api_base: String,

    /// Total request timeout (default: 30s)
    pub timeout: Option<Duration>,
}

impl NanopostConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            timeout: None,
        }
    }
}

/// Client for the nanoPost delivery API.
pub struct NanopostClient {
    config: NanopostConfig,
    #[cfg(feature = "client")]
    http_client: reqwest::Client,
}

impl NanopostClient {
    /// Create a new client with its own connection pool.
    ///
    /// # Returns
    /// A configured `NanopostClient` or an error if the base URL is unusable.
    #[cfg(feature = "client")]
    pub fn new(config: NanopostConfig) -> Result<Self, NanopostError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;
        Self::with_http_client(config, http_client)
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The per-request timeout from the config is still applied.
    #[cfg(feature = "client")]
    pub fn with_http_client(
        config: NanopostConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, NanopostError> {
        validate_config(&config)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn api_base(&self) -> &str {
        self.config.api_base.trim_end_matches('/')
    }

    fn timeout(&self) -> Duration {
        self.config.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// `POST {base}/register`.
    #[cfg(feature = "client")]
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiReply, NanopostError> {
        let url = endpoint_url(self.api_base(), Endpoint::Register);
        self.post_json(&url, request, false).await
    }

    /// Post a message to the mail-submission URL.
    ///
    /// The URL is passed explicitly because registration stores its own copy
    /// of it; it normally equals `{base}/mail`.
    #[cfg(feature = "client")]
    pub async fn submit_mail(
        &self,
        mail_url: &str,
        payload: &MailPayload,
    ) -> Result<ApiReply, NanopostError> {
        self.post_json(mail_url, payload, true).await
    }

    /// `POST {base}/site/update-domain`.
    #[cfg(feature = "client")]
    pub async fn update_domain(
        &self,
        request: &UpdateDomainRequest,
    ) -> Result<ApiReply, NanopostError> {
        let url = endpoint_url(self.api_base(), Endpoint::UpdateDomain);
        self.post_json(&url, request, false).await
    }

    #[cfg(feature = "client")]
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
        accept_json: bool,
    ) -> Result<ApiReply, NanopostError> {
        let mut request = self
            .http_client
            .post(url)
            .timeout(self.timeout())
            .json(body);
        if accept_json {
            request = request.header(reqwest::header::ACCEPT, "application/json");
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let raw_body = response.text().await?;

        // Bodies may carry the site token; callers decide what to log.
        tracing::debug!(url = %url, status, "nanoPost API response");

        Ok(ApiReply::new(status, raw_body))
    }
}

fn validate_config(config: &NanopostConfig) -> Result<(), NanopostError> {
    let base = config.api_base.trim();
    if base.is_empty() {
        return Err(NanopostError::Config("api_base is required".into()));
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(NanopostError::Config(format!(
            "api_base must be an http(s) URL, got {base}"
        )));
    }
    Ok(())
}
