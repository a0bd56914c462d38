//! Authorized request construction over a shared HTTP connection pool.
//!
//! Every endpoint operation goes through [`HttpTransport::authorized`]: it
//! guarantees a valid bearer token (triggering a demand-driven refresh when
//! needed), resolves the endpoint path against the configured API base
//! address, and stamps the standard headers. Bodies are attached by the
//! individual operations.

use reqwest::header::ACCEPT;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::TokenManager;
use crate::config::GigaChatOptions;
use crate::error::Error;
use crate::Result;

pub struct HttpTransport {
    http: reqwest::Client,
    options: GigaChatOptions,
    tokens: TokenManager,
}

impl HttpTransport {
    /// Wraps an injected HTTP client, or builds a pooled one with a
    /// `GIGACHAT_HTTP_TIMEOUT_SECS`-overridable timeout (default 30s).
    pub fn new(options: GigaChatOptions, http: Option<reqwest::Client>) -> Result<Self> {
        let http = match http {
            Some(client) => client,
            None => {
                let timeout_secs = env::var("GIGACHAT_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(30);
                reqwest::Client::builder()
                    .timeout(Duration::from_secs(timeout_secs))
                    .build()?
            }
        };
        Ok(Self {
            http,
            options,
            tokens: TokenManager::new(),
        })
    }

    pub fn options(&self) -> &GigaChatOptions {
        &self.options
    }

    /// Force a token exchange regardless of the stored token's validity.
    pub async fn refresh_token(&self) -> Result<crate::types::token::AccessToken> {
        self.tokens.refresh(&self.http, &self.options).await
    }

    /// An authenticated request builder for `path` relative to the API base
    /// address. Validates the token first, then sets `Authorization` and
    /// `Accept` headers.
    pub async fn authorized(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let token = self.tokens.ensure_valid(&self.http, &self.options).await?;
        let url = self
            .options
            .api_base_address
            .join(path)
            .map_err(|err| Error::configuration(format!("invalid endpoint path {path:?}: {err}")))?;
        debug!(%method, %url, "building authorized request");
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json"))
    }

    /// Dispatch a prepared request and fail on any non-success status.
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        ensure_success(response).await
    }
}

/// Maps a non-success status to [`Error::Remote`], carrying the body text as
/// the failure message.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), "remote request failed");
    Err(Error::Remote {
        status: status.as_u16(),
        message,
    })
}

/// Decodes a JSON body, treating an empty or undecodable body as "no data".
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match serde_json::from_slice(&body) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(%err, "response body did not decode, treating as empty");
            Ok(None)
        }
    }
}
