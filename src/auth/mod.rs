//! Bearer-token lifecycle: demand-driven exchange and expiry tracking.
//!
//! The manager holds at most one token. A token is valid strictly while
//! `now < expires_at`; on first use or after expiry the next caller performs
//! a synchronous exchange before its own request goes out. There is no
//! background renewal, and concurrent refreshes are not de-duplicated: the
//! last completed exchange wins.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GigaChatOptions;
use crate::error::Error;
use crate::transport::{ensure_success, read_json};
use crate::types::token::AccessToken;
use crate::Result;

/// The current token paired with its absolute expiry instant.
///
/// Replaced wholesale on every refresh, never partially mutated.
#[derive(Debug, Clone)]
struct TokenState {
    access_token: String,
    expires_at: Instant,
}

/// Owns the client's bearer token.
#[derive(Debug, Default)]
pub struct TokenManager {
    state: RwLock<Option<TokenState>>,
}

impl TokenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a valid access token, exchanging the authorization key first
    /// when no token is stored or the stored one has expired.
    pub async fn ensure_valid(
        &self,
        http: &reqwest::Client,
        options: &GigaChatOptions,
    ) -> Result<String> {
        if let Some(state) = self.state.read().await.as_ref() {
            if Instant::now() < state.expires_at {
                return Ok(state.access_token.clone());
            }
            debug!("access token expired, refreshing");
        }
        self.refresh(http, options).await?;
        self.require_token().await
    }

    /// Performs the OAuth-style exchange and replaces the stored token.
    ///
    /// The exchange posts a form-encoded `scope`, authenticates with the
    /// configured authorization key, and carries a fresh `RqUID` correlation
    /// id. A 2xx response without a decodable, non-blank token is fatal.
    pub async fn refresh(
        &self,
        http: &reqwest::Client,
        options: &GigaChatOptions,
    ) -> Result<AccessToken> {
        let correlation_id = Uuid::new_v4();
        debug!(%correlation_id, scope = %options.scope, "exchanging authorization key for access token");

        let response = http
            .post(options.oauth_endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(
                AUTHORIZATION,
                format!(
                    "{} {}",
                    options.auth_scheme.as_str(),
                    options.authorization_key
                ),
            )
            .header("RqUID", correlation_id.to_string())
            .form(&[("scope", options.scope.as_str())])
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let token: AccessToken = read_json(response)
            .await?
            .filter(|token: &AccessToken| !token.access_token.trim().is_empty())
            .ok_or(Error::EmptyToken)?;

        let lifetime = Duration::from_secs(token.expires_at.max(0) as u64);
        let state = TokenState {
            access_token: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        };
        *self.state.write().await = Some(state);
        info!(expires_in_secs = token.expires_at, "access token refreshed");
        Ok(token)
    }

    /// The stored token, which must be present and non-blank.
    ///
    /// Reaching [`Error::MissingToken`] here means a caller skipped
    /// [`TokenManager::ensure_valid`]; a blank token can never be stored
    /// because the exchange rejects it as [`Error::EmptyToken`].
    async fn require_token(&self) -> Result<String> {
        match self.state.read().await.as_ref() {
            Some(state) if !state.access_token.trim().is_empty() => {
                Ok(state.access_token.clone())
            }
            _ => Err(Error::MissingToken),
        }
    }
}
