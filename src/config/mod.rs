//! Client options: defaults, builder-style construction, and merging with an
//! optional JSON settings document.
//!
//! Options are immutable once handed to a client. File-sourced values win
//! only when they are non-blank (and, for URLs, parseable as absolute);
//! anything else silently falls back to the built-in defaults.

mod loader;

pub use loader::OptionsLoader;

use crate::error::Error;
use crate::Result;
use url::Url;

/// Default OAuth scope.
pub const DEFAULT_SCOPE: &str = "GIGACHAT_API_PERS";
/// Default API base address. Keeps the trailing slash so that relative
/// endpoint paths join under `/api/v1/` instead of replacing it.
pub const DEFAULT_API_BASE_ADDRESS: &str = "https://gigachat.devices.sberbank.ru/api/v1/";
/// Default OAuth token endpoint.
pub const DEFAULT_OAUTH_ENDPOINT: &str = "https://ngw.devices.sberbank.ru:9443/api/v2/oauth";
/// Default chat model.
pub const DEFAULT_MODEL: &str = "GigaChat";

/// Credential scheme used on the token exchange request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: Bearer <authorization key>` (the service default).
    #[default]
    Bearer,
    /// `Authorization: Basic <authorization key>`.
    Basic,
}

impl AuthScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::Basic => "Basic",
        }
    }
}

/// Immutable client configuration.
#[derive(Debug, Clone)]
pub struct GigaChatOptions {
    /// Credential presented to the OAuth endpoint. Required, never blank.
    pub authorization_key: String,
    pub scope: String,
    pub api_base_address: Url,
    pub oauth_endpoint: Url,
    pub default_model: String,
    /// Maximum number of characters a session-level reply may carry.
    /// Zero disables truncation.
    pub response_character_limit: usize,
    pub auth_scheme: AuthScheme,
}

impl GigaChatOptions {
    /// Options with built-in defaults for everything but the credential.
    ///
    /// Fails with [`Error::Configuration`] when the key is blank.
    pub fn new(authorization_key: impl Into<String>) -> Result<Self> {
        let authorization_key = authorization_key.into();
        if authorization_key.trim().is_empty() {
            return Err(Error::configuration("authorization key must not be blank"));
        }
        Ok(Self {
            authorization_key,
            scope: DEFAULT_SCOPE.to_string(),
            api_base_address: parse_url(DEFAULT_API_BASE_ADDRESS)?,
            oauth_endpoint: parse_url(DEFAULT_OAUTH_ENDPOINT)?,
            default_model: DEFAULT_MODEL.to_string(),
            response_character_limit: 0,
            auth_scheme: AuthScheme::default(),
        })
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn api_base_address(mut self, base: Url) -> Self {
        self.api_base_address = base;
        self
    }

    pub fn oauth_endpoint(mut self, endpoint: Url) -> Self {
        self.oauth_endpoint = endpoint;
        self
    }

    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn response_character_limit(mut self, limit: usize) -> Self {
        self.response_character_limit = limit;
        self
    }

    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|err| Error::configuration(format!("invalid URL {value:?}: {err}")))
}
