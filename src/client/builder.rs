use crate::client::core::GigaChat;
use crate::config::GigaChatOptions;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// `build()` performs no I/O; `connect()` additionally runs the eager
/// initialization (token exchange + model catalog load).
pub struct GigaChatBuilder {
    options: Option<GigaChatOptions>,
    authorization_key: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl GigaChatBuilder {
    pub fn new() -> Self {
        Self {
            options: None,
            authorization_key: None,
            http_client: None,
        }
    }

    /// Use fully resolved options.
    pub fn options(mut self, options: GigaChatOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Shortcut for default options with just the credential set.
    pub fn authorization_key(mut self, key: impl Into<String>) -> Self {
        self.authorization_key = Some(key.into());
        self
    }

    /// Inject a pre-configured HTTP client (custom pool, proxy, timeouts).
    /// Primarily useful for tests and embedders with their own pool policy.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client without touching the network.
    pub fn build(self) -> Result<GigaChat> {
        let options = match (self.options, self.authorization_key) {
            (Some(options), _) => options,
            (None, Some(key)) => GigaChatOptions::new(key)?,
            (None, None) => {
                return Err(Error::configuration(
                    "client options or an authorization key are required",
                ))
            }
        };
        let transport = HttpTransport::new(options, self.http_client)?;
        Ok(GigaChat::from_transport(transport))
    }

    /// Build the client, then eagerly refresh the token and load the model
    /// catalog so the first real call finds both ready.
    pub async fn connect(self) -> Result<GigaChat> {
        let client = self.build()?;
        client.initialize().await?;
        Ok(client)
    }
}

impl Default for GigaChatBuilder {
    fn default() -> Self {
        Self::new()
    }
}
