use serde::{Deserialize, Serialize};

/// Payload returned by the OAuth token endpoint.
///
/// `expires_at` is the server-provided token lifetime in seconds; the client
/// turns it into an absolute expiry instant at exchange time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub expires_at: i64,
}
