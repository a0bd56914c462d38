use thiserror::Error;

/// Unified error type for the GigaChat client.
///
/// Failures always surface to the immediate caller of the triggering
/// operation; nothing is swallowed or retried. Absence of expected data in
/// an otherwise successful response is *not* an error: endpoint operations
/// decode it to `None` or an empty collection instead. The one exception is
/// the token exchange itself, where a successful response without a usable
/// token is fatal ([`Error::EmptyToken`]).
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or blank required credential, or malformed arguments.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure reaching the remote host.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from an endpoint. Fatal for that call.
    #[error("remote request failed with HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// The token endpoint responded successfully but returned no usable token.
    #[error("token endpoint returned no usable access token")]
    EmptyToken,

    /// An authorized request was attempted with no token present and no
    /// refresh attempted. Unreachable as long as requests go through the
    /// transport layer, which always validates the token first.
    #[error("access token is missing")]
    MissingToken,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// HTTP status of a [`Error::Remote`] failure, if that is what this is.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
