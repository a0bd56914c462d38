//! # gigachat
//!
//! Client SDK for the GigaChat HTTP API. It manages the OAuth-style exchange
//! of an authorization key for a short-lived bearer token, builds
//! authenticated requests against the service's REST endpoints, and layers a
//! chat-session abstraction (message history, response truncation) on top of
//! the raw chat-completion operation.
//!
//! ## Overview
//!
//! Every operation follows the same path: ensure the bearer token is valid
//! (refreshing it on demand through the configured OAuth endpoint), build an
//! authorized request against the API base address, send it, and decode the
//! response. A non-success HTTP status is surfaced as [`Error::Remote`] and
//! is never retried; a successful response with no usable body decodes to an
//! explicit empty result (`None` or an empty list) rather than an error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gigachat::{GigaChat, GigaChatOptions};
//!
//! #[tokio::main]
//! async fn main() -> gigachat::Result<()> {
//!     let options = GigaChatOptions::new("your-authorization-key")?;
//!     let client = GigaChat::builder().options(options).connect().await?;
//!
//!     let mut session = client.session();
//!     if let Some(reply) = session.ask_with_history("Hello, how are you?").await? {
//!         println!("{reply}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Bearer-token lifecycle: demand-driven exchange and expiry tracking |
//! | [`client`] | The [`GigaChat`] client, its builder and the [`ChatSession`] abstraction |
//! | [`config`] | Client options, defaults and settings-file overrides |
//! | [`transport`] | Authorized request construction over a shared HTTP pool |
//! | [`types`] | Wire-level request/response models for every endpoint |
//!
//! ## Concurrency
//!
//! A client instance targets single-caller-at-a-time usage. Sharing one
//! instance across tasks is safe memory-wise, but two concurrent calls that
//! both observe an expired token will both refresh it (last write wins), and
//! session-mutating calls take `&mut self` so the borrow checker rules out
//! interleaved history appends on a single session. Callers that need
//! stronger coordination should serialize access externally.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ChatSession, GigaChat, GigaChatBuilder};
pub use config::{AuthScheme, GigaChatOptions, OptionsLoader};
pub use error::Error;
pub use types::chat::{ChatMessage, ChatRequest, ChatRole};

use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed byte stream, as returned by the file download operation.
///
/// The body is read from the connection as it is consumed; it is never
/// buffered fully in memory by the client.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send + 'static>>;
