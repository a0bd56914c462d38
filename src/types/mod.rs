//! Wire-level request and response models for every GigaChat endpoint.
//!
//! Field names mirror the remote JSON contract via serde attributes; optional
//! request fields are skipped when unset so payloads stay minimal. Response
//! collections default to empty on a missing field, matching the client-wide
//! rule that absent data is an empty result rather than an error.
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ai_check`] | AI-generated-content detection |
//! | [`balance`] | Account balance |
//! | [`batch`] | Batch job creation and listing |
//! | [`chat`] | Chat completion request/response, messages and roles |
//! | [`embedding`] | Embedding vectors |
//! | [`file`] | File storage descriptions |
//! | [`function`] | Custom function declarations and validation |
//! | [`model`] | Model catalog entries |
//! | [`token`] | OAuth access-token payload |
//! | [`tokens_count`] | Token counting |

pub mod ai_check;
pub mod balance;
pub mod batch;
pub mod chat;
pub mod embedding;
pub mod file;
pub mod function;
pub mod model;
pub mod token;
pub mod tokens_count;

pub use ai_check::{AiCheckRequest, AiCheckResponse};
pub use balance::{BalanceItem, BalanceResponse};
pub use batch::{BatchItem, BatchRequestCounts, BatchResponse, BatchesListResponse};
pub use chat::{
    ChatChoice, ChatCompletionResponse, ChatMessage, ChatRequest, ChatRole, FunctionCallDirective,
    UsageData,
};
pub use embedding::{EmbeddingData, EmbeddingUsage, EmbeddingsRequest, EmbeddingsResponse};
pub use file::{FileDeletedResponse, FileDescription, FileListResponse};
pub use function::{
    FunctionDescription, FunctionExample, FunctionIssue, FunctionValidationResult,
};
pub use model::{ModelInfo, ModelListResponse};
pub use token::AccessToken;
pub use tokens_count::{TokensCountItem, TokensCountRequest};
