//! Endpoint operations.
//!
//! Every operation is the same round trip: build an authorized request for a
//! fixed relative path, send it, fail on a non-success status, decode the
//! JSON body into the matching response shape. A successful response with an
//! empty or undecodable body is an explicit empty result (`None` or an empty
//! list), never an error; callers treat absence of data as a normal outcome.
//! Nothing here retries.

use futures::TryStreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tokio::sync::RwLock;
use tracing::info;

use crate::client::builder::GigaChatBuilder;
use crate::client::session::ChatSession;
use crate::config::GigaChatOptions;
use crate::error::Error;
use crate::transport::{read_json, HttpTransport};
use crate::types::ai_check::{AiCheckRequest, AiCheckResponse};
use crate::types::balance::BalanceResponse;
use crate::types::batch::{BatchResponse, BatchesListResponse};
use crate::types::chat::{ChatCompletionResponse, ChatRequest};
use crate::types::embedding::{EmbeddingsRequest, EmbeddingsResponse};
use crate::types::file::{FileDeletedResponse, FileDescription, FileListResponse};
use crate::types::function::{FunctionDescription, FunctionValidationResult};
use crate::types::model::{ModelInfo, ModelListResponse};
use crate::types::token::AccessToken;
use crate::types::tokens_count::{TokensCountItem, TokensCountRequest};
use crate::{ByteStream, Result};

/// GigaChat API client.
///
/// One instance owns its token state and cached model catalog. Targets
/// single-caller-at-a-time usage; see the crate docs for the concurrency
/// contract.
pub struct GigaChat {
    transport: HttpTransport,
    catalog: RwLock<Vec<String>>,
}

impl GigaChat {
    pub fn builder() -> GigaChatBuilder {
        GigaChatBuilder::new()
    }

    pub(crate) fn from_transport(transport: HttpTransport) -> Self {
        Self {
            transport,
            catalog: RwLock::new(Vec::new()),
        }
    }

    pub fn options(&self) -> &GigaChatOptions {
        self.transport.options()
    }

    /// A chat session bound to this client, starting with empty history.
    pub fn session(&self) -> ChatSession<'_> {
        ChatSession::new(self)
    }

    /// Eagerly refresh the token and load the model catalog.
    pub async fn initialize(&self) -> Result<()> {
        self.refresh_token().await?;
        self.reload_models().await?;
        info!("client initialized");
        Ok(())
    }

    /// Force a token exchange regardless of the stored token's validity.
    pub async fn refresh_token(&self) -> Result<AccessToken> {
        self.transport.refresh_token().await
    }

    /// The cached model catalog: distinct, non-blank identifiers in order of
    /// first appearance. Empty until [`GigaChat::reload_models`] (or
    /// [`GigaChat::initialize`]) has run.
    pub async fn available_models(&self) -> Vec<String> {
        self.catalog.read().await.clone()
    }

    /// Fetch the model listing and rebuild the cached catalog from it.
    pub async fn reload_models(&self) -> Result<Vec<String>> {
        let listing = self.models().await?;
        let ids = distinct_model_ids(listing.as_ref());
        *self.catalog.write().await = ids.clone();
        Ok(ids)
    }

    /// Raw model listing.
    pub async fn models(&self) -> Result<Option<ModelListResponse>> {
        let request = self.transport.authorized(Method::GET, "models").await?;
        let response = self.transport.send(request).await?;
        read_json(response).await
    }

    /// A single model by identifier.
    pub async fn model(&self, model_id: &str) -> Result<Option<ModelInfo>> {
        let request = self
            .transport
            .authorized(Method::GET, &format!("models/{model_id}"))
            .await?;
        let response = self.transport.send(request).await?;
        read_json(response).await
    }

    /// Raw chat completion. No truncation happens here; that belongs to the
    /// session layer.
    pub async fn chat(&self, request: &ChatRequest) -> Result<Option<ChatCompletionResponse>> {
        let builder = self
            .transport
            .authorized(Method::POST, "chat/completions")
            .await?;
        let response = self.transport.send(builder.json(request)).await?;
        read_json(response).await
    }

    /// Token counts for a list of inputs. Empty when the response carries no
    /// data.
    pub async fn count_tokens(&self, request: &TokensCountRequest) -> Result<Vec<TokensCountItem>> {
        let builder = self
            .transport
            .authorized(Method::POST, "tokens/count")
            .await?;
        let response = self.transport.send(builder.json(request)).await?;
        Ok(read_json(response).await?.unwrap_or_default())
    }

    /// Remaining balance per usage category.
    pub async fn balance(&self) -> Result<Option<BalanceResponse>> {
        let request = self.transport.authorized(Method::GET, "balance").await?;
        let response = self.transport.send(request).await?;
        read_json(response).await
    }

    /// Stored-file listing.
    pub async fn files(&self) -> Result<Option<FileListResponse>> {
        let request = self.transport.authorized(Method::GET, "files").await?;
        let response = self.transport.send(request).await?;
        read_json(response).await
    }

    /// Metadata for one stored file.
    pub async fn file(&self, file_id: &str) -> Result<Option<FileDescription>> {
        let request = self
            .transport
            .authorized(Method::GET, &format!("files/{file_id}"))
            .await?;
        let response = self.transport.send(request).await?;
        read_json(response).await
    }

    /// Upload file content as multipart form data (`file` + `purpose`).
    /// See [`crate::types::file::GENERAL_PURPOSE`] for the common purpose.
    pub async fn upload_file(
        &self,
        file_name: &str,
        content: impl Into<reqwest::Body>,
        purpose: &str,
    ) -> Result<Option<FileDescription>> {
        let part = Part::stream(content).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("purpose", purpose.to_string());
        let builder = self.transport.authorized(Method::POST, "files").await?;
        let response = self.transport.send(builder.multipart(form)).await?;
        read_json(response).await
    }

    /// Stream a stored file's content. The returned stream reads straight
    /// from the response body; nothing is buffered up front.
    pub async fn download_file(&self, file_id: &str) -> Result<ByteStream> {
        let request = self
            .transport
            .authorized(Method::GET, &format!("files/{file_id}/content"))
            .await?;
        let response = self.transport.send(request).await?;
        Ok(Box::pin(response.bytes_stream().map_err(Error::Transport)))
    }

    /// Delete a stored file.
    pub async fn delete_file(&self, file_id: &str) -> Result<Option<FileDeletedResponse>> {
        let request = self
            .transport
            .authorized(Method::POST, &format!("files/{file_id}/delete"))
            .await?;
        let response = self.transport.send(request).await?;
        read_json(response).await
    }

    /// Check whether a text reads as AI-generated.
    pub async fn ai_check(&self, request: &AiCheckRequest) -> Result<Option<AiCheckResponse>> {
        let builder = self.transport.authorized(Method::POST, "ai/check").await?;
        let response = self.transport.send(builder.json(request)).await?;
        read_json(response).await
    }

    /// Embedding vectors for a list of inputs.
    pub async fn embeddings(
        &self,
        request: &EmbeddingsRequest,
    ) -> Result<Option<EmbeddingsResponse>> {
        let builder = self.transport.authorized(Method::POST, "embeddings").await?;
        let response = self.transport.send(builder.json(request)).await?;
        read_json(response).await
    }

    /// Batch-job listing, optionally narrowed to one batch id.
    pub async fn batches(&self, batch_id: Option<&str>) -> Result<Option<BatchesListResponse>> {
        let mut builder = self.transport.authorized(Method::GET, "batches").await?;
        if let Some(batch_id) = batch_id {
            builder = builder.query(&[("batch_id", batch_id)]);
        }
        let response = self.transport.send(builder).await?;
        read_json(response).await
    }

    /// Submit a batch job. `payload` is an opaque JSON-lines byte stream the
    /// client forwards unvalidated; `method` names the target batch
    /// operation and is required as a query parameter.
    pub async fn create_batch(
        &self,
        payload: impl Into<reqwest::Body>,
        method: &str,
    ) -> Result<Option<BatchResponse>> {
        let builder = self.transport.authorized(Method::POST, "batches").await?;
        let builder = builder
            .query(&[("method", method)])
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(payload.into());
        let response = self.transport.send(builder).await?;
        read_json(response).await
    }

    /// Server-side validation of a custom function declaration.
    pub async fn validate_function(
        &self,
        description: &FunctionDescription,
    ) -> Result<Option<FunctionValidationResult>> {
        let builder = self
            .transport
            .authorized(Method::POST, "functions/validate")
            .await?;
        let response = self.transport.send(builder.json(description)).await?;
        read_json(response).await
    }
}

/// Distinct, non-blank model identifiers, first occurrence wins.
fn distinct_model_ids(listing: Option<&ModelListResponse>) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    let Some(listing) = listing else {
        return ids;
    };
    for model in &listing.data {
        if model.id.trim().is_empty() {
            continue;
        }
        if !ids.iter().any(|seen| seen == &model.id) {
            ids.push(model.id.clone());
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(ids: &[&str]) -> ModelListResponse {
        ModelListResponse {
            object: "list".into(),
            data: ids
                .iter()
                .map(|id| crate::types::model::ModelInfo {
                    id: (*id).into(),
                    object: "model".into(),
                    owned_by: String::new(),
                    kind: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn catalog_dedupes_and_drops_blanks() {
        let listing = listing(&["A", "A", "", "B"]);
        assert_eq!(distinct_model_ids(Some(&listing)), vec!["A", "B"]);
    }

    #[test]
    fn catalog_keeps_first_occurrence_order() {
        let listing = listing(&["B", "A", "B", "C", "A"]);
        assert_eq!(distinct_model_ids(Some(&listing)), vec!["B", "A", "C"]);
    }

    #[test]
    fn missing_listing_is_empty_catalog() {
        assert!(distinct_model_ids(None).is_empty());
    }
}
