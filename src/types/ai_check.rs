use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiCheckRequest {
    pub input: String,
    pub model: String,
}

impl AiCheckRequest {
    pub fn new(input: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            model: model.into(),
        }
    }
}

/// Verdict of the AI-generated-content check.
///
/// `ai_intervals` holds `[start, end]` character ranges the service
/// attributes to generated text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiCheckResponse {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub characters: u32,
    #[serde(default)]
    pub tokens: u32,
    #[serde(default)]
    pub ai_intervals: Vec<Vec<u32>>,
}
