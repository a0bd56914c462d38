use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensCountRequest {
    pub model: String,
    pub input: Vec<String>,
}

impl TokensCountRequest {
    pub fn new(model: impl Into<String>, input: Vec<String>) -> Self {
        Self {
            model: model.into(),
            input,
        }
    }
}

/// Token/character counts for one input string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensCountItem {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub tokens: u32,
    #[serde(default)]
    pub characters: u32,
}
