//! Custom function declarations and server-side validation results.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A few-shot example attached to a function declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionExample {
    #[serde(default)]
    pub request: String,
    #[serde(default)]
    pub params: HashMap<String, Value>,
}

/// Declaration of a callable function passed with a chat request or
/// submitted to the validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDescription {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub few_shot_examples: Option<Vec<FunctionExample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_parameters: Option<HashMap<String, Value>>,
}

impl FunctionDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters: HashMap::new(),
            few_shot_examples: None,
            return_parameters: None,
        }
    }
}

/// One problem the validator found in a function schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionIssue {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schema_location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionValidationResult {
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub json_ai_rules_version: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<FunctionIssue>>,
    #[serde(default)]
    pub warnings: Option<Vec<FunctionIssue>>,
}
