use serde::{Deserialize, Serialize};

/// Default `purpose` for uploaded files.
pub const GENERAL_PURPOSE: &str = "general";

/// Stored-file metadata as returned by the file endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDescription {
    #[serde(default)]
    pub bytes: i64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub access_policy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub data: Vec<FileDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDeletedResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub access_policy: String,
}
