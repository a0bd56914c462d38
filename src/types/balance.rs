use serde::{Deserialize, Serialize};

/// Remaining balance for one usage category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceItem {
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub balance: Vec<BalanceItem>,
}
