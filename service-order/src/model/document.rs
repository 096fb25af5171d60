//! Uploaded documents and their attachment to items and contracts.

use serde::{Deserialize, Serialize};

/// A stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub filename: String,
    /// Path relative to the documents base URL.
    pub file_path: String,
    pub file_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl Document {
    /// Public URL of the file under `docs_url`.
    pub fn url(&self, docs_url: &str) -> String {
        format!("{}/{}", docs_url.trim_end_matches('/'), self.file_path)
    }
}

/// Whether a photo was taken before or after the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocPosition {
    Before,
    After,
}

/// A document attached to a service order item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrderItemDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub service_order_item_id: u64,
    pub document_id: u64,
    pub document: Document,
    pub position: DocPosition,
}

/// A document attached to a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub contract_id: u64,
    pub document_id: u64,
    pub document: Document,
}
