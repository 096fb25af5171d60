//! Client contracts.

use chrono::NaiveDate;
use content_list::ListRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::ContractDocument;

/// A contract between the company and a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    pub number: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub value: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub document_list: Vec<ContractDocument>,
}

impl Contract {
    /// Whether `date` falls within the contract period (inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.date_start <= date && date <= self.date_end
    }
}

impl ListRow for Contract {
    fn id(&self) -> String {
        match self.id {
            Some(id) => format!("contract-{}", id),
            None => format!("contract-new-{}", self.number),
        }
    }
}
