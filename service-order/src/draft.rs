//! Editable service order form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FieldValidationError, ServiceOrderError, ValidationRule};
use crate::model::ServiceOrder;
use crate::status::ServiceOrderStatus;

/// Form state for creating or editing a service order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use service_order::{ServiceOrderDraft, ServiceOrderStatus};
///
/// let mut draft = ServiceOrderDraft::default();
/// assert!(draft.validate().is_err());
///
/// draft.set_client(Some(3));
/// draft.start_date = NaiveDate::from_ymd_opt(2025, 3, 10);
/// draft.location = "Warehouse 2".to_string();
///
/// let request = draft.into_request().unwrap();
/// assert_eq!(request.status, ServiceOrderStatus::Pending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceOrderDraft {
    pub client_id: Option<u64>,
    pub contract_id: Option<u64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub description: String,
}

impl ServiceOrderDraft {
    /// Form prefilled from an existing order.
    pub fn from_order(order: &ServiceOrder) -> Self {
        Self {
            client_id: Some(order.client_id),
            contract_id: order.contract_id,
            start_date: Some(order.start_date),
            end_date: order.end_date,
            location: order.location.clone(),
            description: order.description.clone(),
        }
    }

    /// Change the client.
    ///
    /// Clearing the client clears the contract too. Returns `true` when the
    /// contracts of the new client need to be loaded.
    pub fn set_client(&mut self, client_id: Option<u64>) -> bool {
        self.client_id = client_id;
        if client_id.is_none() {
            self.contract_id = None;
        }
        client_id.is_some()
    }

    /// Check every field, collecting all failures.
    pub fn validate(&self) -> Result<(), ServiceOrderError> {
        let mut errors = Vec::new();
        if self.client_id.is_none() {
            errors.push(FieldValidationError::required("client_id"));
        }
        if self.start_date.is_none() {
            errors.push(FieldValidationError::required("start_date"));
        }
        if self.location.trim().is_empty() {
            errors.push(FieldValidationError::required("location"));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            errors.push(FieldValidationError::new(
                "end_date",
                ValidationRule::NotBefore("start_date"),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceOrderError::Validation(errors))
        }
    }

    /// Validated create/update payload.
    ///
    /// Saved orders always go back to `Pending`; item updates move them on.
    pub fn into_request(self) -> Result<ServiceOrderRequest, ServiceOrderError> {
        self.validate()?;
        let missing =
            |field| ServiceOrderError::Validation(vec![FieldValidationError::required(field)]);
        let client_id = self.client_id.ok_or_else(|| missing("client_id"))?;
        let start_date = self.start_date.ok_or_else(|| missing("start_date"))?;
        Ok(ServiceOrderRequest {
            client_id,
            contract_id: self.contract_id,
            start_date,
            end_date: self.end_date,
            location: self.location.trim().to_string(),
            description: self.description,
            status: ServiceOrderStatus::Pending,
        })
    }
}

/// Body sent when creating or updating a service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrderRequest {
    pub client_id: u64,
    pub contract_id: Option<u64>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub description: String,
    pub status: ServiceOrderStatus,
}
