//! Service orders and their items.

use chrono::NaiveDate;
use content_list::ListRow;
use serde::{Deserialize, Serialize};

use crate::error::ServiceOrderError;
use crate::status::{ServiceOrderStatus, aggregate_status};

use super::document::{DocPosition, ServiceOrderItemDocument};

/// Number of photo slots shown per position in the item gallery.
pub const GALLERY_SLOTS: usize = 2;

/// One unit of work inside a service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_id: Option<u64>,
    #[serde(default)]
    pub description: String,
    /// `None` for items the server has not assigned a status yet.
    #[serde(default)]
    pub status: Option<ServiceOrderStatus>,
    #[serde(default)]
    pub documents: Vec<ServiceOrderItemDocument>,
}

impl ServiceOrderItem {
    /// Documents attached at `position`, in upload order.
    pub fn documents_at(&self, position: DocPosition) -> Vec<&ServiceOrderItemDocument> {
        self.documents
            .iter()
            .filter(|d| d.position == position)
            .collect()
    }

    /// Photos taken before the work.
    pub fn before_images(&self) -> Vec<&ServiceOrderItemDocument> {
        self.documents_at(DocPosition::Before)
    }

    /// Photos taken after the work.
    pub fn after_images(&self) -> Vec<&ServiceOrderItemDocument> {
        self.documents_at(DocPosition::After)
    }

    /// Gallery URLs for the photos at `position`.
    pub fn image_urls(&self, docs_url: &str, position: DocPosition) -> Vec<String> {
        self.documents_at(position)
            .into_iter()
            .map(|d| d.document.url(docs_url))
            .collect()
    }

    /// Empty gallery slots shown after the photos at `position`.
    pub fn placeholder_slots(&self, position: DocPosition) -> usize {
        GALLERY_SLOTS.saturating_sub(self.documents_at(position).len())
    }

    /// Append a document returned by the upload endpoint.
    pub fn attach(&mut self, document: ServiceOrderItemDocument) {
        self.documents.push(document);
    }
}

impl ListRow for ServiceOrderItem {
    fn id(&self) -> String {
        match self.id {
            Some(id) => format!("item-{}", id),
            // Unsaved items are told apart by what the user typed.
            None => format!(
                "item-new-{}-{}",
                self.service_type_id.unwrap_or_default(),
                self.description
            ),
        }
    }
}

/// A service order: where and when the work happens, for which client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub client_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<u64>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub status: ServiceOrderStatus,
    #[serde(default)]
    pub items: Vec<ServiceOrderItem>,
}

impl ServiceOrder {
    /// Status derived from the items.
    pub fn derived_status(&self) -> ServiceOrderStatus {
        aggregate_status(self.items.iter().map(|i| i.status))
    }

    /// Recompute the order status from its items.
    ///
    /// Returns `true` if the status changed.
    pub fn refresh_status(&mut self) -> bool {
        let status = self.derived_status();
        if status == self.status {
            return false;
        }
        log::debug!(
            "Service order {:?} status {} -> {}",
            self.id,
            self.status,
            status
        );
        self.status = status;
        true
    }

    /// Look up an item by id.
    pub fn item(&self, id: u64) -> Option<&ServiceOrderItem> {
        self.items.iter().find(|i| i.id == Some(id))
    }

    /// Replace an item with its saved version and refresh the order status.
    pub fn apply_item(&mut self, item: ServiceOrderItem) -> Result<(), ServiceOrderError> {
        let id = item.id.ok_or(ServiceOrderError::UnsavedItem)?;
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id == Some(id))
            .ok_or(ServiceOrderError::ItemNotFound(id))?;
        *slot = item;
        self.refresh_status();
        Ok(())
    }

    /// Set the status of one item and refresh the order status.
    pub fn set_item_status(
        &mut self,
        item_id: u64,
        status: ServiceOrderStatus,
    ) -> Result<(), ServiceOrderError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == Some(item_id))
            .ok_or(ServiceOrderError::ItemNotFound(item_id))?;
        item.status = Some(status);
        self.refresh_status();
        Ok(())
    }
}

impl ListRow for ServiceOrder {
    fn id(&self) -> String {
        match self.id {
            Some(id) => format!("so-{}", id),
            None => format!(
                "so-new-{}-{}-{}",
                self.client_id, self.start_date, self.location
            ),
        }
    }
}
