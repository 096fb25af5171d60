//! Service order domain: statuses, orders, items, documents, contracts and
//! users, displayed through `content-list`.

pub mod draft;
pub mod error;
pub mod model;
pub mod status;
pub mod user;

pub use draft::{ServiceOrderDraft, ServiceOrderRequest};
pub use error::{FieldValidationError, ServiceOrderError, ValidationRule};
pub use model::*;
pub use status::{ServiceOrderStatus, Severity, aggregate_status};
pub use user::{Person, User, UserDraft};
