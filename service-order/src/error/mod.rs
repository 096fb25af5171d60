//! Error types

mod validation;

pub use validation::*;

/// Errors raised by service-order operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceOrderError {
    /// A form has one or more invalid fields.
    #[error("{}", format_validation(.0))]
    Validation(Vec<FieldValidationError>),

    /// An updated item does not belong to the order.
    #[error("Item {0} not found in service order")]
    ItemNotFound(u64),

    /// An item without an id cannot replace an existing one.
    #[error("Item has no id")]
    UnsavedItem,
}

impl ServiceOrderError {
    /// Field errors, when this is a validation failure.
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn format_validation(errors: &[FieldValidationError]) -> String {
    let fields: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("Invalid form: {}", fields.join("; "))
}
