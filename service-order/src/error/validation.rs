//! Form field validation errors

use thiserror::Error;

/// The rule a form field broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationRule {
    #[error("is required")]
    Required,

    #[error("must have at least {0} characters")]
    MinLength(usize),

    /// Not a well-formed value of the named kind (email, CPF, phone).
    #[error("is not a valid {0}")]
    Format(&'static str),

    /// A date earlier than the named field.
    #[error("must not be before {0}")]
    NotBefore(&'static str),
}

/// A form field and the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {rule}")]
pub struct FieldValidationError {
    pub field: &'static str,
    pub rule: ValidationRule,
}

impl FieldValidationError {
    pub fn new(field: &'static str, rule: ValidationRule) -> Self {
        Self { field, rule }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, ValidationRule::Required)
    }
}
