//! Users, the people behind them and the user form.

use chrono::NaiveDate;
use content_list::ListRow;
use serde::{Deserialize, Serialize};

use crate::error::{FieldValidationError, ServiceOrderError, ValidationRule};

/// Shortest accepted person name, in characters.
pub const MIN_NAME_LEN: usize = 3;

/// Personal data attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub birth: NaiveDate,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// An application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub email: String,
    pub active: bool,
    pub role: String,
    #[serde(default)]
    pub person_id: Option<u64>,
    pub person: Person,
}

impl ListRow for User {
    fn id(&self) -> String {
        match self.id {
            Some(id) => format!("user-{}", id),
            None => format!("user-new-{}", self.email),
        }
    }
}

/// Form state for creating or editing a user.
///
/// New users start active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub email: String,
    pub active: bool,
    pub role: String,
    /// Person record being edited, `None` for a new user.
    pub person_id: Option<u64>,
    pub name: String,
    pub birth: Option<NaiveDate>,
    pub cpf: String,
    pub phone: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            email: String::new(),
            active: true,
            role: String::new(),
            person_id: None,
            name: String::new(),
            birth: None,
            cpf: String::new(),
            phone: String::new(),
        }
    }
}

impl UserDraft {
    /// Form prefilled from an existing user.
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            active: user.active,
            role: user.role.clone(),
            person_id: user.person_id.or(user.person.id),
            name: user.person.name.clone(),
            birth: Some(user.person.birth),
            cpf: user.person.cpf.clone().unwrap_or_default(),
            phone: user.person.phone.clone().unwrap_or_default(),
        }
    }

    /// Check every field, collecting all failures.
    ///
    /// CPF and phone are optional but must be well formed when given.
    pub fn validate(&self) -> Result<(), ServiceOrderError> {
        let mut errors = Vec::new();

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldValidationError::required("email"));
        } else if !is_valid_email(email) {
            errors.push(FieldValidationError::new(
                "email",
                ValidationRule::Format("email"),
            ));
        }
        if self.role.trim().is_empty() {
            errors.push(FieldValidationError::required("role"));
        }
        if self.birth.is_none() {
            errors.push(FieldValidationError::required("birth"));
        }

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldValidationError::required("name"));
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.push(FieldValidationError::new(
                "name",
                ValidationRule::MinLength(MIN_NAME_LEN),
            ));
        }

        if !self.cpf.trim().is_empty() && !is_valid_cpf(&self.cpf) {
            errors.push(FieldValidationError::new("cpf", ValidationRule::Format("CPF")));
        }
        if !self.phone.trim().is_empty() && !is_valid_phone(&self.phone) {
            errors.push(FieldValidationError::new(
                "phone",
                ValidationRule::Format("phone"),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceOrderError::Validation(errors))
        }
    }

    /// Validated create/update payload.
    pub fn into_request(self) -> Result<User, ServiceOrderError> {
        self.validate()?;
        let birth = self.birth.ok_or_else(|| {
            ServiceOrderError::Validation(vec![FieldValidationError::required("birth")])
        })?;
        Ok(User {
            id: None,
            email: self.email.trim().to_string(),
            active: self.active,
            role: self.role.trim().to_string(),
            person_id: self.person_id,
            person: Person {
                id: self.person_id,
                name: self.name.trim().to_string(),
                birth,
                cpf: non_blank(self.cpf),
                phone: non_blank(self.phone),
            },
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Loose email check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Brazilian CPF: 11 digits (mask characters ignored) with both check
/// digits correct. Repeated-digit numbers are rejected.
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.chars().any(|c| !(c.is_ascii_digit() || matches!(c, '.' | '-' | ' '))) {
        return false;
    }
    let d = digits(cpf);
    if d.len() != 11 || d.iter().all(|&x| x == d[0]) {
        return false;
    }
    let check = |len: usize| {
        let sum: u32 = d[..len]
            .iter()
            .zip((2..=len as u32 + 1).rev())
            .map(|(digit, weight)| digit * weight)
            .sum();
        (sum * 10 % 11) % 10
    };
    check(9) == d[9] && check(10) == d[10]
}

/// Brazilian phone: area code plus 8 or 9 digits, mask characters ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone
        .chars()
        .any(|c| !(c.is_ascii_digit() || matches!(c, '(' | ')' | '-' | ' ' | '+')))
    {
        return false;
    }
    matches!(digits(phone).len(), 10 | 11)
}
