//! Domain error model.

use thiserror::Error;

use crate::id::CustomerId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// duplicate contact details). Infrastructure concerns belong elsewhere.
///
/// A missing record on update/delete is deliberately *not* represented here:
/// those operations are silent no-ops.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The phone number is not exactly 10 decimal digits.
    #[error("invalid phone number `{0}`: expected exactly 10 digits")]
    InvalidPhoneFormat(String),

    /// Another customer already holds the same email or phone.
    #[error("a customer with this email or phone number already exists (id: {existing})")]
    DuplicateContactInfo { existing: CustomerId },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_phone(phone: impl Into<String>) -> Self {
        Self::InvalidPhoneFormat(phone.into())
    }

    pub fn duplicate_contact(existing: CustomerId) -> Self {
        Self::DuplicateContactInfo { existing }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
