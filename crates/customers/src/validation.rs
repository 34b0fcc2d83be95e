//! Pre-mutation checks.
//!
//! Pure predicates over a snapshot. They never touch the store; the caller
//! decides what to do on failure (see `CustomerService::submit`).

use custdash_core::{CustomerId, DomainError, DomainResult};

use crate::record::{CustomerForm, CustomerRecord};

const PHONE_DIGITS: usize = 10;

/// True iff `phone` is exactly 10 ASCII decimal digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// First record (other than `exclude_id`) sharing the candidate's email or phone.
pub fn find_conflict<'a>(
    records: &'a [CustomerRecord],
    email: &str,
    phone: &str,
    exclude_id: Option<&CustomerId>,
) -> Option<&'a CustomerRecord> {
    records.iter().find(|r| {
        Some(&r.id) != exclude_id && (r.email == email || r.phone == phone)
    })
}

/// True iff some other record already holds the candidate's email or phone.
///
/// `exclude_id` is `None` when adding, and the edited record's own id when
/// editing (a record never conflicts with itself).
pub fn exists_conflict(
    records: &[CustomerRecord],
    email: &str,
    phone: &str,
    exclude_id: Option<&CustomerId>,
) -> bool {
    find_conflict(records, email, phone, exclude_id).is_some()
}

/// Run every rule against a form, in submit order: phone shape first, then duplicates.
pub fn validate_form(records: &[CustomerRecord], form: &CustomerForm) -> DomainResult<()> {
    if !is_valid_phone(form.phone()) {
        return Err(DomainError::invalid_phone(form.phone()));
    }

    if let Some(existing) = find_conflict(records, form.email(), form.phone(), form.id.as_ref()) {
        return Err(DomainError::duplicate_contact(existing.id));
    }

    Ok(())
}
