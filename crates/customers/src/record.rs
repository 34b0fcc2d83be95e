use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use custdash_core::{CustomerId, Entity};

/// A stored customer record.
///
/// `id` and `added_date` are assigned once by the store and never change;
/// every other field may be replaced by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Exactly 10 decimal digits for any record accepted through the service.
    pub phone: String,
    pub city: String,
    pub added_date: DateTime<Utc>,
}

impl CustomerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace the mutable fields from `other`, keeping `id` and `added_date`.
    pub(crate) fn replace_details(&mut self, other: &CustomerRecord) {
        self.first_name = other.first_name.clone();
        self.last_name = other.last_name.clone();
        self.email = other.email.clone();
        self.phone = other.phone.clone();
        self.city = other.city.clone();
    }
}

impl Entity for CustomerRecord {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Caller-supplied fields for a new record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    /// Creation timestamp. The store stamps `Utc::now()` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_date: Option<DateTime<Utc>>,
}

impl CustomerInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            city: city.into(),
            added_date: None,
        }
    }

    pub fn added_at(mut self, added_date: DateTime<Utc>) -> Self {
        self.added_date = Some(added_date);
        self
    }

    /// Materialize a record with the given identity.
    pub(crate) fn into_record(self, id: CustomerId, now: DateTime<Utc>) -> CustomerRecord {
        CustomerRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            city: self.city,
            added_date: self.added_date.unwrap_or(now),
        }
    }
}

/// Draft submitted from a create/edit form.
///
/// `id == None` creates a new record; `Some(id)` edits the existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    #[serde(default)]
    pub id: Option<CustomerId>,
    #[serde(flatten)]
    pub input: CustomerInput,
}

impl CustomerForm {
    pub fn create(input: CustomerInput) -> Self {
        Self { id: None, input }
    }

    /// Pre-fill an edit form from an existing record.
    pub fn edit(record: &CustomerRecord) -> Self {
        Self {
            id: Some(record.id),
            input: CustomerInput {
                first_name: record.first_name.clone(),
                last_name: record.last_name.clone(),
                email: record.email.clone(),
                phone: record.phone.clone(),
                city: record.city.clone(),
                added_date: Some(record.added_date),
            },
        }
    }

    pub fn email(&self) -> &str {
        &self.input.email
    }

    pub fn phone(&self) -> &str {
        &self.input.phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_input() -> CustomerInput {
        CustomerInput::new("Ada", "Lovelace", "ada@example.com", "5551234567", "London")
    }

    #[test]
    fn into_record_stamps_now_when_added_date_missing() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let id = CustomerId::new();
        let record = sample_input().into_record(id, now);

        assert_eq!(record.id, id);
        assert_eq!(record.added_date, now);
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn into_record_keeps_caller_added_date() {
        let then = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = sample_input().added_at(then).into_record(CustomerId::new(), now);

        assert_eq!(record.added_date, then);
    }

    #[test]
    fn replace_details_preserves_identity_and_added_date() {
        let then = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut record = sample_input().into_record(CustomerId::new(), then);
        let original_id = record.id;

        let mut changed = record.clone();
        changed.id = CustomerId::new();
        changed.added_date = Utc::now();
        changed.city = "Paris".to_string();
        changed.email = "ada@paris.fr".to_string();

        record.replace_details(&changed);

        assert_eq!(record.id, original_id);
        assert_eq!(record.added_date, then);
        assert_eq!(record.city, "Paris");
        assert_eq!(record.email, "ada@paris.fr");
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = sample_input().into_record(CustomerId::new(), Utc::now());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("addedDate").is_some());
    }

    #[test]
    fn form_deserializes_without_id_as_create() {
        let form: CustomerForm = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","phone":"5551234567","city":"London"}"#,
        )
        .unwrap();

        assert_eq!(form.id, None);
        assert_eq!(form.input, sample_input());
    }

    #[test]
    fn edit_form_round_trips_record_fields() {
        let record = sample_input().into_record(CustomerId::new(), Utc::now());
        let form = CustomerForm::edit(&record);

        assert_eq!(form.id, Some(record.id));
        assert_eq!(form.email(), "ada@example.com");
        assert_eq!(form.phone(), "5551234567");
        assert_eq!(form.input.added_date, Some(record.added_date));
    }
}
