//! Customer use-case service.
//!
//! Reframes the dashboard form flow as plain calls: validate against the
//! current snapshot, then mutate the injected store. Validation failures come
//! back as `DomainError` values and never leave partial state behind.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use custdash_core::{CustomerId, DomainResult};

use crate::record::{CustomerForm, CustomerRecord};
use crate::search::{search, SearchOutcome};
use crate::statistics::{StatsOptions, StatsReport};
use crate::store::CustomerStore;
use crate::validation::validate_form;

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(CustomerRecord),
    /// `found == false` means the id no longer existed; nothing changed.
    Updated { id: CustomerId, found: bool },
}

/// Use-case service wrapper over a customer store.
#[derive(Debug, Default)]
pub struct CustomerService<S: CustomerStore> {
    store: S,
}

impl<S: CustomerStore> CustomerService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate then create (`form.id == None`) or update (`Some(id)`).
    ///
    /// # Errors
    /// - `InvalidPhoneFormat` when the phone is not exactly 10 digits.
    /// - `DuplicateContactInfo` when another record holds the email or phone.
    pub fn submit(&mut self, form: CustomerForm) -> DomainResult<Submission> {
        let snapshot = self.store.snapshot();
        if let Err(err) = validate_form(&snapshot, &form) {
            warn!(customer_id = ?form.id, error = %err, "customer submission rejected");
            return Err(err);
        }

        let submission = match form.id {
            None => Submission::Added(self.store.add(form.input)),
            Some(id) => {
                let record = form.input.into_record(id, Utc::now());
                let found = self.store.update(&record);
                Submission::Updated { id, found }
            }
        };

        match &submission {
            Submission::Added(record) => {
                info!(customer_id = %record.id, "customer created")
            }
            Submission::Updated { id, found } => {
                info!(customer_id = %id, found, "customer edit applied")
            }
        }

        Ok(submission)
    }

    pub fn delete(&mut self, id: &CustomerId) {
        self.store.delete(id);
    }

    pub fn get(&self, id: &CustomerId) -> Option<CustomerRecord> {
        self.store.get(id)
    }

    pub fn snapshot(&self) -> Vec<CustomerRecord> {
        self.store.snapshot()
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        search(&self.store.snapshot(), query)
    }

    pub fn report(&self, options: &StatsOptions, now: DateTime<Utc>) -> StatsReport {
        StatsReport::build(&self.store.snapshot(), options, now)
    }
}
