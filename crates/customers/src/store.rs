//! Customer record store.
//!
//! The store is a dumb container: it enforces identity (`id` assignment,
//! positional updates) but no business rules. Duplicate contact details and
//! phone shape are checked by callers before any mutation (see `validation`).

use chrono::Utc;
use tracing::debug;

use custdash_core::{CustomerId, Entity};

use crate::record::{CustomerInput, CustomerRecord};

/// Authoritative ordered collection of customer records.
///
/// Insertion order is display order. Consumers only ever receive clones.
pub trait CustomerStore {
    /// Assign a fresh id (and `added_date` if unset), append, return the stored record.
    fn add(&mut self, input: CustomerInput) -> CustomerRecord;

    /// Replace everything but `id`/`added_date` of the record with `record.id`, in place.
    ///
    /// Returns `false` and leaves the collection untouched when no such record exists.
    fn update(&mut self, record: &CustomerRecord) -> bool;

    /// Remove the record with `id`. No-op when absent.
    fn delete(&mut self, id: &CustomerId);

    /// Independent copy of the current collection, in insertion order.
    fn snapshot(&self) -> Vec<CustomerRecord>;

    fn get(&self, id: &CustomerId) -> Option<CustomerRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store, owned by whoever constructs it (no process-wide state).
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerStore {
    records: Vec<CustomerRecord>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &CustomerId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn add(&mut self, input: CustomerInput) -> CustomerRecord {
        let record = input.into_record(CustomerId::new(), Utc::now());
        debug!(customer_id = %record.id, "customer added");
        self.records.push(record.clone());
        record
    }

    fn update(&mut self, record: &CustomerRecord) -> bool {
        match self.position(&record.id) {
            Some(idx) => {
                self.records[idx].replace_details(record);
                debug!(customer_id = %record.id, "customer updated");
                true
            }
            None => {
                debug!(customer_id = %record.id, "update ignored: no such customer");
                false
            }
        }
    }

    fn delete(&mut self, id: &CustomerId) {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        if self.records.len() == before {
            debug!(customer_id = %id, "delete ignored: no such customer");
        } else {
            debug!(customer_id = %id, "customer deleted");
        }
    }

    fn snapshot(&self) -> Vec<CustomerRecord> {
        self.records.clone()
    }

    fn get(&self, id: &CustomerId) -> Option<CustomerRecord> {
        self.position(id).map(|idx| self.records[idx].clone())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
