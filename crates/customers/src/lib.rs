//! Customers domain module.
//!
//! This crate contains the customer record store, the pre-mutation validation
//! rules, the aggregate statistics and search, and a small use-case service
//! that wires them together. Everything is deterministic, in-memory domain
//! logic (no IO, no HTTP, no persistence).

pub mod record;
pub mod search;
pub mod service;
pub mod statistics;
pub mod store;
pub mod validation;

pub use record::{CustomerForm, CustomerInput, CustomerRecord};
pub use search::{search, SearchOutcome};
pub use service::{CustomerService, Submission};
pub use statistics::{
    city_percentages, common_first_names, email_domain_distribution, recent_additions,
    top_cities, total_count, Share, StatsOptions, StatsReport, Tally, DEFAULT_RECENT_WINDOW_DAYS,
    DEFAULT_TOP_LIMIT, UNKNOWN_DOMAIN,
};
pub use store::{CustomerStore, InMemoryCustomerStore};
pub use validation::{exists_conflict, find_conflict, is_valid_phone, validate_form};
