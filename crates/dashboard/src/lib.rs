//! `custdash-dashboard` — wiring for the customer dashboard.
//!
//! Owns the application lifecycle: configuration, the injected store,
//! optional seed data, and the statistics report handed to a presentation layer.

pub mod config;
pub mod seed;

use chrono::{DateTime, Utc};
use tracing::info;

use custdash_customers::{CustomerService, InMemoryCustomerStore, StatsReport};

use crate::config::DashboardConfig;
use crate::seed::{apply_seed, load_seed, SeedSummary};

/// The dashboard application: one owned store plus its configuration.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    customers: CustomerService<InMemoryCustomerStore>,
}

impl Dashboard {
    /// Construct with an empty in-memory store.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            customers: CustomerService::new(InMemoryCustomerStore::new()),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn customers(&self) -> &CustomerService<InMemoryCustomerStore> {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerService<InMemoryCustomerStore> {
        &mut self.customers
    }

    /// Apply the configured seed file, if any.
    pub fn seed_from_config(&mut self) -> anyhow::Result<Option<SeedSummary>> {
        let Some(path) = self.config.seed_file.clone() else {
            return Ok(None);
        };

        info!(path = %path.display(), "loading seed file");
        let forms = load_seed(&path)?;
        Ok(Some(apply_seed(&mut self.customers, forms)))
    }

    /// Statistics for the current snapshot using the configured options.
    pub fn report(&self, now: DateTime<Utc>) -> StatsReport {
        self.customers.report(&self.config.stats, now)
    }
}
