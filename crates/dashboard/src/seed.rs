//! Seed data: a JSON array of customer forms submitted through the service.

use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use custdash_core::DomainError;
use custdash_customers::{CustomerForm, CustomerService, CustomerStore};

/// Outcome of applying a seed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub accepted: usize,
    /// `(index in the seed file, reason)` for every skipped entry.
    pub rejected: Vec<(usize, DomainError)>,
}

pub fn load_seed(path: &Path) -> anyhow::Result<Vec<CustomerForm>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse_seed(&raw).with_context(|| format!("failed to parse seed file {}", path.display()))
}

pub fn parse_seed(raw: &str) -> anyhow::Result<Vec<CustomerForm>> {
    let forms: Vec<CustomerForm> =
        serde_json::from_str(raw).context("seed must be a JSON array of customers")?;
    Ok(forms)
}

/// Submit each form as a new customer, skipping (and logging) rejected ones.
///
/// Seed entries must not carry an `id`: they only ever create records.
pub fn apply_seed<S: CustomerStore>(
    service: &mut CustomerService<S>,
    forms: Vec<CustomerForm>,
) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for (index, form) in forms.into_iter().enumerate() {
        let result = match form.id {
            Some(id) => Err(DomainError::validation(format!(
                "seed entry carries id {id}; seeds may only create customers"
            ))),
            None => service.submit(form).map(|_| ()),
        };

        match result {
            Ok(()) => summary.accepted += 1,
            Err(err) => {
                warn!(index, error = %err, "seed entry skipped");
                summary.rejected.push((index, err));
            }
        }
    }

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected.len(),
        "seed applied"
    );
    summary
}
