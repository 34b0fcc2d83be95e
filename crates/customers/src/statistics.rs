//! Aggregate statistics over a snapshot of customer records.
//!
//! Every function here is pure: it reads the slice it is given and returns
//! fresh values. Grouping follows first-encountered order in the input, and
//! ranked lists use a stable sort so ties keep that order.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use custdash_core::ValueObject;

use crate::record::CustomerRecord;

/// Bucket for emails without a domain part.
pub const UNKNOWN_DOMAIN: &str = "unknown";

pub const DEFAULT_TOP_LIMIT: usize = 5;
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 30;

/// A grouping key and how many records fall under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub key: String,
    pub count: usize,
}

impl ValueObject for Tally {}

impl core::fmt::Display for Tally {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.key, self.count)
    }
}

/// A grouping key and its share of all records, in percent (two decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub key: String,
    pub percentage: f64,
}

impl ValueObject for Share {}

impl core::fmt::Display for Share {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {:.2}%", self.key, self.percentage)
    }
}

pub fn total_count(records: &[CustomerRecord]) -> usize {
    records.len()
}

/// Most frequent cities, highest count first, at most `limit` entries.
pub fn top_cities(records: &[CustomerRecord], limit: usize) -> Vec<Tally> {
    ranked(group_counts(records, |r| r.city.as_str()), limit)
}

/// Share of records per distinct city. Empty input yields an empty list.
pub fn city_percentages(records: &[CustomerRecord]) -> Vec<Share> {
    shares(group_counts(records, |r| r.city.as_str()), records.len())
}

/// Most frequent first names (case-sensitive), highest count first.
pub fn common_first_names(records: &[CustomerRecord], limit: usize) -> Vec<Tally> {
    ranked(group_counts(records, |r| r.first_name.as_str()), limit)
}

/// Share of records per email domain (text after the first `@`).
///
/// Emails with no `@`, or nothing after it, are counted under [`UNKNOWN_DOMAIN`].
pub fn email_domain_distribution(records: &[CustomerRecord]) -> Vec<Share> {
    shares(group_counts(records, |r| email_domain(&r.email)), records.len())
}

/// Records added strictly after `now - window_days`, in their original order.
pub fn recent_additions(
    records: &[CustomerRecord],
    window_days: i64,
    now: DateTime<Utc>,
) -> Vec<CustomerRecord> {
    let cutoff = TimeDelta::try_days(window_days).and_then(|w| now.checked_sub_signed(w));

    records
        .iter()
        .filter(|r| match cutoff {
            Some(cutoff) => r.added_date > cutoff,
            // Window reaches past the representable range: everything is recent.
            None => true,
        })
        .cloned()
        .collect()
}

fn email_domain(email: &str) -> &str {
    match email.split_once('@') {
        Some((_, domain)) if !domain.is_empty() => domain,
        _ => UNKNOWN_DOMAIN,
    }
}

/// Count records per key, keeping keys in first-encountered order.
fn group_counts<'a, F>(records: &'a [CustomerRecord], key: F) -> Vec<(&'a str, usize)>
where
    F: Fn(&'a CustomerRecord) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for record in records {
        let k = key(record);
        match index.get(k) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(k, counts.len());
                counts.push((k, 1));
            }
        }
    }

    counts
}

fn ranked(mut counts: Vec<(&str, usize)>, limit: usize) -> Vec<Tally> {
    // `sort_by` is stable: equal counts keep first-encountered order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(key, count)| Tally {
            key: key.to_string(),
            count,
        })
        .collect()
}

fn shares(counts: Vec<(&str, usize)>, total: usize) -> Vec<Share> {
    if total == 0 {
        return Vec::new();
    }

    counts
        .into_iter()
        .map(|(key, count)| Share {
            key: key.to_string(),
            percentage: round2(100.0 * count as f64 / total as f64),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Knobs for the dashboard statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOptions {
    pub top_limit: usize,
    pub recent_window_days: i64,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_TOP_LIMIT,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }
}

/// Every dashboard statistic computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total: usize,
    pub top_cities: Vec<Tally>,
    pub city_percentages: Vec<Share>,
    pub common_first_names: Vec<Tally>,
    pub email_domains: Vec<Share>,
    pub recent_additions: Vec<CustomerRecord>,
    pub generated_at: DateTime<Utc>,
}

impl StatsReport {
    pub fn build(records: &[CustomerRecord], options: &StatsOptions, now: DateTime<Utc>) -> Self {
        Self {
            total: total_count(records),
            top_cities: top_cities(records, options.top_limit),
            city_percentages: city_percentages(records),
            common_first_names: common_first_names(records, options.top_limit),
            email_domains: email_domain_distribution(records),
            recent_additions: recent_additions(records, options.recent_window_days, now),
            generated_at: now,
        }
    }
}
