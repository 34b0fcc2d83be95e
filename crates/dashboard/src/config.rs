//! Environment-driven dashboard configuration.

use std::path::PathBuf;
use std::str::FromStr;

use custdash_customers::StatsOptions;

pub const ENV_TOP_LIMIT: &str = "CUSTDASH_TOP_LIMIT";
pub const ENV_RECENT_WINDOW_DAYS: &str = "CUSTDASH_RECENT_WINDOW_DAYS";
pub const ENV_LOG: &str = "CUSTDASH_LOG";
pub const ENV_SEED_FILE: &str = "CUSTDASH_SEED_FILE";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub stats: StatsOptions,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub seed_file: Option<PathBuf>,
    /// Malformed values that were replaced by defaults.
    ///
    /// Collected rather than logged because config is read before tracing is up.
    pub warnings: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            stats: StatsOptions::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_file: None,
            warnings: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        config.stats.top_limit = parse_or_default(
            ENV_TOP_LIMIT,
            get(ENV_TOP_LIMIT),
            config.stats.top_limit,
            |v: &usize| *v >= 1,
            &mut config.warnings,
        );
        config.stats.recent_window_days = parse_or_default(
            ENV_RECENT_WINDOW_DAYS,
            get(ENV_RECENT_WINDOW_DAYS),
            config.stats.recent_window_days,
            |v: &i64| *v >= 0,
            &mut config.warnings,
        );
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }
        config.seed_file = get(ENV_SEED_FILE).map(PathBuf::from);

        config
    }
}

fn parse_or_default<T, V>(
    key: &str,
    raw: Option<String>,
    default: T,
    valid: V,
    warnings: &mut Vec<String>,
) -> T
where
    T: FromStr + core::fmt::Display,
    V: Fn(&T) -> bool,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warnings.push(format!("{key}=`{raw}` is invalid; using default {default}"));
            default
        }
    }
}
