use anyhow::Context;
use chrono::Utc;

use custdash_dashboard::Dashboard;
use custdash_dashboard::config::DashboardConfig;

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env();
    custdash_observability::init_with_default(&config.log_filter);

    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let mut dashboard = Dashboard::new(config);
    if let Some(summary) = dashboard.seed_from_config()? {
        tracing::info!(
            accepted = summary.accepted,
            rejected = summary.rejected.len(),
            "dashboard seeded"
        );
    }

    let report = dashboard.report(Utc::now());
    let json = serde_json::to_string_pretty(&report).context("failed to render report")?;
    println!("{json}");

    Ok(())
}
