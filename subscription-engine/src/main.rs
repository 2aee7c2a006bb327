//! subscription-quote
//!
//! Prices a subscription draft read as JSON from a file or stdin.
//!
//! ```text
//! subscription-quote draft.json
//! cat draft.json | subscription-quote
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{SubscriptionDraft, WeekendExclusion};
use std::io::Read;
use subscription_engine::core::{Config, setup_environment};
use subscription_engine::utils::time::validate_not_past;
use subscription_engine::{OrderPriceCalculator, OrderSummary, compute_end_date, init_logger_with_file};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    summary: OrderSummary,
    end_date: NaiveDate,
    weekend_exclusion: WeekendExclusion,
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read draft from stdin")?;
            Ok(buf)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read draft file {}", path))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env_file = setup_environment();
    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    match env_file {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        None => tracing::debug!("No .env file loaded"),
    }

    tracing::debug!(
        environment = %config.environment,
        trial_pricing = %config.trial_pricing,
        unset_add_on_days = %config.unset_add_on_days,
        "Configuration loaded"
    );

    let path = std::env::args().nth(1);
    let raw = read_input(path.as_deref())?;
    let draft: SubscriptionDraft = serde_json::from_str(&raw).context("Invalid draft JSON")?;

    let now = chrono::Utc::now();
    if let Err(e) = validate_not_past(draft.start_date, now, config.business_timezone) {
        tracing::warn!(error = %e, "Quoting a draft that starts in the past");
    }

    let calculator = OrderPriceCalculator::new(config.pricing_options());
    let summary = calculator.summarize(&draft, now);
    let end_date = compute_end_date(draft.start_date, summary.duration, draft.week_type);

    tracing::info!(
        payable = summary.payable_amount,
        duration = summary.duration,
        end = %end_date,
        "Draft priced"
    );

    let quote = Quote {
        summary,
        end_date,
        weekend_exclusion: draft.week_type.weekend_exclusion(),
    };
    println!("{}", serde_json::to_string_pretty(&quote)?);
    Ok(())
}
