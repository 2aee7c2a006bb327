use chrono_tz::Tz;
use shared::error::{AppError, AppResult};
use std::path::PathBuf;

use crate::pricing::{PricingOptions, TrialPricing, UnsetAddOnDays};

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
/// | BUSINESS_TIMEZONE | Asia/Kolkata | Timezone used to derive "today" |
/// | TRIAL_PRICING | meal-doubling | `meal-doubling` or `plan-halving` |
/// | UNSET_ADDON_DAYS | all-days | `all-days` or `first-day` |
/// | DELIVERY_FEE | 0 | Delivery fee added at checkout |
/// | MANUAL_DELIVERY_FEE | 29 | Delivery fee for admin-created subscriptions |
///
/// # Example
///
/// ```ignore
/// TRIAL_PRICING=plan-halving LOG_LEVEL=debug subscription-quote draft.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub business_timezone: Tz,
    pub trial_pricing: TrialPricing,
    pub unset_add_on_days: UnsetAddOnDays,
    pub delivery_fee: f64,
    pub manual_delivery_fee: f64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults; malformed values are an error.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Used by tests to avoid touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let business_timezone = match lookup("BUSINESS_TIMEZONE") {
            Some(tz) => tz
                .parse::<Tz>()
                .map_err(|_| invalid("BUSINESS_TIMEZONE", &tz))?,
            None => chrono_tz::Asia::Kolkata,
        };

        let trial_pricing = match lookup("TRIAL_PRICING") {
            Some(v) => v.parse().map_err(|_| invalid("TRIAL_PRICING", &v))?,
            None => TrialPricing::default(),
        };

        let unset_add_on_days = match lookup("UNSET_ADDON_DAYS") {
            Some(v) => v.parse().map_err(|_| invalid("UNSET_ADDON_DAYS", &v))?,
            None => UnsetAddOnDays::default(),
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            business_timezone,
            trial_pricing,
            unset_add_on_days,
            delivery_fee: parse_fee(&lookup, "DELIVERY_FEE", 0.0)?,
            manual_delivery_fee: parse_fee(&lookup, "MANUAL_DELIVERY_FEE", 29.0)?,
        })
    }

    /// Calculator settings derived from this config
    pub fn pricing_options(&self) -> PricingOptions {
        PricingOptions {
            trial_pricing: self.trial_pricing,
            unset_add_on_days: self.unset_add_on_days,
            delivery_fee: self.delivery_fee,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            business_timezone: chrono_tz::Asia::Kolkata,
            trial_pricing: TrialPricing::default(),
            unset_add_on_days: UnsetAddOnDays::default(),
            delivery_fee: 0.0,
            manual_delivery_fee: 29.0,
        }
    }
}

fn parse_fee<F>(lookup: &F, key: &str, default: f64) -> AppResult<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(fee) if fee.is_finite() && fee >= 0.0 => Ok(fee),
            _ => Err(invalid(key, &raw)),
        },
        None => Ok(default),
    }
}

fn invalid(key: &str, value: &str) -> AppError {
    AppError::config(format!("Invalid value for {}: {}", key, value))
        .with_detail("key", key)
        .with_detail("value", value)
}

/// Load `.env` if present, returning the file that was read
///
/// Missing files are not an error; the process environment still applies.
/// Runs before logging is up, so callers log the outcome themselves.
pub fn setup_environment() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(config.is_development());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.business_timezone, chrono_tz::Asia::Kolkata);
        assert_eq!(config.trial_pricing, TrialPricing::MealDoubling);
        assert_eq!(config.unset_add_on_days, UnsetAddOnDays::AllDays);
        assert_eq!(config.delivery_fee, 0.0);
        assert_eq!(config.manual_delivery_fee, 29.0);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("BUSINESS_TIMEZONE", "Europe/Madrid"),
            ("TRIAL_PRICING", "plan-halving"),
            ("UNSET_ADDON_DAYS", "first-day"),
            ("DELIVERY_FEE", "15.5"),
            ("LOG_DIR", "  "),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.business_timezone, chrono_tz::Europe::Madrid);
        assert_eq!(config.log_dir, None);

        let options = config.pricing_options();
        assert_eq!(options.trial_pricing, TrialPricing::PlanHalving);
        assert_eq!(options.unset_add_on_days, UnsetAddOnDays::FirstDay);
        assert_eq!(options.delivery_fee, 15.5);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[("TRIAL_PRICING", "half")])).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::ConfigError);

        assert!(Config::from_lookup(lookup_from(&[("DELIVERY_FEE", "-1")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("BUSINESS_TIMEZONE", "Mars/Olympus")])).is_err());
    }
}
