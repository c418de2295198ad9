//! # Configuration
//!
//! Startup configuration for the form workflow.
//!
//! Configuration is read once at startup and never changes at runtime;
//! the tax rate in particular is injected into the order at construction,
//! so there is no way to change it under a live order.

use tracing::warn;

use orderpad_core::{TaxRate, SALES_TAX_RATE};

/// Environment variable overriding the tax rate, as a percentage.
pub const TAX_RATE_VAR: &str = "ORDERPAD_TAX_RATE";

/// Form workflow configuration.
#[derive(Debug, Clone, Copy)]
pub struct FormConfig {
    /// Sales tax rate applied to every order this form creates.
    pub tax_rate: TaxRate,
}

impl Default for FormConfig {
    /// Default configuration: the standard 13% sales tax.
    fn default() -> Self {
        FormConfig {
            tax_rate: SALES_TAX_RATE,
        }
    }
}

impl FormConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ORDERPAD_TAX_RATE`: override the tax rate as a percentage in
    ///   `0..=100` (e.g., `"13"` or `"8.25"`); unparseable or out-of-range
    ///   values are logged and ignored, keeping the default
    pub fn from_env() -> Self {
        let mut config = FormConfig::default();

        if let Ok(raw) = std::env::var(TAX_RATE_VAR) {
            match raw.parse::<f64>() {
                Ok(pct) if (0.0..=100.0).contains(&pct) => {
                    config.tax_rate = TaxRate::from_percentage(pct);
                }
                _ => warn!(value = %raw, "ignoring invalid ORDERPAD_TAX_RATE"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_is_thirteen_percent() {
        assert_eq!(FormConfig::default().tax_rate.bps(), 1300);
    }

    // One test owns the env var: cargo runs tests in parallel threads and
    // the variable is process-global, so the cases must not be split up.
    #[test]
    fn test_from_env_tax_rate_override() {
        std::env::set_var(TAX_RATE_VAR, "8.25");
        assert_eq!(FormConfig::from_env().tax_rate.bps(), 825);

        // unparseable and out-of-range values keep the default
        std::env::set_var(TAX_RATE_VAR, "not a number");
        assert_eq!(FormConfig::from_env().tax_rate.bps(), 1300);

        std::env::set_var(TAX_RATE_VAR, "-5");
        assert_eq!(FormConfig::from_env().tax_rate.bps(), 1300);

        std::env::set_var(TAX_RATE_VAR, "250");
        assert_eq!(FormConfig::from_env().tax_rate.bps(), 1300);

        std::env::remove_var(TAX_RATE_VAR);
        assert_eq!(FormConfig::from_env().tax_rate.bps(), 1300);
    }
}
