//! Store configuration loaded from environment variables.
//!
//! Every setting has a hard default, so `StoreConfig::default()` works
//! without any environment at all and `from_env()` only overrides what is
//! actually set.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MORSHD_COUPON_CODE` - The single valid coupon code (default: MORSH-D)
//! - `MORSHD_COUPON_RATE_PCT` - Discount percentage, 0-100 (default: 20)
//! - `MORSHD_DELIVERY_FEE_LOW` - Flat fee in EGP for the low-fee city (default: 45)
//! - `MORSHD_DELIVERY_FEE_HIGH` - Flat fee in EGP everywhere else (default: 70)
//! - `MORSHD_FREE_DELIVERY_MULTI_ITEM` - Waive the fee when the cart holds
//!   more than one item (default: false)
//! - `MORSHD_WHATSAPP_NUMBER` - Destination number for order messages
//! - `META_PIXEL_ID` - Meta (Facebook) pixel ID

use thiserror::Error;

use morshd_core::Money;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront engine configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Coupon code and discount rate
    pub coupon: CouponConfig,
    /// Delivery fee tiers and policy
    pub delivery: DeliveryPolicy,
    /// WhatsApp number that receives order messages
    pub whatsapp_number: String,
    /// Analytics tracking configuration
    pub analytics: AnalyticsConfig,
}

/// The single valid coupon and its flat percentage discount.
///
/// Historical revisions of the store shipped two different code literals
/// ("MORSH-D" and "MD20"), both at 20%. The code is configuration here so
/// the choice is made at deploy time, not buried in logic.
#[derive(Debug, Clone)]
pub struct CouponConfig {
    /// The valid code, compared case-insensitively against user input
    pub code: String,
    /// Discount percentage applied to the subtotal (0-100)
    pub rate_percent: u8,
}

impl Default for CouponConfig {
    fn default() -> Self {
        Self {
            code: "MORSH-D".to_owned(),
            rate_percent: 20,
        }
    }
}

/// Two-tier flat delivery fee keyed by city.
#[derive(Debug, Clone)]
pub struct DeliveryPolicy {
    /// Fee for the designated low-fee city (Tanta)
    pub low_fee: Money,
    /// Fee for every other city, and for an empty city
    pub high_fee: Money,
    /// Waive the fee entirely when the cart holds more than one item.
    ///
    /// One revision of the store shipped this behavior, another always
    /// charged the flat fee. Off by default.
    pub free_multi_item: bool,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            low_fee: Money::new(45),
            high_fee: Money::new(70),
            free_multi_item: false,
        }
    }
}

/// Analytics and tracking pixel configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    /// Meta (Facebook) pixel ID
    pub meta_pixel_id: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            coupon: CouponConfig::default(),
            delivery: DeliveryPolicy::default(),
            whatsapp_number: "201013816187".to_owned(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable is optional and falls back to the built-in default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let rate_percent = parse_env("MORSHD_COUPON_RATE_PCT", defaults.coupon.rate_percent)?;
        if rate_percent > 100 {
            return Err(ConfigError::InvalidEnvVar(
                "MORSHD_COUPON_RATE_PCT".to_owned(),
                format!("must be 0-100 (got {rate_percent})"),
            ));
        }

        Ok(Self {
            coupon: CouponConfig {
                code: get_env_or_default("MORSHD_COUPON_CODE", &defaults.coupon.code),
                rate_percent,
            },
            delivery: DeliveryPolicy {
                low_fee: Money::new(parse_env(
                    "MORSHD_DELIVERY_FEE_LOW",
                    defaults.delivery.low_fee.amount(),
                )?),
                high_fee: Money::new(parse_env(
                    "MORSHD_DELIVERY_FEE_HIGH",
                    defaults.delivery.high_fee.amount(),
                )?),
                free_multi_item: parse_env_bool(
                    "MORSHD_FREE_DELIVERY_MULTI_ITEM",
                    defaults.delivery.free_multi_item,
                )?,
            },
            whatsapp_number: get_env_or_default("MORSHD_WHATSAPP_NUMBER", &defaults.whatsapp_number),
            analytics: AnalyticsConfig {
                meta_pixel_id: get_optional_env("META_PIXEL_ID"),
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Parse a boolean environment variable (`true`/`false`, `1`/`0`, `yes`/`no`).
fn parse_env_bool(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar(
                key.to_owned(),
                format!("expected a boolean (got '{other}')"),
            )),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.coupon.code, "MORSH-D");
        assert_eq!(config.coupon.rate_percent, 20);
        assert_eq!(config.delivery.low_fee, Money::new(45));
        assert_eq!(config.delivery.high_fee, Money::new(70));
        assert!(!config.delivery.free_multi_item);
        assert_eq!(config.whatsapp_number, "201013816187");
        assert!(config.analytics.meta_pixel_id.is_none());
    }

    #[test]
    fn test_parse_env_bool_values() {
        // Unset keys fall back to the default
        assert!(parse_env_bool("MORSHD_TEST_UNSET_BOOL", true).unwrap());
        assert!(!parse_env_bool("MORSHD_TEST_UNSET_BOOL", false).unwrap());
    }
}
