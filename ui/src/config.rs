//! Storefront configuration.
//!
//! Availability, the hosted-checkout link and the unit price are injected into
//! the component tree instead of being compiled into the product section. The
//! embedded `store.toml` provides the defaults; `PENNING_IN_STOCK` and
//! `PENNING_CHECKOUT_URL` set at build time override them.

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

const EMBEDDED_STORE_TOML: &str = include_str!("../store.toml");

/// Hosted checkout page for the medal.
pub const DEFAULT_CHECKOUT_URL: &str = "https://buy.stripe.com/6oU00k9aVeQ60Q7gqN14403";

/// Base price in euros.
pub const DEFAULT_UNIT_PRICE_EUR: f64 = 89.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Whether "buy now" proceeds to checkout or shows the out-of-stock dialog.
    pub in_stock: bool,
    pub checkout_url: String,
    pub unit_price_eur: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            in_stock: false,
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            unit_price_eur: DEFAULT_UNIT_PRICE_EUR,
        }
    }
}

impl StoreConfig {
    /// Embedded defaults plus build-time overrides. Never fails: an invalid
    /// configuration is logged and replaced by [`StoreConfig::default`].
    pub fn load() -> Self {
        let loaded = Self::from_toml(EMBEDDED_STORE_TOML).and_then(|cfg| {
            cfg.with_overrides(
                option_env!("PENNING_IN_STOCK"),
                option_env!("PENNING_CHECKOUT_URL"),
            )
        });
        match loaded {
            Ok(cfg) => {
                tracing::info!(in_stock = cfg.in_stock, "store config loaded");
                cfg
            }
            Err(err) => {
                tracing::error!(%err, "invalid store config; using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply optional overrides for the stock flag and checkout URL.
    pub fn with_overrides(
        mut self,
        in_stock: Option<&str>,
        checkout_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = in_stock {
            self.in_stock = parse_flag("PENNING_IN_STOCK", raw)?;
        }
        if let Some(url) = checkout_url {
            self.checkout_url = url.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.checkout_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.checkout_url.clone(),
            source,
        })?;
        if url.scheme() != "https" {
            return Err(ConfigError::InsecureUrl(self.checkout_url.clone()));
        }
        if !self.unit_price_eur.is_finite() || self.unit_price_eur < 0.0 {
            return Err(ConfigError::InvalidPrice(self.unit_price_eur));
        }
        Ok(())
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}
