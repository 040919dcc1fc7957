//! Error types shared across the storefront.

use thiserror::Error;

/// Failures while loading or validating [`StoreConfig`](crate::config::StoreConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("store config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("checkout URL `{url}` could not be parsed: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("checkout URL `{0}` must use https")]
    InsecureUrl(String),
    #[error("unit price must be a finite, non-negative amount (got {0})")]
    InvalidPrice(f64),
    #[error("`{name}` override `{value}` is not a boolean")]
    InvalidFlag { name: &'static str, value: String },
}

/// A request to open an external link that did not go through.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("the browser refused to open a new window (pop-up blocked?)")]
    Blocked,
    #[error("script bridge failed: {0}")]
    Bridge(String),
}

/// Language selection failures.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("`{0}` is not a valid language tag")]
    InvalidTag(String),
    #[error(transparent)]
    Embed(#[from] i18n_embed::I18nEmbedError),
}
