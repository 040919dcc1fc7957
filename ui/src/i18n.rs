//! Internationalization (i18n) support for `penning-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - Fluent message formatting (through `i18n_embed::fluent`)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/penning-ui.ftl   (fallback/reference)
//!   nl-NL/penning-ui.ftl   (additional locale)
//! ```
//!
//! Every string that varies by language lives in the FTL files, including
//! specification values such as the coin's material. Components never branch
//! on the language code themselves.
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("product-title");
//! ```
//!
//! Code that needs a specific language without touching the global loader
//! (tests, previews) builds its own with [`loader_for`] and passes it to `fl!`.
//!
//! To add a new locale:
//! 1. Copy `en-US/penning-ui.ftl` to `i18n/<lang-id>/penning-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Register it in `tests/i18n_missing_keys.rs` and run the tests.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::error::I18nError;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("product-title")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "penning-ui";

/// Tag of the fallback (reference) locale.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

fn fallback_language() -> LanguageIdentifier {
    FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier")
}

/// Global language loader used with the `t!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, fallback_language()));

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "i18n languages selected"),
            Err(err) => {
                tracing::error!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch the global language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), I18nError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            tracing::debug!(tag, "ignoring unparsable language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    tracing::debug!(tag, "language switched");
    Ok(())
}

/// Build a standalone loader for `tag`, leaving the global loader untouched.
///
/// Unknown languages resolve to the fallback locale.
pub fn loader_for(tag: &str) -> Result<FluentLanguageLoader, I18nError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| I18nError::InvalidTag(tag.to_string()))?;
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
    i18n_embed::select(&loader, &Localizations, &[lang])?;
    Ok(loader)
}

/// Primary language currently selected on the global loader.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
