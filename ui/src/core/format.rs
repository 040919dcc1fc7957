//! Formatting helpers for presenting prices.

/// Euro amount with two decimals, e.g. `€89.00`. Identical in every locale.
pub fn format_eur(value: f64) -> String {
    format!("€{value:.2}")
}
