//! Platform-agnostic storefront logic: product facts, price formatting and
//! the purchase flow behind the "buy now" button.

pub mod catalog;
pub mod checkout;
pub mod format;
pub mod purchase;
