//! Shared UI crate for the geuzenpenning storefront. Components, the
//! translation layer and the purchase flow live here; platform crates only
//! provide context and launch.

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod views;

pub mod components {
    // Button, AspectRatio, Separator (components/primitives.rs)
    pub mod primitives;
    pub use primitives::{AspectRatio, Button, Separator};

    pub mod out_of_stock_dialog;
    pub use out_of_stock_dialog::OutOfStockDialog;

    pub mod product_section;
    pub use product_section::ProductSection;

    // Brand + language selector (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;
}
