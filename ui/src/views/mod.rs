mod storefront;
pub use storefront::Storefront;
