use dioxus::prelude::*;

use crate::components::{ProductSection, SiteHeader};

/// The whole shop page. Platforms supply the language signal, store config
/// and link opener through context before rendering this.
#[component]
pub fn Storefront() -> Element {
    rsx! {
        div { class: "page page-storefront",
            SiteHeader {}
            ProductSection {}
        }
    }
}
