use dioxus::prelude::*;

use super::out_of_stock_dialog::OutOfStockDialog;
use super::primitives::{AspectRatio, Button, Separator};
use crate::config::StoreConfig;
use crate::core::catalog::{self, PRODUCT_IMAGE, PRODUCT_IMAGE_SIZE};
use crate::core::checkout::LinkOpenerHandle;
use crate::core::format::format_eur;
use crate::core::purchase::PurchaseFlow;
use crate::i18n;
use crate::t;

/// The product listing: photo, copy, specifications, price and the buy button.
///
/// Reads from context (all optional):
/// - `Signal<String>`: current language code, re-renders on change
/// - [`StoreConfig`]: availability, checkout URL and price
/// - [`LinkOpenerHandle`]: how the checkout link gets opened
#[component]
pub fn ProductSection() -> Element {
    i18n::init();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_code
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(i18n::current_language);
    tracing::debug!(%lang, "product section render");

    let config = try_use_context::<StoreConfig>().unwrap_or_default();
    let links = try_use_context::<LinkOpenerHandle>().unwrap_or_default();
    let mut flow = use_signal(|| PurchaseFlow::new(&config));

    let specifications = catalog::specification_rows(&i18n::LOADER);
    let price = format_eur(config.unit_price_eur);
    let quote = t!("product-quote");

    let on_buy = move |_: MouseEvent| {
        let outcome = flow.write().buy_now(links.opener());
        tracing::debug!(?outcome, "buy now clicked");
    };

    rsx! {
        main {
            section { id: "product", class: "section bg-white", role: "main",
                div { class: "container-custom",
                    div { class: "product-grid",
                        figure { class: "product-figure",
                            div { class: "aspect-square",
                                AspectRatio { ratio: 1.0, class: "bg-white",
                                    img {
                                        class: "product-figure__image",
                                        src: PRODUCT_IMAGE,
                                        alt: t!("product-image-alt"),
                                        "loading": "lazy",
                                        width: "{PRODUCT_IMAGE_SIZE}",
                                        height: "{PRODUCT_IMAGE_SIZE}",
                                    }
                                }
                            }
                        }

                        article { class: "product-details",
                            header { class: "product-copy",
                                h2 { class: "product-copy__title", {t!("product-title")} }
                                p { class: "product-copy__subtitle", {t!("product-subtitle")} }
                                p { class: "product-copy__paragraph", {t!("product-description1")} }
                                p { class: "product-copy__paragraph", {t!("product-description2")} }
                                p { class: "product-copy__quote", "\"{quote}\"" }
                                p { class: "product-copy__paragraph", {t!("product-description3")} }
                            }

                            div { class: "product-specs",
                                h3 { class: "product-specs__title", {t!("product-specifications")} }
                                div { class: "product-specs__grid",
                                    for (index, spec) in specifications.into_iter().enumerate() {
                                        div { key: "{index}", class: "product-spec",
                                            span { class: "product-spec__name", "{spec.name}" }
                                            span { class: "product-spec__value", "{spec.value}" }
                                        }
                                    }
                                }
                            }

                            Separator { class: "product-details__separator" }

                            div { class: "product-purchase",
                                div { class: "product-purchase__price",
                                    span { class: "product-price", "{price}" }
                                }
                                Button {
                                    class: "button--primary button--wide button--shine",
                                    onclick: on_buy,
                                    {t!("cart-add")}
                                }
                                div { class: "product-purchase__note",
                                    span { {t!("cart-quantity-note")} }
                                }
                            }
                        }
                    }
                }
            }

            OutOfStockDialog {
                open: flow.read().dialog_open(),
                on_open_change: move |open: bool| flow.write().set_dialog_open(open),
            }
        }
    }
}
