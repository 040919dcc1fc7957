//! Server-side renders of the storefront components, checking the markup
//! hooks that styling and accessibility checks depend on.

use dioxus::prelude::*;
use ui::components::{OutOfStockDialog, ProductSection};
use ui::config::StoreConfig;
use ui::core::catalog::PRODUCT_IMAGE;

fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn product_page() -> Element {
    use_context_provider(StoreConfig::default);
    rsx! { ProductSection {} }
}

fn dialog_closed() -> Element {
    rsx! { OutOfStockDialog { open: false, on_open_change: move |_: bool| {} } }
}

fn dialog_open() -> Element {
    rsx! { OutOfStockDialog { open: true, on_open_change: move |_: bool| {} } }
}

#[test]
fn section_carries_landmark_ids_and_roles() {
    let html = render(product_page);
    assert!(html.starts_with("<main"), "{html}");
    assert!(html.contains(r#"id="product""#));
    assert!(html.contains(r#"role="main""#));
    assert!(html.contains("<figure"));
    assert!(html.contains("<article"));
    assert!(html.contains("<header"));
    assert!(html.contains(r#"role="separator""#));
}

#[test]
fn specification_table_has_six_rows() {
    let html = render(product_page);
    assert_eq!(html.matches(r#"class="product-spec""#).count(), 6);
    assert_eq!(html.matches(r#"class="product-spec__value""#).count(), 6);
}

#[test]
fn price_is_rendered_in_euros() {
    let html = render(product_page);
    assert!(html.contains("€89.00"), "{html}");
}

#[test]
fn product_image_uses_fixed_path() {
    let html = render(product_page);
    assert!(html.contains(&format!(r#"src="{PRODUCT_IMAGE}""#)));
    assert!(html.contains(r#"loading="lazy""#));
    assert!(html.contains(r#"width="400""#));
    assert!(html.contains(r#"height="400""#));
}

#[test]
fn dialog_starts_hidden_on_the_page() {
    let html = render(product_page);
    assert!(!html.contains(r#"role="dialog""#));
}

#[test]
fn closed_dialog_renders_nothing() {
    let html = render(dialog_closed);
    assert!(!html.contains("dialog"), "{html}");
}

#[test]
fn open_dialog_is_a_modal() {
    let html = render(dialog_open);
    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains(r#"aria-modal="true""#));
    assert!(html.contains(r#"id="out-of-stock-title""#));
}
