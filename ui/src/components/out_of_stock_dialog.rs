use dioxus::prelude::*;

use super::primitives::Button;
use crate::t;

/// Overlay telling the visitor the medal is sold out.
///
/// Visibility is controlled by the parent: the dialog only ever asks to be
/// closed through `on_open_change(false)` (backdrop click, close button, Escape).
#[component]
pub fn OutOfStockDialog(open: bool, on_open_change: EventHandler<bool>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            role: "presentation",
            onclick: move |_| on_open_change.call(false),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_open_change.call(false);
                }
            },
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "out-of-stock-title",
                tabindex: "-1",
                onmounted: move |evt| async move {
                    // Focus makes Escape reach the overlay.
                    if let Err(err) = evt.set_focus(true).await {
                        tracing::debug!(?err, "could not focus out-of-stock dialog");
                    }
                },
                onclick: move |evt| evt.stop_propagation(),
                h2 { id: "out-of-stock-title", class: "dialog__title", {t!("out-of-stock-title")} }
                p { class: "dialog__body", {t!("out-of-stock-body")} }
                div { class: "dialog__actions",
                    Button {
                        class: "button--primary",
                        onclick: move |_| on_open_change.call(false),
                        {t!("out-of-stock-close")}
                    }
                }
            }
        }
    }
}
