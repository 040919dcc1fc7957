//! Stateless building blocks shared by the storefront components.

use dioxus::prelude::*;

#[component]
pub fn Button(
    #[props(default)] class: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button {class}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Box that keeps `width / height == ratio` for its content.
#[component]
pub fn AspectRatio(
    #[props(default = 1.0)] ratio: f64,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let padding = padding_percent(ratio);
    rsx! {
        div {
            class: "aspect-ratio {class}",
            style: "padding-bottom: {padding}%;",
            div { class: "aspect-ratio__content", {children} }
        }
    }
}

#[component]
pub fn Separator(#[props(default)] class: String) -> Element {
    rsx! {
        div {
            role: "separator",
            aria_orientation: "horizontal",
            class: "separator {class}",
        }
    }
}

/// Bottom padding (percent of width) that produces `ratio`. Degenerate ratios render square.
fn padding_percent(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        100.0 / ratio
    } else {
        100.0
    }
}
