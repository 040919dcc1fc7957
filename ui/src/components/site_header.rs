use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Page header with the brand mark and the language selector.
///
/// Selecting a language switches the global loader and then writes the new
/// code into the shared `Signal<String>` context (when the platform provided
/// one), which re-renders every component that reads it.
#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code (if provided).
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    tracing::debug!(lang = %lang_marker, "site header render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, tag = %val, "language switch failed"),
        }
    };

    rsx! {
        header {
            id: "site-header",
            class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    span { class: "site-header__brand-mark", {t!("brand-name")} }
                    span { class: "site-header__tagline", {t!("tagline")} }
                }

                if show_switcher {
                    div { class: "site-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
