use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::config::StoreConfig;
use ui::core::checkout::LinkOpenerHandle;
use ui::i18n;
use ui::views::Storefront;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    // `launch` falls back to its own default subscriber if this one is refused.
    let _ = dioxus::logger::init(log_level());
    dioxus::launch(App);
}

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global reactive language code; SiteHeader writes it, components read it.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(StoreConfig::load);
    use_context_provider(LinkOpenerHandle::default);

    rsx! {
        document::Title { "Geuzenpenning" }
        document::Style { "{THEME_CSS}" }

        Storefront {}
    }
}
