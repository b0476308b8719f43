use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};

use dioxus_search_bar::components::{use_search_bar_handle, SearchBar};
use dioxus_search_bar::config;
use dioxus_search_bar::contexts::ThemeProvider;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Search Bar")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Theme overrides are read once at startup
    let theme = use_hook(config::load_theme);
    let handle = use_search_bar_handle();

    let mut value = use_signal(String::new);
    let mut typed = use_signal(String::new);
    let mut disabled = use_signal(|| false);
    let mut history = use_signal(Vec::<String>::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ThemeProvider { theme: theme,
            div { class: "demo-container",
                h1 { "Search" }

                SearchBar {
                    value: value(),
                    placeholder: "Search the catalogue...",
                    cancel_on_escape: true,
                    disabled: disabled(),
                    style: "max-width: 800px; margin: 0 auto;",
                    handle: handle,
                    on_change: move |text: String| typed.set(text),
                    on_request_search: move |text: String| {
                        tracing::info!("Search requested: {}", text);
                        history.write().push(text);
                    },
                    on_cancel_search: move |_| {
                        tracing::info!("Search cancelled");
                        typed.set(String::new());
                    },
                }

                div { class: "demo-controls",
                    button { onclick: move |_| handle.focus(), "Focus" }
                    button { onclick: move |_| handle.blur(), "Blur" }
                    button {
                        onclick: move |_| disabled.set(!disabled()),
                        if disabled() { "Enable" } else { "Disable" }
                    }
                    button {
                        onclick: move |_| value.set("dioxus".to_string()),
                        "Prefill"
                    }
                }

                p { class: "demo-status", "Typing: {typed}" }

                ul { class: "demo-history",
                    for query in history() {
                        li { "{query}" }
                    }
                }
            }
        }
    }
}
