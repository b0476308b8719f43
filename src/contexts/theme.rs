use dioxus::prelude::*;
use dioxus_hooks::use_reactive;

use crate::theme::Theme;

/// Makes `theme` available to every search bar below it.
#[component]
pub fn ThemeProvider(theme: Theme, children: Element) -> Element {
    let mut current = use_context_provider(|| Signal::new(theme.clone()));

    // Keep the context in step when the owner swaps the theme
    use_effect(use_reactive((&theme,), move |(theme,)| {
        if *current.peek() != theme {
            current.set(theme);
        }
    }));

    rsx! { {children} }
}

/// The theme provided by the nearest [`ThemeProvider`], or the default theme.
pub fn use_theme() -> Theme {
    match try_use_context::<Signal<Theme>>() {
        Some(theme) => theme(),
        None => Theme::default(),
    }
}
