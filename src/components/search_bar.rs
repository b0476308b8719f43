use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_hooks::use_reactive;

use super::handle::SearchBarHandle;
use super::icons::{ClearIcon, SearchIcon};
use crate::contexts::use_theme;
use crate::search_state::{SearchAction, SearchOptions, SearchState};
use crate::utils::class_names;
use crate::utils::config::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchBarProps {
    /// Initial text; changing it resets the field
    #[props(default, into)]
    value: String,
    #[props(default = DEFAULT_PLACEHOLDER.to_string(), into)]
    placeholder: String,
    /// Disables the input and both icon buttons
    #[props(default)]
    disabled: bool,
    /// Let Escape clear the field and cancel the search
    #[props(default)]
    cancel_on_escape: bool,
    search_icon: Option<Element>,
    close_icon: Option<Element>,
    /// Fired with the new text on every keystroke
    on_change: Option<EventHandler<String>>,
    /// Fired with the current text on Enter or a search icon click
    on_request_search: Option<EventHandler<String>>,
    /// Fired after the field was cleared
    on_cancel_search: Option<EventHandler<()>>,
    on_focus: Option<EventHandler<()>>,
    on_blur: Option<EventHandler<()>>,
    /// Every released key, after Enter and Escape were handled
    on_key_up: Option<EventHandler<Key>>,
    /// Appended to the root classes
    #[props(default, into)]
    class: String,
    /// Inline style of the root element
    #[props(default, into)]
    style: String,
    handle: Option<SearchBarHandle>,
}

#[derive(Clone, Copy)]
struct Callbacks {
    on_change: Option<EventHandler<String>>,
    on_request_search: Option<EventHandler<String>>,
    on_cancel_search: Option<EventHandler<()>>,
    on_focus: Option<EventHandler<()>>,
    on_blur: Option<EventHandler<()>>,
    on_key_up: Option<EventHandler<Key>>,
}

impl Callbacks {
    fn dispatch(&self, actions: impl IntoIterator<Item = SearchAction>) {
        for action in actions {
            self.call(action);
        }
    }

    fn call(&self, action: SearchAction) {
        match action {
            SearchAction::Changed(text) => {
                if let Some(handler) = self.on_change {
                    handler.call(text);
                }
            }
            SearchAction::RequestSearch(text) => {
                tracing::debug!("Search requested: {:?}", text);
                if let Some(handler) = self.on_request_search {
                    handler.call(text);
                }
            }
            SearchAction::CancelSearch => {
                tracing::debug!("Search cancelled");
                if let Some(handler) = self.on_cancel_search {
                    handler.call(());
                }
            }
            SearchAction::Focused => {
                if let Some(handler) = self.on_focus {
                    handler.call(());
                }
            }
            SearchAction::Blurred => {
                if let Some(handler) = self.on_blur {
                    handler.call(());
                }
            }
            SearchAction::KeyUp(key) => {
                if let Some(handler) = self.on_key_up {
                    handler.call(key);
                }
            }
        }
    }
}

/// Text field with a search button, shown while the field is empty, and a
/// clear button, shown while it is not.
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let theme = use_theme();
    let mut state = use_signal(|| SearchState::new(props.value.clone()));

    use_effect(use_reactive((&props.value,), move |(value,)| {
        if state.peek().value() != value {
            state.write().reset(value);
        }
    }));

    let options = SearchOptions {
        disabled: props.disabled,
        cancel_on_escape: props.cancel_on_escape,
    };
    let callbacks = Callbacks {
        on_change: props.on_change,
        on_request_search: props.on_request_search,
        on_cancel_search: props.on_cancel_search,
        on_focus: props.on_focus,
        on_blur: props.on_blur,
        on_key_up: props.on_key_up,
    };
    let handle = props.handle;

    let current = state.read().clone();
    let value = current.value().to_string();
    let root_class = class_names([(ROOT_CLASS, true), (props.class.as_str(), true)]);
    let search_button_class = class_names([
        (ICON_BUTTON_CLASS, true),
        (SEARCH_ICON_BUTTON_CLASS, true),
        (ICON_BUTTON_HIDDEN_CLASS, current.search_icon_hidden()),
    ]);
    let clear_button_class = class_names([
        (ICON_BUTTON_CLASS, true),
        (ICON_BUTTON_HIDDEN_CLASS, current.clear_icon_hidden()),
    ]);
    let root_style = (!props.style.is_empty()).then(|| props.style.clone());
    let search_icon = props
        .search_icon
        .clone()
        .unwrap_or_else(|| rsx! { SearchIcon {} });
    let close_icon = props
        .close_icon
        .clone()
        .unwrap_or_else(|| rsx! { ClearIcon {} });

    rsx! {
        style { {theme.stylesheet()} }
        div { class: "{root_class}", style: root_style,
            div { class: SEARCH_CONTAINER_CLASS,
                input {
                    class: INPUT_CLASS,
                    r#type: "text",
                    value: "{value}",
                    placeholder: "{props.placeholder}",
                    disabled: props.disabled,
                    oninput: move |evt| {
                        let action = state.write().input(evt.value(), options);
                        callbacks.dispatch(action);
                    },
                    onkeyup: move |evt| {
                        let actions = state.write().key_up(&evt.key(), options);
                        callbacks.dispatch(actions);
                    },
                    onfocus: move |_| {
                        let action = state.read().focus(options);
                        callbacks.dispatch(action);
                    },
                    onblur: move |_| {
                        let action = state.write().blur(options);
                        callbacks.dispatch(action);
                    },
                    onmounted: move |evt| {
                        if let Some(mut handle) = handle {
                            handle.attach(evt.data());
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "{search_button_class}",
                aria_label: "Search",
                disabled: props.disabled,
                onclick: move |_| {
                    let action = state.read().request_search(options);
                    callbacks.dispatch(action);
                },
                span { class: ICON_CLASS, {search_icon} }
            }
            button {
                r#type: "button",
                class: "{clear_button_class}",
                aria_label: "Clear",
                disabled: props.disabled,
                onclick: move |_| {
                    let action = state.write().cancel(options);
                    callbacks.dispatch(action);
                },
                span { class: ICON_CLASS, {close_icon} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::use_search_bar_handle;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Rendered markup without the embedded stylesheet
    fn markup(html: &str) -> String {
        match (html.find("<style"), html.find("</style>")) {
            (Some(start), Some(end)) => {
                format!("{}{}", &html[..start], &html[end + "</style>".len()..])
            }
            _ => html.to_string(),
        }
    }

    #[test]
    fn test_empty_bar_shows_search_icon() {
        let html = markup(&render(|| rsx! { SearchBar {} }));

        assert!(html.contains(r#"class="search-bar-icon-button search-bar-search-icon-button""#));
        assert!(html.contains(r#"class="search-bar-icon-button search-bar-icon-button-hidden""#));
        assert!(html.contains(r#"placeholder="Enter Text""#));
        assert!(html.contains(r#"class="search-bar-root""#));
    }

    #[test]
    fn test_filled_bar_shows_clear_icon() {
        let html = markup(&render(|| rsx! { SearchBar { value: "abc" } }));

        assert!(html.contains(
            r#"class="search-bar-icon-button search-bar-search-icon-button search-bar-icon-button-hidden""#
        ));
        assert!(html.contains(r#"class="search-bar-icon-button""#));
        assert!(html.contains(r#"value="abc""#));
    }

    #[test]
    fn test_presentation_overrides_pass_through() {
        let html = markup(&render(|| {
            rsx! {
                SearchBar {
                    class: "wide",
                    style: "max-width: 800px",
                    placeholder: "Find pods",
                }
            }
        }));

        assert!(html.contains(r#"class="search-bar-root wide""#));
        assert!(html.contains(r#"style="max-width: 800px""#));
        assert!(html.contains(r#"placeholder="Find pods""#));
    }

    #[test]
    fn test_custom_icons_are_wrapped() {
        let html = markup(&render(|| {
            rsx! {
                SearchBar {
                    search_icon: rsx! { b { "find" } },
                    close_icon: rsx! { b { "reset" } },
                }
            }
        }));

        assert!(html.contains("<b>find</b>"));
        assert!(html.contains("<b>reset</b>"));
        assert_eq!(html.matches(r#"class="search-bar-icon""#).count(), 2);
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_default_icons_are_svg() {
        let html = markup(&render(|| rsx! { SearchBar {} }));
        assert_eq!(html.matches("<svg").count(), 2);
    }

    #[test]
    fn test_disabled_bar_disables_controls() {
        let html = markup(&render(|| rsx! { SearchBar { disabled: true } }));

        // The input and both icon buttons
        assert_eq!(html.matches("disabled").count(), 3);
        let input = &html[html.find("<input").unwrap()..];
        assert!(input[..input.find('>').unwrap()].contains("disabled"));
        for button in html.split("<button").skip(1) {
            assert!(button[..button.find('>').unwrap()].contains("disabled"));
        }
    }

    thread_local! {
        static OWNER_VALUE: std::cell::Cell<Option<Signal<String>>> =
            const { std::cell::Cell::new(None) };
    }

    #[test]
    fn test_value_prop_change_resets_field() {
        let mut dom = VirtualDom::new(|| {
            let value = use_signal(|| "first".to_string());
            OWNER_VALUE.with(|cell| cell.set(Some(value)));
            rsx! { SearchBar { value: value() } }
        });
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains(r#"value="first""#));

        let mut value = OWNER_VALUE.with(|cell| cell.get()).unwrap();
        dom.in_runtime(|| value.set("second".to_string()));
        // One pass for the owner, one for the effect resetting the field
        for _ in 0..2 {
            dom.process_events();
            let _ = dom.render_immediate_to_vec();
        }

        let html = markup(&dioxus_ssr::render(&dom));
        assert!(html.contains(r#"value="second""#));
        assert!(!html.contains(r#"value="first""#));
    }

    #[test]
    fn test_stylesheet_uses_provided_theme() {
        use crate::contexts::ThemeProvider;
        use crate::theme::Theme;

        let html = render(|| {
            let theme = Theme {
                spacing: 10,
                ..Theme::default()
            };
            rsx! {
                ThemeProvider { theme: theme,
                    SearchBar {}
                }
            }
        });

        assert!(html.contains("height: 60px;"));
    }

    #[test]
    fn test_unmounted_handle_is_noop() {
        let html = render(|| {
            let handle = use_search_bar_handle();
            assert!(!handle.is_mounted());
            handle.focus();
            handle.blur();
            rsx! { SearchBar { handle: handle } }
        });

        assert!(html.contains("search-bar-root"));
    }
}
