//! A search bar widget for Dioxus: a text field with a search button and a clear button,
//! styled from a [`theme::Theme`].
//!
//! ```no_run
//! use dioxus::prelude::*;
//! use dioxus_search_bar::components::SearchBar;
//!
//! #[component]
//! fn Toolbar() -> Element {
//!     let mut query = use_signal(String::new);
//!
//!     rsx! {
//!         SearchBar {
//!             cancel_on_escape: true,
//!             on_request_search: move |text: String| query.set(text),
//!             on_cancel_search: move |_| query.set(String::new()),
//!         }
//!     }
//! }
//! ```

pub mod components;
pub mod config;
pub mod contexts;
pub mod search_state;
pub mod theme;
pub mod utils;
