use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Imperative focus control over the text input of a [`SearchBar`](super::SearchBar).
///
/// Create one with [`use_search_bar_handle`] and pass it as the `handle` prop.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchBarHandle {
    input: Signal<Option<Rc<MountedData>>>,
}

/// Create a handle owned by the calling component
pub fn use_search_bar_handle() -> SearchBarHandle {
    SearchBarHandle {
        input: use_signal(|| None),
    }
}

impl SearchBarHandle {
    pub(crate) fn attach(&mut self, input: Rc<MountedData>) {
        self.input.set(Some(input));
    }

    /// Whether the search bar input has been mounted yet
    pub fn is_mounted(&self) -> bool {
        self.input.peek().is_some()
    }

    /// Move keyboard focus into the input
    pub fn focus(&self) {
        self.set_focus(true);
    }

    /// Move keyboard focus out of the input
    pub fn blur(&self) {
        self.set_focus(false);
    }

    fn set_focus(&self, focused: bool) {
        let Some(input) = (*self.input.peek()).clone() else {
            tracing::debug!("Search bar input not mounted, ignoring focus change");
            return;
        };

        spawn(async move {
            if let Err(e) = input.set_focus(focused).await {
                tracing::warn!("Failed to change search bar focus: {:?}", e);
            }
        });
    }
}
