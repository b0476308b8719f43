//! State of a search bar, independent of the DOM.
//!
//! Every user interaction goes through one of the transitions below, which
//! update the local value and report the [`SearchAction`]s the component should
//! forward to its caller. An empty result means nothing is forwarded.

use dioxus::prelude::Key;

/// Behavioural props consulted by every transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Suppresses every transition
    pub disabled: bool,
    /// Lets Escape clear the field and cancel the search
    pub cancel_on_escape: bool,
}

/// Outcome of a transition, one per caller callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    Changed(String),
    RequestSearch(String),
    CancelSearch,
    Focused,
    Blurred,
    /// A released key, reported after any search or cancel it triggered
    KeyUp(Key),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    value: String,
}

impl SearchState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value after the owner changed the `value` prop
    pub fn reset(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn search_icon_hidden(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn clear_icon_hidden(&self) -> bool {
        self.value.is_empty()
    }

    pub fn input(&mut self, text: impl Into<String>, options: SearchOptions) -> Option<SearchAction> {
        if options.disabled {
            return None;
        }
        self.value = text.into();
        Some(SearchAction::Changed(self.value.clone()))
    }

    pub fn focus(&self, options: SearchOptions) -> Option<SearchAction> {
        (!options.disabled).then_some(SearchAction::Focused)
    }

    /// Trims surrounding whitespace from the value.
    pub fn blur(&mut self, options: SearchOptions) -> Option<SearchAction> {
        if options.disabled {
            return None;
        }
        let trimmed = self.value.trim();
        if trimmed.len() != self.value.len() {
            self.value = trimmed.to_string();
        }
        Some(SearchAction::Blurred)
    }

    /// Handles a released key. Enter requests a search, Escape cancels when
    /// `cancel_on_escape` is set. Every key is then reported as
    /// [`SearchAction::KeyUp`].
    pub fn key_up(&mut self, key: &Key, options: SearchOptions) -> Vec<SearchAction> {
        if options.disabled {
            return Vec::new();
        }

        let shortcut = match key {
            Key::Enter => self.request_search(options),
            Key::Escape if options.cancel_on_escape => self.cancel(options),
            _ => None,
        };
        shortcut
            .into_iter()
            .chain([SearchAction::KeyUp(key.clone())])
            .collect()
    }

    /// The value is reported as typed, without trimming.
    pub fn request_search(&self, options: SearchOptions) -> Option<SearchAction> {
        if options.disabled {
            return None;
        }
        Some(SearchAction::RequestSearch(self.value.clone()))
    }

    pub fn cancel(&mut self, options: SearchOptions) -> Option<SearchAction> {
        if options.disabled {
            return None;
        }
        self.value.clear();
        Some(SearchAction::CancelSearch)
    }
}
