/// Configuration constants for the search bar
pub mod config {
    /// Placeholder shown when the caller does not provide one
    pub const DEFAULT_PLACEHOLDER: &str = "Enter Text";

    /// Theme overrides file, relative to the home directory
    pub const THEME_FILE_PATH: &str = ".dioxus-search-bar/theme.toml";

    /// Root element class
    pub const ROOT_CLASS: &str = "search-bar-root";

    /// Wrapper around the text input
    pub const SEARCH_CONTAINER_CLASS: &str = "search-bar-search-container";

    /// Text input class
    pub const INPUT_CLASS: &str = "search-bar-input";

    /// Shared class of both icon buttons
    pub const ICON_BUTTON_CLASS: &str = "search-bar-icon-button";

    /// Added to an icon button while it should not be visible
    pub const ICON_BUTTON_HIDDEN_CLASS: &str = "search-bar-icon-button-hidden";

    /// Extra class of the search icon button
    pub const SEARCH_ICON_BUTTON_CLASS: &str = "search-bar-search-icon-button";

    /// Wrapper around an icon inside a button
    pub const ICON_CLASS: &str = "search-bar-icon";
}

/// Join the enabled, non-empty class names with single spaces.
///
/// ```
/// use dioxus_search_bar::utils::class_names;
///
/// assert_eq!(class_names([("a", true), ("b", false), ("c", true)]), "a c");
/// ```
pub fn class_names<'a>(classes: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    classes
        .into_iter()
        .filter(|(name, enabled)| *enabled && !name.trim().is_empty())
        .map(|(name, _)| name.trim())
        .collect::<Vec<_>>()
        .join(" ")
}
