//! The components module contains the search bar and the pieces it is built from: the default
//! icons and the handle used to focus or blur the input from the owning component.

mod search_bar;
pub use search_bar::{SearchBar, SearchBarProps};

mod handle;
pub use handle::{use_search_bar_handle, SearchBarHandle};

mod icons;
pub use icons::{ClearIcon, IconProps, SearchIcon};
