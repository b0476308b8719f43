// Context modules for theming and its errors
pub mod error;
pub mod theme;

pub use error::*;
pub use theme::*;
