use std::fmt;

/// Errors raised while loading theme overrides
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// Error when the theme file does not exist
    NotFound(String),
    /// Error when the home directory cannot be determined
    HomeDirNotFound,
    /// Error when the theme file is not valid TOML for a theme
    Parse(String),
    /// IO related errors
    Io(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::NotFound(path) => write!(f, "Theme file not found: {}", path),
            ThemeError::HomeDirNotFound => write!(f, "Home directory not found"),
            ThemeError::Parse(msg) => write!(f, "Invalid theme file: {}", msg),
            ThemeError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(err: std::io::Error) -> Self {
        ThemeError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        ThemeError::Parse(err.to_string())
    }
}

/// Result type for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;
