use std::fs;
use std::path::{Path, PathBuf};

use dioxus::logger::tracing;

use crate::contexts::{ThemeError, ThemeResult};
use crate::theme::Theme;
use crate::utils::config::THEME_FILE_PATH;

/// Location of the theme overrides file in the home directory
pub fn theme_path() -> ThemeResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(ThemeError::HomeDirNotFound)?;
    Ok(home_dir.join(THEME_FILE_PATH))
}

/// Read a theme from a TOML file. Fields missing from the file keep their
/// default value.
pub fn load_theme_from(path: &Path) -> ThemeResult<Theme> {
    if !path.exists() {
        return Err(ThemeError::NotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Theme from the overrides file, falling back to the default theme.
pub fn load_theme() -> Theme {
    let path = match theme_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("{}, using default theme", e);
            return Theme::default();
        }
    };

    match load_theme_from(&path) {
        Ok(theme) => {
            tracing::info!("Loaded theme from {:?}", path);
            theme
        }
        Err(ThemeError::NotFound(_)) => {
            tracing::info!("No theme file found at {:?}, using defaults", path);
            Theme::default()
        }
        Err(e) => {
            tracing::warn!("Failed to load theme: {}, using defaults", e);
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_theme_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dioxus-search-bar-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_theme_from_file() {
        let path = temp_theme_file(
            "valid",
            "spacing = 4\n[transitions]\nshorter_ms = 150\n",
        );

        let theme = load_theme_from(&path).unwrap();
        assert_eq!(theme.spacing, 4);
        assert_eq!(theme.transitions.shorter_ms, 150);
        assert_eq!(theme.palette, Theme::default().palette);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_theme_missing_file() {
        let path = std::env::temp_dir().join("dioxus-search-bar-does-not-exist.toml");
        match load_theme_from(&path) {
            Err(ThemeError::NotFound(p)) => assert!(p.contains("does-not-exist")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_theme_invalid_file() {
        let path = temp_theme_file("invalid", "spacing = \"wide\"\n");

        assert!(matches!(load_theme_from(&path), Err(ThemeError::Parse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_theme_path_is_in_home_dir() {
        if let Ok(path) = theme_path() {
            assert!(path.ends_with(".dioxus-search-bar/theme.toml"));
        }
    }
}
