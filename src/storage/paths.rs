//! Per-platform application data directory:
//! - macOS: ~/Library/Application Support/songbook
//! - Linux: $XDG_DATA_HOME/songbook or ~/.local/share/songbook
//! - Windows: %APPDATA%\songbook

use std::path::PathBuf;

pub const APP_NAME: &str = "songbook";

/// The application data directory, if the environment names one.
pub fn default_app_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        app_dir_macos()
    }

    #[cfg(target_os = "linux")]
    {
        app_dir_linux()
    }

    #[cfg(target_os = "windows")]
    {
        app_dir_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn app_dir_macos() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join("Library/Application Support").join(APP_NAME))
}

#[cfg(target_os = "linux")]
fn app_dir_linux() -> Option<PathBuf> {
    match std::env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join(APP_NAME)),
        _ => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME)),
    }
}

#[cfg(target_os = "windows")]
fn app_dir_windows() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}
