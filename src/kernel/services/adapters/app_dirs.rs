//! Per-user data directories:
//! - macOS: ~/Library/Application Support/studio/{logs,exports}
//! - Linux: $XDG_DATA_HOME/studio/... or ~/.local/share/studio/...
//! - Windows: %APPDATA%\studio\...

use std::path::PathBuf;

const APP_NAME: &str = "studio";
const LOG_DIR: &str = "logs";
const EXPORT_DIR: &str = "exports";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        match std::env::var("XDG_DATA_HOME") {
            Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join(APP_NAME)),
            _ => std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME)),
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn get_export_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(EXPORT_DIR))
}

fn ensure(dir: Option<PathBuf>, what: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Cannot determine {what} directory"),
        )
    })?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure(get_log_dir(), "log")
}

pub fn ensure_export_dir() -> std::io::Result<PathBuf> {
    ensure(get_export_dir(), "export")
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/app_dirs.rs"]
mod tests;
