use crate::core::event::{Key, KeyCode, Modifiers};
use crate::core::Command;
use crate::kernel::services::ports::settings::Settings;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = "studio";
const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

/// Writes default settings to `path` unless a file is already there.
pub fn ensure_settings_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&get_settings_path()?)
}

/// Missing or malformed files yield `None`; the caller keeps its defaults.
pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
            None
        }
    }
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = Modifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            "super" | "meta" | "cmd" | "command" => modifiers.meta = true,
            _ => key_part = Some(part),
        }
    }
    let key_part = key_part?;
    let code = parse_key_code(key_part)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            modifiers.shift = true;
        }
        return Some(Key::char(ch, modifiers));
    }
    Some(Key::new(code, modifiers))
}

pub fn parse_command(value: &str) -> Command {
    Command::from_name(value)
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let name = match v_lc.as_str() {
        "enter" | "return" => "enter",
        "tab" => "tab",
        "esc" | "escape" => "escape",
        "backspace" => "backspace",
        "delete" | "del" => "delete",
        "up" | "arrowup" => "arrowup",
        "down" | "arrowdown" => "arrowdown",
        "left" | "arrowleft" => "arrowleft",
        "right" | "arrowright" => "arrowright",
        "home" => "home",
        "end" => "end",
        "pageup" => "pageup",
        "pagedown" => "pagedown",
        "space" => return Some(KeyCode::Char(' ')),
        _ if v_lc.starts_with('f') && v_lc.len() > 1 => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            return Some(KeyCode::Named(format!("f{n}")));
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            return Some(KeyCode::Char(ch));
        }
    };

    Some(KeyCode::Named(name.to_string()))
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"));
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
