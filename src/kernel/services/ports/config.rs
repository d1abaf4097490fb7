use crate::kernel::preview::DevicePreset;

use super::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceConfig {
    pub preview_delay_ms: u64,
    pub default_device: DevicePreset,
    /// When false (the default) closing a modified tab silently drops its edits.
    pub confirm_close_modified: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            preview_delay_ms: 100,
            default_device: DevicePreset::Desktop,
            confirm_close_modified: false,
        }
    }
}

impl WorkspaceConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        Self {
            preview_delay_ms: settings
                .preview
                .delay_ms
                .unwrap_or(defaults.preview_delay_ms),
            default_device: settings.preview.device.unwrap_or(defaults.default_device),
            confirm_close_modified: settings
                .editor
                .confirm_close_modified
                .unwrap_or(defaults.confirm_close_modified),
        }
    }

    pub fn preview_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.preview_delay_ms)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
