//! Effective workspace configuration, rebuilt whenever settings are (re)loaded.

use crate::kernel::services::ports::{Settings, WorkspaceConfig};

pub struct ConfigService {
    workspace: WorkspaceConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            workspace: WorkspaceConfig::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            workspace: WorkspaceConfig::from_settings(settings),
        }
    }

    pub fn workspace(&self) -> &WorkspaceConfig {
        &self.workspace
    }

    pub fn set_preview_delay_ms(&mut self, delay_ms: u64) {
        self.workspace.preview_delay_ms = delay_ms;
    }

    pub fn set_confirm_close_modified(&mut self, confirm: bool) {
        self.workspace.confirm_close_modified = confirm;
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
