//! Semantic commands, independent of the key chord that triggers them.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // tabs and files
    Save,
    CloseTab,
    ForceCloseTab,
    NextTab,
    PrevTab,

    // preview
    RefreshPreview,
    OpenPreviewExternal,

    // layout
    ToggleExplorer,
    TogglePreview,

    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Save => "save",
            Command::CloseTab => "closeTab",
            Command::ForceCloseTab => "forceCloseTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::RefreshPreview => "refreshPreview",
            Command::OpenPreviewExternal => "openPreviewExternal",
            Command::ToggleExplorer => "toggleExplorer",
            Command::TogglePreview => "togglePreview",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "save" => Command::Save,
            "closeTab" => Command::CloseTab,
            "forceCloseTab" => Command::ForceCloseTab,
            "nextTab" => Command::NextTab,
            "prevTab" => Command::PrevTab,
            "refreshPreview" => Command::RefreshPreview,
            "openPreviewExternal" => Command::OpenPreviewExternal,
            "toggleExplorer" => Command::ToggleExplorer,
            "togglePreview" => Command::TogglePreview,
            other => Command::Custom(other.to_string()),
        }
    }

    pub fn is_tab_command(&self) -> bool {
        matches!(
            self,
            Command::Save
                | Command::CloseTab
                | Command::ForceCloseTab
                | Command::NextTab
                | Command::PrevTab
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
