use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::preview::DevicePreset;
use crate::kernel::session::SessionAction;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    Session(SessionAction),
    /// Explorer row activation: opens a file, toggles a folder.
    ExplorerActivate {
        path: String,
    },
    ExplorerToggle {
        path: String,
    },
    SetDevice(DevicePreset),
    /// The preview debounce delay elapsed.
    PreviewDue,
    PreviewExported {
        result: Result<PathBuf, String>,
    },
    ReloadFiles,
    Tick,
}
