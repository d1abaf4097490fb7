use crate::kernel::notice::Notices;
use crate::kernel::preview::PreviewState;
use crate::kernel::services::ports::WorkspaceConfig;
use crate::kernel::session::SessionState;
use crate::models::{build_file_tree, ExplorerTree, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub explorer_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            explorer_visible: true,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub session: SessionState,
    pub explorer: ExplorerTree,
    pub preview: PreviewState,
    pub ui: UiState,
    pub notices: Notices,
}

impl AppState {
    pub fn new(project: ProjectId, config: &WorkspaceConfig) -> Self {
        let session = SessionState::new(project).with_confirm_close(config.confirm_close_modified);
        let explorer = ExplorerTree::new(build_file_tree(session.files().records()));
        Self {
            session,
            explorer,
            preview: PreviewState::new(config.default_device),
            ui: UiState::default(),
            notices: Notices::default(),
        }
    }
}
