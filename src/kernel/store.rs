use crate::core::Command;
use crate::kernel::notice::Notice;
use crate::kernel::preview::{compose_document, EntryFiles, PreviewInputs};
use crate::kernel::session::SessionAction;
use crate::models::build_file_tree;

use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.state.notices.drain()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let files_version = self.state.session.files_version();
        let active = self.state.session.active_path().map(str::to_string);
        let notices = self.state.notices.pushed();

        let (mut state_changed, mut effects) = match action {
            Action::RunCommand(command) => self.dispatch_command(command),
            Action::Session(action) => self
                .state
                .session
                .dispatch_action(action, &mut self.state.notices),
            Action::ExplorerActivate { path } => {
                if self.state.session.files().is_folder(&path) {
                    (self.state.explorer.toggle_expand(&path), Vec::new())
                } else {
                    self.state
                        .session
                        .dispatch_action(SessionAction::OpenFile { path }, &mut self.state.notices)
                }
            }
            Action::ExplorerToggle { path } => (self.state.explorer.toggle_expand(&path), Vec::new()),
            Action::SetDevice(device) => {
                if self.state.preview.set_device(device) {
                    let effects = self.state.preview.frame().map(Effect::RenderPreview);
                    (true, effects.into_iter().collect())
                } else {
                    (false, Vec::new())
                }
            }
            Action::PreviewDue => match self.state.preview.render() {
                Some(frame) => {
                    tracing::debug!(bytes = frame.document.len(), "preview rendered");
                    (true, vec![Effect::RenderPreview(frame)])
                }
                None => (false, Vec::new()),
            },
            Action::PreviewExported { result } => {
                let notice = match result {
                    Ok(path) => Notice::info(format!("Preview written to {}", path.display())),
                    Err(error) => Notice::error(format!("Failed to open preview: {error}")),
                };
                self.state.notices.push(notice);
                (false, Vec::new())
            }
            Action::ReloadFiles => {
                let project = self.state.session.project().clone();
                (false, vec![Effect::ListFiles { project }])
            }
            Action::Tick => (false, Vec::new()),
        };

        if self.state.session.files_version() != files_version {
            let tree = build_file_tree(self.state.session.files().records());
            self.state.explorer.replace(tree);
            state_changed = true;
        }
        if self.state.session.active_path().map(str::to_string) != active {
            if let Some(path) = self.state.session.active_path() {
                self.state.explorer.reveal(path);
            }
            state_changed = true;
        }
        if self.sync_preview_inputs() {
            effects.push(Effect::SchedulePreview);
        }
        state_changed |= self.state.notices.pushed() != notices;

        DispatchResult {
            effects,
            state_changed,
        }
    }

    fn dispatch_command(&mut self, command: Command) -> (bool, Vec<Effect>) {
        if command.is_tab_command() {
            return self
                .state
                .session
                .apply_command(&command, &mut self.state.notices);
        }
        match command {
            Command::RefreshPreview => {
                self.state.preview.request_refresh();
                match self.state.preview.render() {
                    Some(frame) => (true, vec![Effect::RenderPreview(frame)]),
                    None => (false, Vec::new()),
                }
            }
            Command::OpenPreviewExternal => {
                let document = compose_document(&self.preview_inputs());
                (false, vec![Effect::ExportPreview { document }])
            }
            Command::ToggleExplorer => {
                self.state.ui.explorer_visible = !self.state.ui.explorer_visible;
                (true, Vec::new())
            }
            Command::TogglePreview => {
                self.state.preview.toggle_visible();
                (true, Vec::new())
            }
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled command");
                (false, Vec::new())
            }
            _ => (false, Vec::new()),
        }
    }

    /// Current (unsaved-over-persisted) contents of the entry files.
    pub fn preview_inputs(&self) -> PreviewInputs {
        let session = &self.state.session;
        EntryFiles::select(session.files()).resolve(|path| session.resolve_content(path))
    }

    fn sync_preview_inputs(&mut self) -> bool {
        let inputs = self.preview_inputs();
        self.state.preview.observe(inputs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
