//! Workbench: owns the store, the async runtime and the keybindings, runs
//! effects and debounces preview renders.
//!
//! The host calls `handle_key` / `dispatch` for input and `tick` from its
//! event loop; collaborator replies arrive on the runtime channel and are
//! dispatched from `tick`.

use crate::core::{Command, Key};
use crate::kernel::preview::PreviewFrame;
use crate::kernel::services::adapters::{
    ensure_settings_file, load_settings, AppMessage, AsyncRuntime, ConfigService,
    KeybindingService,
};
use crate::kernel::services::ports::{FileCollaborator, Settings};
use crate::kernel::{Action, AppState, Effect, Notice, Store};
use crate::models::ProjectId;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Instant;

const MAX_MESSAGE_DRAIN_PER_TICK: usize = 256;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The chord is bound; the host should suppress its default handling.
    pub handled: bool,
    pub command: Option<Command>,
    pub state_changed: bool,
}

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    keybindings: KeybindingService,
    config: ConfigService,
    preview_deadline: Option<Instant>,
    frame: Option<PreviewFrame>,
}

impl Workbench {
    /// Builds a workbench with the user's settings file applied.
    pub fn new(project: ProjectId, files: Arc<dyn FileCollaborator>) -> std::io::Result<Self> {
        let settings = if cfg!(test) {
            None
        } else {
            if let Err(e) = ensure_settings_file() {
                tracing::warn!(error = %e, "ensure_settings_file failed");
            }
            load_settings()
        };
        Self::with_settings(project, files, settings.unwrap_or_default())
    }

    pub fn with_settings(
        project: ProjectId,
        files: Arc<dyn FileCollaborator>,
        settings: Settings,
    ) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx, files)?;
        let config = ConfigService::from_settings(&settings);
        let mut keybindings = KeybindingService::with_defaults();
        let applied = keybindings.apply_rules(&settings.keybindings);
        if applied > 0 {
            tracing::info!(applied, "keybinding rules applied");
        }

        let store = Store::new(AppState::new(project, config.workspace()));
        let mut workbench = Self {
            store,
            runtime,
            rx,
            keybindings,
            config,
            preview_deadline: None,
            frame: None,
        };
        workbench.dispatch(Action::ReloadFiles);
        Ok(workbench)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn config(&self) -> &ConfigService {
        &self.config
    }

    pub fn keybindings(&self) -> &KeybindingService {
        &self.keybindings
    }

    pub fn keybindings_mut(&mut self) -> &mut KeybindingService {
        &mut self.keybindings
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.tokio_handle()
    }

    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.runtime.set_export_dir(dir);
    }

    /// The frame the host should currently show, if anything was rendered yet.
    pub fn frame(&self) -> Option<&PreviewFrame> {
        self.frame.as_ref()
    }

    pub fn preview_deadline(&self) -> Option<Instant> {
        self.preview_deadline
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.store.take_notices()
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    pub fn run_command(&mut self, command: Command) -> bool {
        self.dispatch(Action::RunCommand(command))
    }

    /// Resolves a chord. A bound chord counts as handled even when its
    /// command changes nothing.
    pub fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        let Some(command) = self.keybindings.resolve(key).cloned() else {
            return KeyOutcome::default();
        };
        tracing::trace!(key = %key, command = command.name(), "key resolved");
        let state_changed = self.run_command(command.clone());
        KeyOutcome {
            handled: true,
            command: Some(command),
            state_changed,
        }
    }

    /// Drains collaborator replies and fires the preview render once its
    /// deadline has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.poll_runtime();
        changed |= self.poll_preview_deadline(now);
        changed
    }

    fn poll_runtime(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_MESSAGE_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(message) => changed |= self.dispatch(message.into_action()),
                Err(_) => break,
            }
        }
        changed
    }

    fn poll_preview_deadline(&mut self, now: Instant) -> bool {
        match self.preview_deadline {
            Some(deadline) if now >= deadline => {
                self.preview_deadline = None;
                self.dispatch(Action::PreviewDue)
            }
            _ => false,
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ListFiles { project } => self.runtime.list_files(project),
            Effect::CreateFile(record) => self.runtime.create_file(record),
            Effect::UpdateFile { id, path, content } => {
                self.runtime.update_file(id, path, content)
            }
            Effect::DeleteFile { id, path } => self.runtime.delete_file(id, path),
            Effect::SchedulePreview => {
                // a newer request replaces the pending deadline
                let delay = self.config.workspace().preview_delay();
                self.preview_deadline = Some(Instant::now() + delay);
            }
            Effect::RenderPreview(frame) => {
                if !self.store.state().preview.is_pending() {
                    self.preview_deadline = None;
                }
                self.frame = Some(frame);
            }
            Effect::ExportPreview { document } => self.runtime.export_preview(document),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/workbench.rs"]
mod tests;
