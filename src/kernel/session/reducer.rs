use crate::core::Command;
use crate::kernel::notice::{Notice, Notices};
use crate::kernel::services::ports::CollabError;
use crate::kernel::Effect;
use crate::models::{FileRecord, NewFileRecord};

use super::action::SessionAction;
use super::state::SessionState;

impl SessionState {
    pub fn dispatch_action(
        &mut self,
        action: SessionAction,
        notices: &mut Notices,
    ) -> (bool, Vec<Effect>) {
        let result = match action {
            SessionAction::OpenFile { path } => (self.open_file(&path), Vec::new()),
            SessionAction::CloseTab { path, force } => self.request_close(&path, force, notices),
            SessionAction::SetActive { path } => (self.set_active(&path), Vec::new()),
            SessionAction::Edit { path, content } => (self.edit(&path, content), Vec::new()),
            SessionAction::Save { path } => self.save(path, notices),
            SessionAction::Saved {
                path,
                content,
                result,
            } => self.saved(path, content, result, notices),
            SessionAction::CreateEntry {
                parent_path,
                name,
                is_folder,
            } => self.create_entry(&parent_path, &name, is_folder, notices),
            SessionAction::EntryCreated { path, result } => {
                self.entry_created(path, result, notices)
            }
            SessionAction::DeleteEntry { path } => self.delete_entry(path, notices),
            SessionAction::EntryDeleted { path, result } => {
                self.entry_deleted(path, result, notices)
            }
            SessionAction::FilesLoaded { records } => {
                tracing::debug!(count = records.len(), "files loaded");
                self.replace_files(records);
                (true, Vec::new())
            }
            SessionAction::LoadFailed { error } => {
                tracing::warn!(error = %error, "listing files failed");
                notices.push(Notice::from_failure("Failed to load files", &error));
                (false, Vec::new())
            }
        };
        debug_assert!(
            self.check_invariants().is_ok(),
            "{:?}",
            self.check_invariants()
        );
        result
    }

    pub fn apply_command(&mut self, command: &Command, notices: &mut Notices) -> (bool, Vec<Effect>) {
        let active = self.active_path().map(str::to_string);
        match (command, active) {
            (Command::Save, Some(path)) => self.save(path, notices),
            (Command::CloseTab, Some(path)) => self.request_close(&path, false, notices),
            (Command::ForceCloseTab, Some(path)) => self.request_close(&path, true, notices),
            (Command::NextTab, _) => (self.next_tab(), Vec::new()),
            (Command::PrevTab, _) => (self.prev_tab(), Vec::new()),
            _ => (false, Vec::new()),
        }
    }

    fn request_close(
        &mut self,
        path: &str,
        force: bool,
        notices: &mut Notices,
    ) -> (bool, Vec<Effect>) {
        if !force && self.confirm_close_modified() && self.is_modified(path) {
            let name = self.tab(path).map_or(path, |t| t.name.as_str());
            notices.push(Notice::warning(format!(
                "{name} has unsaved changes; force close to discard them"
            )));
            return (false, Vec::new());
        }
        (self.close_tab(path), Vec::new())
    }

    fn save(&mut self, path: String, notices: &mut Notices) -> (bool, Vec<Effect>) {
        let Some(content) = self.unsaved(&path).map(str::to_string) else {
            return (false, Vec::new());
        };
        let Some(id) = self.files().get(&path).map(|r| r.id.clone()) else {
            notices.push(Notice::error(format!(
                "Cannot save {path}: it is no longer part of the project"
            )));
            return (false, Vec::new());
        };
        self.begin_save(&path);
        tracing::info!(path = %path, bytes = content.len(), "save issued");
        (true, vec![Effect::UpdateFile { id, path, content }])
    }

    fn saved(
        &mut self,
        path: String,
        content: String,
        result: Result<FileRecord, CollabError>,
        notices: &mut Notices,
    ) -> (bool, Vec<Effect>) {
        self.finish_save(&path);
        match result {
            Ok(record) => {
                tracing::info!(path = %path, "save confirmed");
                self.apply_saved(&path, &content, record);
                notices.push(Notice::info("File saved"));
                (true, Vec::new())
            }
            Err(error) => {
                tracing::warn!(path = %path, error = %error, "save failed");
                notices.push(Notice::from_failure(&format!("Failed to save {path}"), &error));
                (true, self.refresh_if_stale(&error))
            }
        }
    }

    fn create_entry(
        &mut self,
        parent_path: &str,
        name: &str,
        is_folder: bool,
        notices: &mut Notices,
    ) -> (bool, Vec<Effect>) {
        let parent = parent_path.trim_matches('/');
        let record = NewFileRecord::under(self.project().clone(), parent, name, is_folder, "");

        let rejection = if !parent.is_empty() && !self.files().is_folder(parent) {
            Some(CollabError::Validation(format!("{parent} is not a folder")))
        } else if let Err(rejection) = record.validate() {
            Some(CollabError::Validation(rejection.to_string()))
        } else if self.files().contains(&record.path) {
            Some(CollabError::Conflict {
                path: record.path.clone(),
            })
        } else {
            None
        };
        if let Some(error) = rejection {
            notices.push(Notice::from_failure("Failed to create file", &error));
            return (false, Vec::new());
        }

        tracing::info!(path = %record.path, is_folder, "create requested");
        (false, vec![Effect::CreateFile(record)])
    }

    fn entry_created(
        &mut self,
        path: String,
        result: Result<FileRecord, CollabError>,
        notices: &mut Notices,
    ) -> (bool, Vec<Effect>) {
        match result {
            Ok(record) => {
                self.insert_record(record);
                let project = self.project().clone();
                (true, vec![Effect::ListFiles { project }])
            }
            Err(error) => {
                tracing::warn!(path = %path, error = %error, "create failed");
                notices.push(Notice::from_failure("Failed to create file", &error));
                (false, self.refresh_if_stale(&error))
            }
        }
    }

    fn delete_entry(&mut self, path: String, notices: &mut Notices) -> (bool, Vec<Effect>) {
        let Some(id) = self.files().get(&path).map(|r| r.id.clone()) else {
            notices.push(Notice::error(format!("Cannot delete {path}: not found")));
            return (false, Vec::new());
        };
        let changed = self.close_tabs_under(&path);
        tracing::info!(path = %path, "delete requested");
        (changed, vec![Effect::DeleteFile { id, path }])
    }

    fn entry_deleted(
        &mut self,
        path: String,
        result: Result<(), CollabError>,
        notices: &mut Notices,
    ) -> (bool, Vec<Effect>) {
        let project = self.project().clone();
        match result {
            Ok(()) => (false, vec![Effect::ListFiles { project }]),
            Err(error) => {
                tracing::warn!(path = %path, error = %error, "delete failed");
                notices.push(Notice::from_failure("Failed to delete file", &error));
                (false, self.refresh_if_stale(&error))
            }
        }
    }

    fn refresh_if_stale(&self, error: &CollabError) -> Vec<Effect> {
        if error.invalidates_cache() {
            vec![Effect::ListFiles {
                project: self.project().clone(),
            }]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/session/reducer.rs"]
mod tests;
