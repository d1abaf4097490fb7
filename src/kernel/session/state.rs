use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::kernel::language::language_for_name;
use crate::models::{FileRecord, ProjectFiles, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorTab {
    pub path: String,
    pub name: String,
    pub is_modified: bool,
}

impl EditorTab {
    fn new(path: &str, name: &str) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            is_modified: false,
        }
    }

    pub fn language(&self) -> &'static str {
        language_for_name(&self.name)
    }
}

/// Open tabs, the active tab and pending (unsaved) edits of one project.
///
/// A tab's `is_modified` flag mirrors exactly whether `unsaved` holds an entry
/// for its path, and `active` always indexes into `tabs`.
#[derive(Debug)]
pub struct SessionState {
    project: ProjectId,
    files: ProjectFiles,
    files_version: u64,
    tabs: Vec<EditorTab>,
    active: Option<usize>,
    unsaved: FxHashMap<String, String>,
    saving: FxHashMap<String, usize>,
    confirm_close_modified: bool,
}

impl SessionState {
    pub fn new(project: ProjectId) -> Self {
        Self {
            project,
            files: ProjectFiles::default(),
            files_version: 0,
            tabs: Vec::new(),
            active: None,
            unsaved: FxHashMap::default(),
            saving: FxHashMap::default(),
            confirm_close_modified: false,
        }
    }

    pub fn with_confirm_close(mut self, confirm: bool) -> Self {
        self.confirm_close_modified = confirm;
        self
    }

    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    pub fn files(&self) -> &ProjectFiles {
        &self.files
    }

    /// Bumped whenever the record set changes; the explorer tree is rebuilt on change.
    pub fn files_version(&self) -> u64 {
        self.files_version
    }

    pub fn confirm_close_modified(&self) -> bool {
        self.confirm_close_modified
    }

    pub fn tabs(&self) -> &[EditorTab] {
        &self.tabs
    }

    pub fn tab(&self, path: &str) -> Option<&EditorTab> {
        self.tab_index(path).map(|i| &self.tabs[i])
    }

    fn tab_index(&self, path: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.path == path)
    }

    pub fn active_tab(&self) -> Option<&EditorTab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active_tab().map(|t| t.path.as_str())
    }

    pub fn unsaved(&self, path: &str) -> Option<&str> {
        self.unsaved.get(path).map(String::as_str)
    }

    pub fn unsaved_count(&self) -> usize {
        self.unsaved.len()
    }

    pub fn is_modified(&self, path: &str) -> bool {
        self.unsaved.contains_key(path)
    }

    /// Pending content if any, else the last persisted content.
    pub fn resolve_content(&self, path: &str) -> Option<&str> {
        self.unsaved(path).or_else(|| self.files.content(path))
    }

    pub fn is_saving(&self, path: &str) -> bool {
        self.saving.get(path).is_some_and(|n| *n > 0)
    }

    pub fn can_save(&self, path: &str) -> bool {
        self.unsaved.contains_key(path)
    }

    pub fn open_file(&mut self, path: &str) -> bool {
        let Some(record) = self.files.get(path) else {
            return false;
        };
        if record.is_folder {
            return false;
        }
        let (index, opened) = match self.tab_index(path) {
            Some(i) => (i, false),
            None => {
                let tab = EditorTab::new(path, &record.name);
                self.tabs.push(tab);
                tracing::debug!(path, "tab opened");
                (self.tabs.len() - 1, true)
            }
        };
        let changed = opened || self.active != Some(index);
        self.active = Some(index);
        changed
    }

    /// Removes the tab and discards its pending edit.
    pub fn close_tab(&mut self, path: &str) -> bool {
        let Some(index) = self.tab_index(path) else {
            return false;
        };
        self.tabs.remove(index);
        if self.unsaved.remove(path).is_some() {
            tracing::info!(path, "discarded unsaved edit on close");
        }
        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(active) if active == index => Some(self.tabs.len() - 1),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        true
    }

    /// Closes the tab for `path` and every tab below it.
    pub fn close_tabs_under(&mut self, path: &str) -> bool {
        let prefix = format!("{path}/");
        let doomed: Vec<String> = self
            .tabs
            .iter()
            .filter(|t| t.path == path || t.path.starts_with(&prefix))
            .map(|t| t.path.clone())
            .collect();
        let mut changed = false;
        for path in doomed {
            changed |= self.close_tab(&path);
        }
        changed
    }

    pub fn set_active(&mut self, path: &str) -> bool {
        match self.tab_index(path) {
            Some(index) if self.active != Some(index) => {
                self.active = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn next_tab(&mut self) -> bool {
        let len = self.tabs.len();
        match self.active {
            Some(active) if len > 1 => {
                self.active = Some((active + 1) % len);
                true
            }
            _ => false,
        }
    }

    pub fn prev_tab(&mut self) -> bool {
        let len = self.tabs.len();
        match self.active {
            Some(active) if len > 1 => {
                self.active = Some(if active == 0 { len - 1 } else { active - 1 });
                true
            }
            _ => false,
        }
    }

    /// Records `content` as pending for the active tab. Returns false when
    /// `path` is not the active tab or nothing changed.
    pub fn edit(&mut self, path: &str, content: String) -> bool {
        if self.active_path() != Some(path) {
            return false;
        }
        if self.unsaved(path) == Some(content.as_str()) {
            return false;
        }
        if self.files.content(path) == Some(content.as_str()) {
            return self.set_pending(path, None);
        }
        self.set_pending(path, Some(content))
    }

    fn set_pending(&mut self, path: &str, content: Option<String>) -> bool {
        let changed = match content {
            Some(content) => {
                self.unsaved.insert(path.to_string(), content);
                true
            }
            None => self.unsaved.remove(path).is_some(),
        };
        let modified = self.unsaved.contains_key(path);
        if let Some(index) = self.tab_index(path) {
            self.tabs[index].is_modified = modified;
        }
        changed
    }

    pub(super) fn begin_save(&mut self, path: &str) {
        *self.saving.entry(path.to_string()).or_default() += 1;
    }

    pub(super) fn finish_save(&mut self, path: &str) {
        if let Some(count) = self.saving.get_mut(path) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.saving.remove(path);
            }
        }
    }

    /// Applies a confirmed save. The pending edit is cleared only if it still
    /// holds the content that was saved; a newer edit stays pending.
    pub(super) fn apply_saved(&mut self, path: &str, saved: &str, record: FileRecord) {
        self.files.upsert(record);
        self.files_version += 1;
        let persisted = self.files.content(path).unwrap_or(saved).to_string();
        if self.unsaved(path).is_some_and(|p| p == saved || p == persisted) {
            self.set_pending(path, None);
        }
    }

    pub(super) fn insert_record(&mut self, record: FileRecord) {
        self.files.upsert(record);
        self.files_version += 1;
    }

    /// Swaps in a freshly listed record set. Tabs stay open; their names follow
    /// the records, and pending edits that now match persisted content are dropped.
    pub fn replace_files(&mut self, records: Vec<FileRecord>) {
        self.files = ProjectFiles::new(records);
        self.files_version += 1;

        for tab in &mut self.tabs {
            if let Some(record) = self.files.get(&tab.path) {
                tab.name.clone_from(&record.name);
            }
        }
        let settled: Vec<String> = self
            .unsaved
            .iter()
            .filter(|(path, content)| self.files.content(path) == Some(content.as_str()))
            .map(|(path, _)| path.clone())
            .collect();
        for path in settled {
            self.set_pending(&path, None);
        }
    }

    /// Checks the tab/edit/active invariants; used by debug builds and tests.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (i, tab) in self.tabs.iter().enumerate() {
            if self.tabs[..i].iter().any(|t| t.path == tab.path) {
                return Err(format!("duplicate tab for {}", tab.path));
            }
            if tab.is_modified != self.unsaved.contains_key(&tab.path) {
                return Err(format!("modified flag out of sync for {}", tab.path));
            }
        }
        if let Some(path) = self.unsaved.keys().find(|p| self.tab_index(p).is_none()) {
            return Err(format!("pending edit without a tab: {path}"));
        }
        match self.active {
            Some(i) if i >= self.tabs.len() => Err(format!("active index {i} out of range")),
            None if !self.tabs.is_empty() => Err("tabs open but none active".to_string()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/session/state.rs"]
mod tests;
