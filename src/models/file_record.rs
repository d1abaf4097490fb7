//! Persisted file records as handed over by the file collaborator.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One file or folder of a project.
///
/// `parent_path`, when set, names the `path` of a folder record in the same
/// project. `None` and `Some("")` both mean the record sits at the root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: FileId,
    pub project_id: ProjectId,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub content: String,
    pub is_folder: bool,
    #[serde(default)]
    pub parent_path: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn parent(&self) -> Option<&str> {
        self.parent_path.as_deref().filter(|p| !p.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

/// Create payload; the collaborator assigns `id` and `updated_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFileRecord {
    pub project_id: ProjectId,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub content: String,
    pub is_folder: bool,
    #[serde(default)]
    pub parent_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRejection {
    EmptyName,
    NameContainsSeparator(String),
    PathMismatch { expected: String, actual: String },
}

impl fmt::Display for RecordRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRejection::EmptyName => write!(f, "name must not be empty"),
            RecordRejection::NameContainsSeparator(name) => {
                write!(f, "name must not contain '/': {name}")
            }
            RecordRejection::PathMismatch { expected, actual } => {
                write!(f, "path {actual} does not match parent/name ({expected})")
            }
        }
    }
}

impl NewFileRecord {
    /// Builds a record under `parent_path` (empty string means root).
    pub fn under(
        project_id: ProjectId,
        parent_path: &str,
        name: &str,
        is_folder: bool,
        content: impl Into<String>,
    ) -> Self {
        let name = name.trim().to_string();
        let parent = parent_path.trim_matches('/');
        let path = join_path(parent, &name);
        Self {
            project_id,
            name,
            path,
            content: content.into(),
            is_folder,
            parent_path: (!parent.is_empty()).then(|| parent.to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), RecordRejection> {
        if self.name.trim().is_empty() {
            return Err(RecordRejection::EmptyName);
        }
        if self.name.contains('/') {
            return Err(RecordRejection::NameContainsSeparator(self.name.clone()));
        }
        let expected = join_path(self.parent_path.as_deref().unwrap_or(""), &self.name);
        if expected != self.path {
            return Err(RecordRejection::PathMismatch {
                expected,
                actual: self.path.clone(),
            });
        }
        Ok(())
    }
}

/// Partial update payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FilePatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            name: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.name.is_none()
    }
}

pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// The last-known record list of one project, in collaborator order, indexed by path.
#[derive(Debug, Clone, Default)]
pub struct ProjectFiles {
    records: Vec<FileRecord>,
    by_path: FxHashMap<String, usize>,
}

impl ProjectFiles {
    pub fn new(records: Vec<FileRecord>) -> Self {
        let mut by_path = FxHashMap::default();
        for (i, record) in records.iter().enumerate() {
            // first record wins on a duplicated path
            by_path.entry(record.path.clone()).or_insert(i);
        }
        Self { records, by_path }
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.by_path.get(path).map(|&i| &self.records[i])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    pub fn is_folder(&self, path: &str) -> bool {
        self.get(path).is_some_and(|r| r.is_folder)
    }

    pub fn content(&self, path: &str) -> Option<&str> {
        self.get(path).map(|r| r.content.as_str())
    }

    /// Replaces the record with the same path, or appends it.
    pub fn upsert(&mut self, record: FileRecord) {
        match self.by_path.get(&record.path) {
            Some(&i) => self.records[i] = record,
            None => {
                self.by_path.insert(record.path.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Non-folder records called `name`; root-level records first, then record order.
    pub fn files_named<'a>(&'a self, name: &str) -> Vec<&'a FileRecord> {
        let mut found: Vec<&FileRecord> = self
            .records
            .iter()
            .filter(|r| !r.is_folder && r.name == name)
            .collect();
        found.sort_by_key(|r| !r.is_root());
        found
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_record.rs"]
mod tests;
