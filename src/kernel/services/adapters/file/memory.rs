//! In-memory file collaborator, used by the CLI and tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::kernel::services::ports::file::{CollabError, FileCollaborator, Result};
use crate::models::{join_path, FileId, FilePatch, FileRecord, NewFileRecord, ProjectId};

#[derive(Debug, Default)]
struct Inner {
    records: Vec<FileRecord>,
    next_id: u64,
    fail_next: Option<CollabError>,
}

impl Inner {
    fn alloc_id(&mut self) -> FileId {
        self.next_id += 1;
        FileId::new(format!("file-{}", self.next_id))
    }

    fn position(&self, id: &FileId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| CollabError::NotFound { id: id.to_string() })
    }

    fn has_path(&self, project: &ProjectId, path: &str) -> bool {
        self.records
            .iter()
            .any(|r| &r.project_id == project && r.path == path)
    }

    fn has_folder(&self, project: &ProjectId, path: &str) -> bool {
        self.records
            .iter()
            .any(|r| &r.project_id == project && r.path == path && r.is_folder)
    }
}

/// Records live in insertion order; paths are unique per project.
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    inner: RwLock<Inner>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `records` in order, failing on the first rejected one.
    pub async fn seed(&self, records: Vec<NewFileRecord>) -> Result<Vec<FileRecord>> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            created.push(self.create_file(record).await?);
        }
        Ok(created)
    }

    /// Makes the next collaborator call fail with `error`.
    pub async fn fail_next(&self, error: CollabError) {
        self.inner.write().await.fail_next = Some(error);
    }

    async fn injected_failure(&self) -> Result<()> {
        match self.inner.write().await.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FileCollaborator for InMemoryFileStore {
    async fn list_files(&self, project: &ProjectId) -> Result<Vec<FileRecord>> {
        self.injected_failure().await?;
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .filter(|r| &r.project_id == project)
            .cloned()
            .collect())
    }

    async fn create_file(&self, record: NewFileRecord) -> Result<FileRecord> {
        self.injected_failure().await?;
        record
            .validate()
            .map_err(|e| CollabError::Validation(e.to_string()))?;

        let mut inner = self.inner.write().await;
        if let Some(parent) = record.parent_path.as_deref().filter(|p| !p.is_empty()) {
            if !inner.has_folder(&record.project_id, parent) {
                return Err(CollabError::Validation(format!(
                    "parent folder {parent} does not exist"
                )));
            }
        }
        if inner.has_path(&record.project_id, &record.path) {
            return Err(CollabError::Conflict { path: record.path });
        }

        let created = FileRecord {
            id: inner.alloc_id(),
            project_id: record.project_id,
            name: record.name,
            path: record.path,
            content: record.content,
            is_folder: record.is_folder,
            parent_path: record.parent_path,
            updated_at: Utc::now(),
        };
        inner.records.push(created.clone());
        Ok(created)
    }

    async fn update_file(&self, id: &FileId, patch: FilePatch) -> Result<FileRecord> {
        self.injected_failure().await?;
        if patch.is_empty() {
            return Err(CollabError::Validation("nothing to update".to_string()));
        }

        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        if let Some(name) = patch.name.as_deref() {
            let name = name.trim();
            if name.is_empty() || name.contains('/') {
                return Err(CollabError::Validation(format!("invalid name: {name:?}")));
            }
            let record = &inner.records[index];
            let old_path = record.path.clone();
            let new_path = join_path(record.parent().unwrap_or(""), name);
            let project = record.project_id.clone();
            if new_path != old_path && inner.has_path(&project, &new_path) {
                return Err(CollabError::Conflict { path: new_path });
            }
            rename_subtree(&mut inner.records, &project, &old_path, &new_path);
            inner.records[index].name = name.to_string();
        }

        let now = Utc::now();
        let record = &mut inner.records[index];
        if let Some(content) = patch.content {
            record.content = content;
        }
        record.updated_at = now;
        Ok(record.clone())
    }

    async fn delete_file(&self, id: &FileId) -> Result<()> {
        self.injected_failure().await?;
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        let removed = inner.records.remove(index);
        if removed.is_folder {
            let prefix = format!("{}/", removed.path);
            inner
                .records
                .retain(|r| r.project_id != removed.project_id || !r.path.starts_with(&prefix));
        }
        Ok(())
    }
}

fn rename_subtree(records: &mut [FileRecord], project: &ProjectId, old: &str, new: &str) {
    let prefix = format!("{old}/");
    for record in records.iter_mut().filter(|r| &r.project_id == project) {
        if record.path == old {
            record.path = new.to_string();
        } else if let Some(rest) = record.path.strip_prefix(&prefix) {
            record.path = format!("{new}/{rest}");
            if let Some(parent) = record.parent_path.as_mut() {
                if parent == old {
                    *parent = new.to_string();
                } else if let Some(rest) = parent.strip_prefix(&prefix) {
                    *parent = format!("{new}/{rest}");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/memory.rs"]
mod tests;
