//! File collaborator contract: the persistence layer behind a project's files.

use async_trait::async_trait;

use crate::models::{FileId, FilePatch, FileRecord, NewFileRecord, ProjectId};

pub type Result<T> = std::result::Result<T, CollabError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollabError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("already exists: {path}")]
    Conflict { path: String },
    #[error("not found: {id}")]
    NotFound { id: String },
    #[error("collaborator unreachable: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Conflict,
    NotFound,
    Transport,
}

impl CollabError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CollabError::Validation(_) => FailureKind::Validation,
            CollabError::Conflict { .. } => FailureKind::Conflict,
            CollabError::NotFound { .. } => FailureKind::NotFound,
            CollabError::Transport(_) => FailureKind::Transport,
        }
    }

    /// The caller's cached records are stale and should be reloaded.
    pub fn invalidates_cache(&self) -> bool {
        matches!(self, CollabError::NotFound { .. })
    }
}

#[async_trait]
pub trait FileCollaborator: Send + Sync {
    async fn list_files(&self, project: &ProjectId) -> Result<Vec<FileRecord>>;

    /// Fails with `Conflict` when the project already has a record at `record.path`.
    async fn create_file(&self, record: NewFileRecord) -> Result<FileRecord>;

    /// Fails with `NotFound` when `id` is unknown.
    async fn update_file(&self, id: &FileId, patch: FilePatch) -> Result<FileRecord>;

    async fn delete_file(&self, id: &FileId) -> Result<()>;
}
