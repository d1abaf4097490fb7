use super::message::AppMessage;
use crate::kernel::services::ports::FileCollaborator;
use crate::models::{FileId, FilePatch, NewFileRecord, ProjectId};
use chrono::Utc;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;

const EXPORT_DIR: &str = "studio-preview";

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    files: Arc<dyn FileCollaborator>,
    export_dir: PathBuf,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>, files: Arc<dyn FileCollaborator>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            files,
            export_dir: std::env::temp_dir().join(EXPORT_DIR),
        })
    }

    pub fn export_dir(&self) -> &std::path::Path {
        &self.export_dir
    }

    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.export_dir = dir;
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    pub fn list_files(&self, project: ProjectId) {
        let tx = self.tx.clone();
        let files = Arc::clone(&self.files);
        self.runtime.spawn(async move {
            let result = files.list_files(&project).await;
            let _ = tx.send(AppMessage::FilesListed { result });
        });
    }

    pub fn update_file(&self, id: FileId, path: String, content: String) {
        let tx = self.tx.clone();
        let files = Arc::clone(&self.files);
        self.runtime.spawn(async move {
            let result = files
                .update_file(&id, FilePatch::content(content.clone()))
                .await;
            let _ = tx.send(AppMessage::FileSaved {
                path,
                content,
                result,
            });
        });
    }

    pub fn create_file(&self, record: NewFileRecord) {
        let tx = self.tx.clone();
        let files = Arc::clone(&self.files);
        self.runtime.spawn(async move {
            let path = record.path.clone();
            let result = files.create_file(record).await;
            let _ = tx.send(AppMessage::FileCreated { path, result });
        });
    }

    pub fn delete_file(&self, id: FileId, path: String) {
        let tx = self.tx.clone();
        let files = Arc::clone(&self.files);
        self.runtime.spawn(async move {
            let result = files.delete_file(&id).await;
            let _ = tx.send(AppMessage::FileDeleted { path, result });
        });
    }

    /// Writes the document to a fresh `.html` file in the export directory.
    pub fn export_preview(&self, document: String) {
        let tx = self.tx.clone();
        let dir = self.export_dir.clone();
        self.runtime.spawn(async move {
            let file_name = format!("preview-{}.html", Utc::now().format("%Y%m%d-%H%M%S%.3f"));
            let path = dir.join(file_name);
            let result = async {
                tokio::fs::create_dir_all(&dir).await?;
                tokio::fs::write(&path, document.as_bytes()).await?;
                Ok::<_, io::Error>(path)
            }
            .await
            .map_err(|e| e.to_string());
            if let Err(error) = &result {
                tracing::warn!(error = %error, "preview export failed");
            }
            let _ = tx.send(AppMessage::PreviewExported { result });
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
