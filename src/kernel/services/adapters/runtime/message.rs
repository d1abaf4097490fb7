use std::path::PathBuf;

use crate::kernel::services::ports::CollabError;
use crate::kernel::{Action, SessionAction};
use crate::models::FileRecord;

#[derive(Debug)]
pub enum AppMessage {
    FilesListed {
        result: Result<Vec<FileRecord>, CollabError>,
    },
    FileSaved {
        path: String,
        content: String,
        result: Result<FileRecord, CollabError>,
    },
    FileCreated {
        path: String,
        result: Result<FileRecord, CollabError>,
    },
    FileDeleted {
        path: String,
        result: Result<(), CollabError>,
    },
    PreviewExported {
        result: Result<PathBuf, String>,
    },
}

impl AppMessage {
    pub fn into_action(self) -> Action {
        match self {
            AppMessage::FilesListed { result } => Action::Session(match result {
                Ok(records) => SessionAction::FilesLoaded { records },
                Err(error) => SessionAction::LoadFailed { error },
            }),
            AppMessage::FileSaved {
                path,
                content,
                result,
            } => Action::Session(SessionAction::Saved {
                path,
                content,
                result,
            }),
            AppMessage::FileCreated { path, result } => {
                Action::Session(SessionAction::EntryCreated { path, result })
            }
            AppMessage::FileDeleted { path, result } => {
                Action::Session(SessionAction::EntryDeleted { path, result })
            }
            AppMessage::PreviewExported { result } => Action::PreviewExported { result },
        }
    }
}
