use crate::kernel::services::ports::CollabError;
use crate::models::FileRecord;

#[derive(Debug, Clone)]
pub enum SessionAction {
    OpenFile {
        path: String,
    },
    CloseTab {
        path: String,
        force: bool,
    },
    SetActive {
        path: String,
    },
    /// Replaces the pending content of the active tab.
    Edit {
        path: String,
        content: String,
    },
    Save {
        path: String,
    },
    Saved {
        path: String,
        content: String,
        result: Result<FileRecord, CollabError>,
    },
    CreateEntry {
        parent_path: String,
        name: String,
        is_folder: bool,
    },
    EntryCreated {
        path: String,
        result: Result<FileRecord, CollabError>,
    },
    DeleteEntry {
        path: String,
    },
    EntryDeleted {
        path: String,
        result: Result<(), CollabError>,
    },
    FilesLoaded {
        records: Vec<FileRecord>,
    },
    LoadFailed {
        error: CollabError,
    },
}
