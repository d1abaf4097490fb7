use crate::kernel::preview::PreviewFrame;
use crate::models::{FileId, NewFileRecord, ProjectId};

/// Side effects requested by the kernel. The workbench runs them and feeds the
/// outcome back as actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListFiles {
        project: ProjectId,
    },
    CreateFile(NewFileRecord),
    UpdateFile {
        id: FileId,
        path: String,
        content: String,
    },
    DeleteFile {
        id: FileId,
        path: String,
    },
    /// Entry inputs changed; render after the debounce delay.
    SchedulePreview,
    RenderPreview(PreviewFrame),
    ExportPreview {
        document: String,
    },
}
