//! Data models: persisted records and the derived explorer tree.

pub mod file_record;
pub mod file_tree;

pub use file_record::{
    join_path, FileId, FilePatch, FileRecord, NewFileRecord, ProjectFiles, ProjectId,
    RecordRejection,
};
pub use file_tree::{
    build_file_tree, compare_entries, ExplorerTree, FileTreeNode, FileTreeRow, NodeKind,
};
