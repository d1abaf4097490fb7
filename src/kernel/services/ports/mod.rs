//! Service ports: traits + data contracts.

pub mod config;
pub mod file;
pub mod repos;
pub mod settings;

pub use config::WorkspaceConfig;
pub use file::{CollabError, FailureKind, FileCollaborator, Result as CollabResult};
pub use repos::{Repository, RepositoryLister, UserCredential};
pub use settings::{EditorSettings, KeybindingRule, PreviewSettings, Settings};
