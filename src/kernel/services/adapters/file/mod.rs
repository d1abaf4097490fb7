//! File collaborator adapters.

pub mod local;
pub mod memory;

pub use local::{import_directory, write_records};
pub use memory::InMemoryFileStore;
