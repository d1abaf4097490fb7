//! Live preview: entry-file selection, document composition and render state.

pub mod compose;
pub mod device;
pub mod entry;
pub mod state;

pub use compose::{
    compose_document, composition_mode, guarded_script, strip_linked_entries, CompositionMode,
    PreviewInputs, SANDBOX_POLICY,
};
pub use device::DevicePreset;
pub use entry::{EntryFiles, MARKUP_ENTRY, SCRIPT_ENTRIES, STYLESHEET_ENTRIES};
pub use state::{PreviewFrame, PreviewState};
