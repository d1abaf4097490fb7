//! Editor session: open tabs, the active tab and unsaved edits.

pub mod action;
mod reducer;
pub mod state;

pub use action::SessionAction;
pub use state::{EditorTab, SessionState};
