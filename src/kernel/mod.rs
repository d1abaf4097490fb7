//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod language;
pub mod notice;
pub mod preview;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use notice::{Notice, NoticeSeverity, Notices};
pub use preview::{PreviewFrame, PreviewState};
pub use session::{EditorTab, SessionAction, SessionState};
pub use state::{AppState, UiState};
pub use store::{DispatchResult, Store};
