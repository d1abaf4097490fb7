//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod app_dirs;
pub mod config;
pub mod file;
pub mod keybinding;
pub mod runtime;
pub mod settings;
pub mod templates;

pub use app_dirs::{ensure_export_dir, ensure_log_dir, get_export_dir, get_log_dir};
pub use config::ConfigService;
pub use file::{import_directory, write_records, InMemoryFileStore};
pub use keybinding::KeybindingService;
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, parse_keybinding};
pub use templates::{template_files, TemplateKind};
