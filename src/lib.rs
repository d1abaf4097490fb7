//! studio - headless core of a browser-based project workspace.
//!
//! Modules:
//! - models: file records and the explorer tree built from them
//! - core: commands and key chords shared with the host
//! - kernel: session, preview and store (state/action/effect), services
//! - app: the workbench that runs effects for a host
//! - logging: tracing setup for the binary

pub mod app;
pub mod core;
pub mod kernel;
pub mod logging;
pub mod models;
