//! Application layer: the workbench that drives the kernel for a host.

pub mod workbench;

pub use workbench::{KeyOutcome, Workbench};
