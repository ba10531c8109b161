//! I/O helpers for the wizard.

pub mod config;
pub mod discovery;
pub mod lines;
pub mod prompter;
pub mod validate;
