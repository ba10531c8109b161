//! Interactive "root of your web app" step for a build tool's setup wizard.
//!
//! The crate follows a strict split:
//!
//! - **[`core`]**: Pure logic (question construction, answer resolution).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (directory discovery, stat checks,
//!   terminal prompting, config files).
//!
//! [`root`] wires the two together into [`root::ask_root_of_web_app`], the
//! public entry point.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod root;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::WizardError;
pub use root::{ask_question, ask_root_of_web_app};
