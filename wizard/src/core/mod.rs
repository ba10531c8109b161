//! Pure logic for the root directory question.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod answer;
pub mod messages;
pub mod question;
