//! Stable exit codes for wizard CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, discovery errors or other failures.
pub const INVALID: i32 = 1;
/// `wizard root` resolved a path that is not an existing directory.
pub const INVALID_ROOT: i32 = 2;
/// `wizard root` stopped waiting for an answer (input closed or timed out).
pub const ABORTED: i32 = 3;
