//! Root directory validation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::messages::{GLOB_DIRECTORY_INVALID, MessageTable};
use crate::error::{Result, WizardError};

/// Require `path` (relative paths resolve against `base`) to be an existing
/// directory.
///
/// Any stat failure and any non-directory collapse into
/// [`WizardError::InvalidRootDirectory`] carrying the
/// `glob-directory-invalid` message.
pub fn ensure_directory(base: &Path, path: &str, messages: &MessageTable) -> Result<()> {
    let target = base.join(path);
    let cause = match fs::metadata(&target) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => "not a directory".to_string(),
        Err(err) => err.to_string(),
    };
    debug!(path = %path, target = %target.display(), cause = %cause, "rejected root directory");
    let message = messages.get(GLOB_DIRECTORY_INVALID)?;
    Err(WizardError::InvalidRootDirectory(message.to_string()))
}
