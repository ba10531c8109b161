//! Candidate discovery: immediate subdirectories of the working directory.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{Result, WizardError};

/// Discovery filters.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions<'a> {
    /// Directory names to leave out.
    pub ignored: &'a [String],
    /// Keep names starting with `.`.
    pub include_hidden: bool,
}

/// List the immediate subdirectories of `dir`, each with a trailing `/`.
///
/// Ignored and (unless requested) hidden names are dropped. Symlinks that
/// resolve to directories are kept. Names are sorted so the order does not
/// depend on the filesystem.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover_subdirectories(dir: &Path, options: &DiscoveryOptions<'_>) -> Result<Vec<String>> {
    let discovery_err = |source| WizardError::Discovery {
        dir: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery_err)? {
        let entry = entry.map_err(discovery_err)?;
        let Ok(name) = entry.file_name().into_string() else {
            debug!(name = ?entry.file_name(), "skipping non-utf8 entry");
            continue;
        };
        if !options.include_hidden && name.starts_with('.') {
            continue;
        }
        if options.ignored.iter().any(|ignored| ignored == &name) {
            continue;
        }
        if !is_dir_following_links(&entry.path()) {
            continue;
        }
        names.push(format!("{name}/"));
    }
    names.sort();

    debug!(count = names.len(), "discovered candidate directories");
    Ok(names)
}

// Broken symlinks and unreadable entries are simply not candidates.
fn is_dir_following_links(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
}
