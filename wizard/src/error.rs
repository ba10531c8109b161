//! Error kinds surfaced by the root directory prompt.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    /// The resolved path is missing, unreadable, or not a directory.
    ///
    /// Carries the text registered under `glob-directory-invalid`. The
    /// underlying cause is not carried.
    #[error("{0}")]
    InvalidRootDirectory(String),

    #[error("failed to list subdirectories of {}: {source}", dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal prompt failed: {0}")]
    Prompt(#[from] io::Error),

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("no answer received within {secs}s")]
    PromptTimedOut { secs: u64 },

    #[error("no message registered for key {key:?}")]
    MissingMessage { key: String },
}

impl WizardError {
    /// True when the user never produced an answer.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::InputClosed | Self::PromptTimedOut { .. })
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;
