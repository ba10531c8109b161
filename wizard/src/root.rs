//! The "root of your web app" step: discover, ask, validate.

use std::io;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::core::answer::RootAnswer;
use crate::core::question::{Choice, RootQuestion, root_question};
use crate::error::{Result, WizardError};
use crate::io::config::WizardConfig;
use crate::io::discovery::{DiscoveryOptions, discover_subdirectories};
use crate::io::prompter::Prompter;
use crate::io::validate::ensure_directory;

/// Ask for the root directory of the web app under `cwd`.
///
/// Returns the chosen path exactly as answered (not normalized, not made
/// absolute) once it is confirmed to be an existing directory.
#[instrument(skip_all, fields(cwd = %cwd.display()))]
pub fn ask_root_of_web_app(
    cwd: &Path,
    config: &WizardConfig,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let options = DiscoveryOptions {
        ignored: &config.ignored_directories,
        include_hidden: config.include_hidden,
    };
    let candidates = discover_subdirectories(cwd, &options)?;
    let answer = ask_question(&candidates, config, prompter)?;

    let resolved = answer.resolved_path();
    ensure_directory(cwd, resolved, &config.message_table())?;
    info!(root = %resolved, "web app root selected");
    Ok(resolved.to_string())
}

/// Put the question for `candidates` to the user.
///
/// The manual path question is only asked after the manual entry sentinel
/// was picked.
pub fn ask_question(
    candidates: &[String],
    config: &WizardConfig,
    prompter: &mut dyn Prompter,
) -> Result<RootAnswer> {
    match root_question(candidates, &config.prompts.question_text()) {
        RootQuestion::Enter { message, default } => {
            let typed = prompter.input(&message, Some(&default))?;
            Ok(RootAnswer::selected(typed))
        }
        RootQuestion::Choose { message, choices } => {
            let picked = prompter.select(&message, &choices)?;
            match choices.get(picked) {
                Some(Choice::ManualEntry(label)) => {
                    debug!("manual entry selected");
                    let typed = prompter.input(&config.prompts.enter_root, None)?;
                    Ok(RootAnswer::manual(label.clone(), typed))
                }
                Some(Choice::Candidate(name)) => Ok(RootAnswer::selected(name.clone())),
                Some(Choice::Separator) => Err(invalid_selection("separator cannot be selected")),
                None => Err(invalid_selection(&format!(
                    "selection {picked} is outside the {} choices",
                    choices.len()
                ))),
            }
        }
    }
}

fn invalid_selection(reason: &str) -> WizardError {
    io::Error::new(io::ErrorKind::InvalidData, reason.to_string()).into()
}
