//! Test-only helpers: scripted answers and directory fixtures.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::core::question::Choice;
use crate::error::{Result, WizardError};
use crate::io::prompter::Prompter;

/// Temporary working directory populated with directories and files.
pub struct DirFixture {
    temp: TempDir,
}

impl DirFixture {
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// Create a directory (and parents) relative to the fixture root.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.temp.path().join(rel)).expect("create dir");
        self
    }

    /// Create an empty file relative to the fixture root.
    pub fn file(self, rel: &str) -> Self {
        fs::write(self.temp.path().join(rel), "").expect("write file");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}

impl Default for DirFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A question the wizard put to the [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asked {
    Select {
        message: String,
        choices: Vec<Choice>,
    },
    Input {
        message: String,
        default: Option<String>,
    },
}

#[derive(Debug, Clone)]
enum Step {
    Pick(String),
    Type(String),
    AcceptDefault,
}

/// Prompter answering from a fixed script and recording every question.
///
/// Running out of script behaves like closed input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    steps: VecDeque<Step>,
    asked: Vec<Asked>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next select with the choice whose value is `label`.
    pub fn pick(mut self, label: &str) -> Self {
        self.steps.push_back(Step::Pick(label.to_string()));
        self
    }

    /// Answer the next input with `text`.
    pub fn type_text(mut self, text: &str) -> Self {
        self.steps.push_back(Step::Type(text.to_string()));
        self
    }

    /// Answer the next input with an empty line.
    pub fn accept_default(mut self) -> Self {
        self.steps.push_back(Step::AcceptDefault);
        self
    }

    pub fn asked(&self) -> &[Asked] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize> {
        self.asked.push(Asked::Select {
            message: message.to_string(),
            choices: choices.to_vec(),
        });
        match self.steps.pop_front() {
            Some(Step::Pick(label)) => choices
                .iter()
                .position(|choice| choice.value() == Some(label.as_str()))
                .ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("no choice labelled {label:?}"),
                    )
                    .into()
                }),
            Some(other) => panic!("select answered with {other:?}"),
            None => Err(WizardError::InputClosed),
        }
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        self.asked.push(Asked::Input {
            message: message.to_string(),
            default: default.map(str::to_string),
        });
        let typed = match self.steps.pop_front() {
            Some(Step::Type(text)) => text,
            Some(Step::AcceptDefault) => String::new(),
            Some(other) => panic!("input answered with {other:?}"),
            None => return Err(WizardError::InputClosed),
        };
        match default {
            Some(default) if typed.trim().is_empty() => Ok(default.to_string()),
            _ => Ok(typed),
        }
    }
}
