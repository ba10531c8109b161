//! Construction of the first question from the discovered candidates.

/// One entry of the single-choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A discovered subdirectory, e.g. `src/`.
    Candidate(String),
    /// Visual divider; never selectable.
    Separator,
    /// Sentinel asking for a typed path instead.
    ManualEntry(String),
}

impl Choice {
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Self::Separator)
    }

    /// Value recorded in the answer when this choice is picked.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Candidate(name) | Self::ManualEntry(name) => Some(name),
            Self::Separator => None,
        }
    }
}

/// Prompt strings used by the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText {
    pub choose_root: String,
    pub enter_root: String,
    pub manual_entry: String,
    pub default_root: String,
}

/// The first question to put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootQuestion {
    /// Pick from candidates, or the manual entry sentinel.
    Choose {
        message: String,
        choices: Vec<Choice>,
    },
    /// Nothing to pick from: type a path.
    Enter { message: String, default: String },
}

/// Build the first question for `candidates`.
///
/// Non-empty candidates become a list followed by a separator and the manual
/// entry sentinel. Empty candidates fall back to a free-text prompt.
pub fn root_question(candidates: &[String], text: &QuestionText) -> RootQuestion {
    if candidates.is_empty() {
        return RootQuestion::Enter {
            message: text.enter_root.clone(),
            default: text.default_root.clone(),
        };
    }

    let mut choices: Vec<Choice> = candidates
        .iter()
        .map(|name| Choice::Candidate(name.clone()))
        .collect();
    choices.push(Choice::Separator);
    choices.push(Choice::ManualEntry(text.manual_entry.clone()));
    RootQuestion::Choose {
        message: text.choose_root.clone(),
        choices,
    }
}
