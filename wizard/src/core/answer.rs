//! Answer record and path resolution.

/// What the user answered.
///
/// `selected` holds the picked choice (or, when there was nothing to pick,
/// the typed path). `manual_input` is only set when the manual entry
/// sentinel was picked and the follow-up question was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAnswer {
    pub selected: String,
    pub manual_input: Option<String>,
}

impl RootAnswer {
    pub fn selected(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            manual_input: None,
        }
    }

    pub fn manual(selected: impl Into<String>, manual_input: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            manual_input: Some(manual_input.into()),
        }
    }

    /// The effective path: non-empty manual input, else the selected value.
    pub fn resolved_path(&self) -> &str {
        match self.manual_input.as_deref() {
            Some(input) if !input.is_empty() => input,
            _ => &self.selected,
        }
    }
}
