//! Question/answer exchange with the user.

use std::io::{self, Write};
use std::time::Duration;

use crate::core::question::Choice;
use crate::error::Result;

use super::lines::LineSource;

const SEPARATOR_LINE: &str = "──────────────";

/// Seam between the wizard and whoever answers its questions.
pub trait Prompter {
    /// Ask a single-choice question. Returns the index into `choices` of the
    /// picked entry, which is never a [`Choice::Separator`].
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize>;

    /// Ask a free-text question. Empty input yields `default` when given.
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;
}

/// Line-based terminal prompter: numbered choices, typed answers.
pub struct TerminalPrompter<W: Write> {
    lines: LineSource,
    out: W,
}

impl TerminalPrompter<io::Stderr> {
    /// Read answers from stdin, write questions to stderr.
    pub fn stdio(timeout: Option<Duration>) -> Self {
        Self::new(LineSource::stdin(timeout), io::stderr())
    }
}

impl<W: Write> TerminalPrompter<W> {
    pub fn new(lines: LineSource, out: W) -> Self {
        Self { lines, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Answer exactly as typed, minus the line terminator.
    fn ask_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.lines.next_line()
    }
}

impl<W: Write> Prompter for TerminalPrompter<W> {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize> {
        // Display numbers map onto selectable entries only.
        let selectable: Vec<usize> = choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| choice.is_selectable())
            .map(|(idx, _)| idx)
            .collect();
        if selectable.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "no selectable choices").into());
        }

        writeln!(self.out, "? {message}")?;
        let mut number = 0;
        for choice in choices {
            match choice.value() {
                Some(value) => {
                    number += 1;
                    writeln!(self.out, "{number:>4}) {value}")?;
                }
                None => writeln!(self.out, "  {SEPARATOR_LINE}")?,
            }
        }

        let count = selectable.len();
        loop {
            let input = self.ask_line(&format!("Select [1-{count}] (1): "))?;
            let input = input.trim();
            if input.is_empty() {
                return Ok(selectable[0]);
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(selectable[n - 1]),
                _ => writeln!(self.out, "Please enter a number between 1 and {count}.")?,
            }
        }
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let prompt = match default {
            Some(default) => format!("? {message} ({default}) "),
            None => format!("? {message} "),
        };
        let answer = self.ask_line(&prompt)?;
        match default {
            Some(default) if answer.trim().is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WizardError;
    use std::io::Cursor;

    fn prompter(input: &'static str) -> TerminalPrompter<Vec<u8>> {
        TerminalPrompter::new(LineSource::spawn(Cursor::new(input), None), Vec::new())
    }

    fn output(prompter: TerminalPrompter<Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).expect("utf8")
    }

    fn choices() -> Vec<Choice> {
        vec![
            Choice::Candidate("dist/".to_string()),
            Choice::Candidate("src/".to_string()),
            Choice::Separator,
            Choice::ManualEntry("Manually enter path".to_string()),
        ]
    }

    #[test]
    fn select_skips_separator_when_numbering() {
        let mut prompter = prompter("3\n");
        let idx = prompter.select("Pick one", &choices()).expect("select");
        assert_eq!(idx, 3);
        let shown = output(prompter);
        assert!(shown.contains("? Pick one"));
        assert!(shown.contains("   1) dist/"));
        assert!(shown.contains("   2) src/"));
        assert!(shown.contains(SEPARATOR_LINE));
        assert!(shown.contains("   3) Manually enter path"));
    }

    #[test]
    fn select_defaults_to_first_entry() {
        let mut prompter = prompter("\n");
        assert_eq!(prompter.select("Pick", &choices()).expect("select"), 0);
    }

    #[test]
    fn select_reprompts_on_invalid_number() {
        let mut prompter = prompter("9\nabc\n2\n");
        assert_eq!(prompter.select("Pick", &choices()).expect("select"), 1);
        let shown = output(prompter);
        assert_eq!(shown.matches("Please enter a number between 1 and 3.").count(), 2);
    }

    #[test]
    fn input_uses_default_on_empty_answer() {
        let mut prompter = prompter("\n");
        let answer = prompter.input("Root?", Some(".")).expect("input");
        assert_eq!(answer, ".");
        assert!(output(prompter).contains("? Root? (.) "));
    }

    #[test]
    fn input_without_default_returns_empty_answer() {
        let mut prompter = prompter("\n");
        assert_eq!(prompter.input("Root?", None).expect("input"), "");
    }

    #[test]
    fn input_keeps_typed_spaces() {
        let mut prompter = prompter(" my site \n");
        assert_eq!(prompter.input("Root?", None).expect("input"), " my site ");
    }

    #[test]
    fn input_with_default_keeps_typed_spaces() {
        let mut prompter = prompter(" public\n");
        assert_eq!(prompter.input("Root?", Some(".")).expect("input"), " public");
    }

    #[test]
    fn select_accepts_padded_number() {
        let mut prompter = prompter("  2 \n");
        assert_eq!(prompter.select("Pick", &choices()).expect("select"), 1);
    }

    #[test]
    fn closed_input_aborts() {
        let mut prompter = prompter("");
        let err = prompter.input("Root?", None).unwrap_err();
        assert!(err.is_aborted());
        assert!(matches!(err, WizardError::InputClosed));
    }
}
