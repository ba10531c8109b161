//! Wizard configuration stored in `wizard.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::messages::{GLOB_DIRECTORY_INVALID, MessageTable, default_messages};
use crate::core::question::QuestionText;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wizard.toml";

/// Wizard configuration (TOML).
///
/// Missing fields default to the built-in values, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WizardConfig {
    /// Directory names never offered as candidates.
    pub ignored_directories: Vec<String>,

    /// Offer dot-directories as candidates too.
    pub include_hidden: bool,

    /// Seconds to wait for each answer. `0` waits indefinitely.
    pub prompt_timeout_secs: u64,

    pub prompts: PromptConfig,

    /// Error messages keyed by id (`glob-directory-invalid`).
    pub messages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    /// Single-choice question shown when candidates exist.
    pub choose_root: String,
    /// Free-text question for manual entry or when nothing was discovered.
    pub enter_root: String,
    /// Label of the manual entry sentinel.
    pub manual_entry: String,
    /// Default answer of the free-text question when nothing was discovered.
    pub default_root: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            choose_root: "What is the root of your web app (i.e. which directory do you deploy)?"
                .to_string(),
            enter_root: "Please enter the path to the root of your web app:".to_string(),
            manual_entry: "Manually enter path".to_string(),
            default_root: ".".to_string(),
        }
    }
}

impl PromptConfig {
    pub fn question_text(&self) -> QuestionText {
        QuestionText {
            choose_root: self.choose_root.clone(),
            enter_root: self.enter_root.clone(),
            manual_entry: self.manual_entry.clone(),
            default_root: self.default_root.clone(),
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            ignored_directories: vec!["node_modules".to_string()],
            include_hidden: false,
            prompt_timeout_secs: 0,
            prompts: PromptConfig::default(),
            messages: default_messages(),
        }
    }
}

impl WizardConfig {
    pub fn validate(&self) -> Result<()> {
        for name in &self.ignored_directories {
            if name.trim().is_empty() {
                return Err(anyhow!("ignored_directories must not contain empty names"));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(anyhow!(
                    "ignored_directories entry {name:?} must be a bare directory name"
                ));
            }
        }
        let prompts = [
            ("prompts.choose_root", &self.prompts.choose_root),
            ("prompts.enter_root", &self.prompts.enter_root),
            ("prompts.manual_entry", &self.prompts.manual_entry),
            ("prompts.default_root", &self.prompts.default_root),
        ];
        for (field, value) in prompts {
            if value.trim().is_empty() {
                return Err(anyhow!("{field} must be non-empty"));
            }
        }
        if !self.messages.contains_key(GLOB_DIRECTORY_INVALID) {
            return Err(anyhow!("messages must define {GLOB_DIRECTORY_INVALID:?}"));
        }
        Ok(())
    }

    /// `None` when the wizard should wait indefinitely.
    pub fn prompt_timeout(&self) -> Option<Duration> {
        (self.prompt_timeout_secs > 0).then(|| Duration::from_secs(self.prompt_timeout_secs))
    }

    pub fn message_table(&self) -> MessageTable {
        MessageTable::new(self.messages.clone())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `WizardConfig::default()`. Messages absent
/// from the file keep their built-in text.
pub fn load_config(path: &Path) -> Result<WizardConfig> {
    if !path.exists() {
        let cfg = WizardConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg: WizardConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    for (key, text) in default_messages() {
        cfg.messages.entry(key).or_insert(text);
    }
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &WizardConfig) -> Result<()> {
    cfg.validate()?;
    let buf = render_config(cfg)?;
    write_atomic(path, &buf)
}

/// Serialize config as pretty TOML with a trailing newline.
pub fn render_config(cfg: &WizardConfig) -> Result<String> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
