//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, SetupError};

use super::theme::OakTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "OAK_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered, in order, from `OAK_PROMPT_<KEY>` environment
/// overrides, the prompt's own default, and the blanket answer set by
/// `--yes`. With none of those the prompt fails.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    blanket_answer: Option<String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            blanket_answer: None,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            blanket_answer: None,
        }
    }

    /// Answer `y` to every prompt that has no more specific answer.
    pub fn assume_yes(mut self) -> Self {
        self.blanket_answer = Some("y".to_string());
        self
    }

    fn answer_for(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .or(self.blanket_answer.as_ref())
            .cloned()
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", OakTheme::plain().format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", OakTheme::plain().format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", OakTheme::plain().format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let Some(answer) = self.answer_for(prompt) else {
            return Err(SetupError::Other(anyhow::anyhow!(
                "Cannot prompt for '{}' in non-interactive mode (set {}{})",
                prompt.key,
                PROMPT_ENV_PREFIX,
                prompt.key.to_uppercase()
            )));
        };

        tracing::debug!("Answering prompt '{}' with '{}'", prompt.key, answer);
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_messages() {
            println!("  {}", message);
        }
        Box::new(LineSpinner)
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints the final line only.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", OakTheme::plain().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", OakTheme::plain().format_error(msg));
    }
}
