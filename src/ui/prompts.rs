//! Reading replies from the terminal.

use console::Term;
use dialoguer::Input;

use crate::error::{Result, SetupError};

use super::Prompt;

/// Read one line of reply for `prompt` on `term`.
///
/// Empty input is allowed so the caller can decide to ask again.
pub fn read_reply(prompt: &Prompt, term: &Term) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true);

    if let Some(default) = &prompt.default {
        input = input.default(default.clone());
    }

    input
        .interact_text_on(term)
        .map_err(|e| SetupError::Io(e.into()))
}
