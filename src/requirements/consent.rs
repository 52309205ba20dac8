//! Asking permission before downloading anything.

use crate::error::Result;
use crate::ui::{parse_reply, Prompt, UserInterface};

/// Ask a yes/no question until the user answers `y` or `n`.
///
/// Without a human to ask again (non-interactive UI), an unanswerable or
/// unrecognised reply counts as `n`.
pub fn ask_permission(ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<bool> {
    let prompt = Prompt {
        key: key.to_string(),
        question: format!("{} [Y/N]", question),
        default: None,
    };

    loop {
        let reply = match ui.prompt(&prompt) {
            Ok(reply) => reply,
            Err(e) if !ui.is_interactive() => {
                tracing::debug!("No answer for '{}': {}", key, e);
                ui.warning(&e.to_string());
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        match parse_reply(&reply) {
            Some(answer) => {
                tracing::debug!("Prompt '{}' answered {}", key, answer);
                return Ok(answer);
            }
            None if !ui.is_interactive() => {
                ui.warning(&format!("Unrecognised answer '{}' for '{}'", reply, key));
                return Ok(false);
            }
            None => ui.message("Please answer 'y' or 'n'."),
        }
    }
}
