//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    read_reply, NonInteractiveUI, OakTheme, OutputMode, ProgressSpinner, Prompt, SpinnerHandle,
    UserInterface,
};

/// Styled output on stdout, questions read from the same terminal.
pub struct TerminalUI {
    term: Term,
    theme: OakTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: OakTheme::detect(),
            mode,
        }
    }

    // Write failures on a closed terminal are not worth failing setup over.
    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            self.line(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        self.line(&text);
    }

    fn warning(&mut self, msg: &str) {
        let text = self.theme.format_warning(msg);
        self.line(&text);
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        self.line(&text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        read_reply(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        match self.mode {
            OutputMode::Quiet => Box::new(ProgressSpinner::hidden()),
            OutputMode::Normal | OutputMode::Verbose => Box::new(ProgressSpinner::new(message)),
        }
    }

    fn show_header(&mut self, title: &str) {
        let text = format!("\n{}\n", self.theme.format_header(title));
        self.line(&text);
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Pick the UI for this run.
///
/// `--yes` always yields a [`NonInteractiveUI`], so no question blocks.
pub fn create_ui(interactive: bool, mode: OutputMode, assume_yes: bool) -> Box<dyn UserInterface> {
    if assume_yes {
        Box::new(NonInteractiveUI::new(mode).assume_yes())
    } else if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
