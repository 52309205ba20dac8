//! How much the run prints.

/// Verbosity picked from `--verbose` / `--quiet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, plus the config path and a closing summary.
    Verbose,
    #[default]
    Normal,
    /// Statuses, warnings and errors only; plain messages are dropped.
    Quiet,
}

impl OutputMode {
    /// Whether plain progress messages are printed.
    pub fn shows_messages(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_drops_messages() {
        assert!(OutputMode::Verbose.shows_messages());
        assert!(OutputMode::Normal.shows_messages());
        assert!(!OutputMode::Quiet.shows_messages());
    }

    #[test]
    fn normal_is_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
