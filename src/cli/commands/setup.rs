//! Setup command implementation.
//!
//! The `oak-setup setup` command (also the default) runs the full setup.

use std::path::{Path, PathBuf};

use crate::config::{find_project_config, load_config, SetupConfig};
use crate::error::Result;
use crate::requirements::{default_context, HostStatus, SetupContext};
use crate::runner::{run_setup, GenerationOutcome, SetupOutcome, SetupReport};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn run(
        &self,
        config: &SetupConfig,
        ctx: &SetupContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match run_setup(config, ctx, ui)? {
            SetupOutcome::Completed(report) => {
                if ui.output_mode() == OutputMode::Verbose {
                    show_summary(&report, ui);
                }
                Ok(CommandResult::success())
            }
            SetupOutcome::RestartRequired { installer } => {
                tracing::debug!("Waiting on {}", installer.display());
                Ok(CommandResult::success())
            }
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        if ui.output_mode() == OutputMode::Verbose {
            let used = self
                .config_path
                .clone()
                .or_else(|| find_project_config(&self.project_root));
            match used {
                Some(path) => ui.message(&format!("Config: {}", path.display())),
                None => ui.message("Config: built-in defaults"),
            }
        }

        let ctx = default_context(&self.project_root);
        self.run(&config, &ctx, ui)
    }
}

fn show_summary(report: &SetupReport, ui: &mut dyn UserInterface) {
    let generation = match &report.generation {
        GenerationOutcome::Ran { exit_code } => format!("ran (exit code {:?})", exit_code),
        GenerationOutcome::SkippedPlatform => "skipped on this platform".to_string(),
        GenerationOutcome::SkippedNoPremake => "skipped, no Premake".to_string(),
    };

    ui.message("");
    let git = match &report.host {
        HostStatus::Ready { git_version } => git_version.clone(),
        HostStatus::Missing { message } => message.clone(),
    };
    ui.message(&format!("git:           {}", git));
    ui.message(&format!(
        "premake:       {}",
        if report.premake.is_available() { "available" } else { "missing" }
    ));
    ui.message(&format!(
        "vulkan:        {}",
        if report.vulkan.is_ready() { "ready" } else { "not ready" }
    ));
    ui.message(&format!(
        "submodules:    {}",
        if report.submodules_updated { "updated" } else { "failed" }
    ));
    ui.message(&format!("generation:    {}", generation));
    ui.message(&format!("took {:.1}s", report.duration.as_secs_f64()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::requirements::test_support::{with_context, Recorder};
    use crate::shell::Platform;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn setup_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = SetupCommand::new(temp.path(), None);
        assert_eq!(cmd.project_root(), temp.path());
    }

    #[test]
    fn installer_launch_exits_zero() {
        let temp = TempDir::new().unwrap();
        let cmd = SetupCommand::new(temp.path(), None);
        let rec = Recorder::default();
        let mut ui = MockUI::new();
        ui.set_prompt_response("download_premake", "n");
        ui.set_prompt_response("install_vulkan_sdk", "y");

        let result = with_context(&rec, temp.path(), Platform::Windows, |ctx| {
            cmd.run(&SetupConfig::default(), ctx, &mut ui).unwrap()
        });

        assert!(result.success);
        assert_eq!(rec.launches.borrow().len(), 1);
    }

    #[test]
    fn verbose_run_prints_summary() {
        let temp = TempDir::new().unwrap();
        let cmd = SetupCommand::new(temp.path(), None);
        let rec = Recorder::default();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        ui.set_default_prompt_response("n");

        let result = with_context(&rec, temp.path(), Platform::Linux, |ctx| {
            cmd.run(&SetupConfig::default(), ctx, &mut ui).unwrap()
        });

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("generation:    skipped, no Premake"));
    }

    #[test]
    fn missing_git_still_completes() {
        let temp = TempDir::new().unwrap();
        let cmd = SetupCommand::new(temp.path(), None);
        let rec = Recorder {
            git_version_output: None,
            ..Default::default()
        };
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        ui.set_default_prompt_response("n");

        let result = with_context(&rec, temp.path(), Platform::Linux, |ctx| {
            cmd.run(&SetupConfig::default(), ctx, &mut ui).unwrap()
        });

        assert!(result.success);
        assert!(ui.has_message("git:           'git' was not found on PATH"));
        assert!(ui.has_message("submodules:    updated"));
    }

    #[test]
    fn bad_config_fails_before_running() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".oak")).unwrap();
        fs::write(temp.path().join(".oak/setup.yml"), "premake: [unclosed").unwrap();
        let cmd = SetupCommand::new(temp.path(), None);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);

        assert!(matches!(result, Err(SetupError::ConfigParseError { .. })));
        assert!(ui.headers().is_empty());
    }
}
