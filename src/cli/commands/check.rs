//! Check command implementation.
//!
//! The `oak-setup check` command reports what setup would find, without
//! prompting, downloading or running anything beyond `git --version`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::{load_config, SetupConfig};
use crate::error::{Result, SetupError};
use crate::requirements::{
    default_context, inspect_premake, inspect_vulkan, probe_host, HostStatus, PremakeStatus,
    SetupContext, VulkanStatus,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Status of every requirement.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub host: HostStatus,
    pub premake: PremakeStatus,
    pub vulkan: VulkanStatus,
}

impl CheckReport {
    /// Gather statuses through `ctx`.
    pub fn gather(config: &SetupConfig, ctx: &SetupContext<'_>) -> Result<Self> {
        Ok(Self {
            host: probe_host(&config.host, ctx)?,
            premake: inspect_premake(&config.premake, ctx),
            vulkan: inspect_vulkan(&config.vulkan, ctx),
        })
    }

    /// Whether `setup` would find everything in place.
    pub fn all_ready(&self) -> bool {
        self.host.is_ready() && self.premake.is_available() && self.vulkan.is_ready()
    }
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn report(&self, report: &CheckReport, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| SetupError::Other(e.into()))?;
            ui.message(&json);
        } else {
            show_report(report, ui);
        }

        // Missing tools are for setup to fix, so only a broken host fails
        if report.host.is_ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let ctx = default_context(&self.project_root);
        let report = CheckReport::gather(&config, &ctx)?;
        self.report(&report, ui)
    }
}

fn show_report(report: &CheckReport, ui: &mut dyn UserInterface) {
    ui.show_header("Oak setup - Check");

    match &report.host {
        HostStatus::Ready { git_version } => ui.success(&format!("git {}", git_version)),
        HostStatus::Missing { message } => ui.error(&format!("git: {}", message)),
    }

    match &report.premake {
        PremakeStatus::Found { path } | PremakeStatus::Installed { path } => {
            ui.success(&format!("premake at {}", path.display()))
        }
        PremakeStatus::Missing { expected } => {
            ui.warning(&format!("premake missing (expected {})", expected.display()))
        }
    }

    match &report.vulkan {
        VulkanStatus::Ready {
            sdk_path,
            debug_libs,
        } => {
            ui.success(&format!("Vulkan SDK at {}", sdk_path));
            if !debug_libs {
                ui.warning("Vulkan SDK debug libs missing; debug configuration disabled");
            }
        }
        VulkanStatus::NotInstalled => ui.warning("Vulkan SDK not installed"),
        VulkanStatus::WrongVersion { sdk_path } => {
            ui.warning(&format!("Vulkan SDK at {} has the wrong version", sdk_path))
        }
        VulkanStatus::InstallerLaunched { installer } => {
            ui.message(&format!("Vulkan SDK installer at {}", installer.display()))
        }
    }

    if report.all_ready() {
        ui.message("Everything is in place.");
    } else {
        ui.message("Run 'oak-setup' to fix what is missing.");
    }
}
