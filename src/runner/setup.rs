//! The setup run: checks, submodules, then project generation.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::{GenerationConfig, HostConfig, SetupConfig};
use crate::error::Result;
use crate::requirements::{
    validate_host, validate_premake, validate_vulkan, HostStatus, PremakeStatus, SetupContext,
    VulkanStatus,
};
use crate::shell::{display_command, CommandOptions};
use crate::ui::UserInterface;

/// What happened to the project generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// The script ran with this exit code.
    Ran { exit_code: Option<i32> },

    /// Not the platform the script is written for.
    SkippedPlatform,

    /// Premake is unavailable.
    SkippedNoPremake,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub host: HostStatus,
    pub premake: PremakeStatus,
    pub vulkan: VulkanStatus,
    /// Whether `git submodule update` exited successfully.
    pub submodules_updated: bool,
    pub generation: GenerationOutcome,
    #[serde(skip)]
    pub duration: Duration,
}

/// How a run ended.
#[derive(Debug, Clone)]
pub enum SetupOutcome {
    /// Every step ran.
    Completed(SetupReport),

    /// The Vulkan installer was launched; setup must be run again once it
    /// finishes.
    RestartRequired { installer: PathBuf },
}

/// Run the whole setup.
///
/// Missing tools, git included, degrade the run instead of failing it.
/// Errors are reserved for bad config and for I/O, network or launch
/// failures.
pub fn run_setup(
    config: &SetupConfig,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<SetupOutcome> {
    let start = Instant::now();
    ui.show_header("Oak setup");
    tracing::debug!("Setting up {}", ctx.project_root.display());

    let host = validate_host(&config.host, ctx, ui)?;

    let premake = validate_premake(&config.premake, ctx, ui)?;

    let vulkan = validate_vulkan(&config.vulkan, ctx, ui)?;
    if let VulkanStatus::InstallerLaunched { installer } = vulkan {
        tracing::debug!("Stopping until the Vulkan SDK installer finishes");
        return Ok(SetupOutcome::RestartRequired { installer });
    }

    let submodules_updated = update_submodules(&config.host, ctx, ui)?;
    let generation = generate_projects(&config.generation, &premake, ctx, ui)?;

    if premake.is_available() {
        ui.success("Setup completed!");
    } else {
        ui.warning("Oak requires Premake to generate project files.");
    }

    Ok(SetupOutcome::Completed(SetupReport {
        host,
        premake,
        vulkan,
        submodules_updated,
        generation,
        duration: start.elapsed(),
    }))
}

/// Fetch and check out all submodules recursively.
///
/// Returns whether git exited successfully. A non-zero exit and a git that
/// cannot be started are both reported as warnings.
pub fn update_submodules(
    config: &HostConfig,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<bool> {
    let args: Vec<String> = ["submodule", "update", "--init", "--recursive"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    ui.message("Updating submodules...");
    tracing::debug!("Running {}", display_command(&config.git, &args));

    let result = match (ctx.run)(&config.git, &args, &CommandOptions::in_dir(ctx.project_root)) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("git submodule update could not start: {}", e);
            ui.warning(&format!("Submodule update failed: {}", e));
            return Ok(false);
        }
    };
    if !result.success {
        tracing::warn!("git submodule update exited with {:?}", result.exit_code);
        ui.warning(&format!(
            "Submodule update failed (exit code {})",
            result
                .exit_code
                .map_or_else(|| "none".to_string(), |c| c.to_string())
        ));
    }
    Ok(result.success)
}

/// Run the project generation script when Premake is available and the
/// current platform is the one the script targets.
pub fn generate_projects(
    config: &GenerationConfig,
    premake: &PremakeStatus,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<GenerationOutcome> {
    if !premake.is_available() {
        return Ok(GenerationOutcome::SkippedNoPremake);
    }
    if ctx.platform != config.platform {
        tracing::debug!(
            "Skipping project generation: {} script on {}",
            config.platform,
            ctx.platform
        );
        return Ok(GenerationOutcome::SkippedPlatform);
    }

    let script = ctx.project_root.join(&config.script);
    let script = std::path::absolute(&script).unwrap_or(script);
    let program = script.to_string_lossy();

    ui.message("Running premake...");
    tracing::debug!("Running {}", display_command(&program, &config.args));

    let result = (ctx.run)(&program, &config.args, &CommandOptions::in_dir(ctx.project_root))?;
    if !result.success {
        tracing::warn!("{} exited with {:?}", program, result.exit_code);
        ui.warning(&format!(
            "Project generation exited with code {:?}",
            result.exit_code
        ));
    }

    Ok(GenerationOutcome::Ran {
        exit_code: result.exit_code,
    })
}
