//! Premake, the project file generator.

use std::path::{Path, PathBuf};

use crate::config::PremakeConfig;
use crate::error::Result;
use crate::requirements::consent::ask_permission;
use crate::requirements::status::PremakeStatus;
use crate::requirements::SetupContext;
use crate::ui::UserInterface;

/// Prompt key for the download question.
pub const DOWNLOAD_PROMPT_KEY: &str = "download_premake";

/// Path of the installed executable, if present.
pub fn find_premake(config: &PremakeConfig, ctx: &SetupContext<'_>) -> Option<PathBuf> {
    let path = config.executable_path(ctx.project_root, ctx.platform);
    tracing::debug!("Looking for premake at {}", path.display());
    path.is_file().then_some(path)
}

/// Report the Premake status without prompting or downloading.
pub fn inspect_premake(config: &PremakeConfig, ctx: &SetupContext<'_>) -> PremakeStatus {
    match find_premake(config, ctx) {
        Some(path) => PremakeStatus::Found { path },
        None => PremakeStatus::Missing {
            expected: config.executable_path(ctx.project_root, ctx.platform),
        },
    }
}

/// Make sure Premake is available, offering to download it.
///
/// Declining is not an error; the returned status is `Missing`. Download and
/// extraction failures propagate.
pub fn validate_premake(
    config: &PremakeConfig,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<PremakeStatus> {
    let status = match find_premake(config, ctx) {
        Some(path) => PremakeStatus::Found { path },
        None => install_premake(config, ctx, ui)?,
    };

    if status.is_available() {
        let dir = config.install_dir(ctx.project_root);
        ui.success(&format!("Correct Premake located at {}", absolute(&dir).display()));
    } else {
        ui.warning("Premake is not installed.");
    }

    Ok(status)
}

fn install_premake(
    config: &PremakeConfig,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<PremakeStatus> {
    let question = format!(
        "Premake not found. Would you like to download Premake {}?",
        config.version
    );
    let expected = config.executable_path(ctx.project_root, ctx.platform);

    if !ask_permission(ui, DOWNLOAD_PROMPT_KEY, &question)? {
        tracing::debug!("Premake download declined");
        return Ok(PremakeStatus::Missing { expected });
    }

    let install_dir = config.install_dir(ctx.project_root);
    let archive_url = config.archive_url(ctx.platform);
    let archive_path = config.archive_path(ctx.project_root, ctx.platform);

    ui.message(&format!(
        "Downloading {} to {}",
        archive_url,
        archive_path.display()
    ));
    (ctx.download)(&archive_url, &archive_path)?;

    ui.message(&format!("Extracting {}", archive_path.display()));
    (ctx.unpack)(&archive_path, &install_dir)?;
    ui.message(&format!(
        "Premake {} has been downloaded to '{}'",
        config.version,
        install_dir.display()
    ));

    let license_path = config.license_path(ctx.project_root);
    ui.message(&format!(
        "Downloading {} to {}",
        config.license_url,
        license_path.display()
    ));
    (ctx.download)(&config.license_url, &license_path)?;
    ui.message(&format!(
        "Premake License file has been downloaded to '{}'",
        install_dir.display()
    ));

    tracing::debug!("Installed premake {} into {}", config.version, install_dir.display());
    Ok(PremakeStatus::Installed { path: expected })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
