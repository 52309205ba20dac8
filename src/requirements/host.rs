//! Host prerequisites: the git executable the setup drives.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use crate::config::HostConfig;
use crate::error::{Result, SetupError};
use crate::requirements::status::HostStatus;
use crate::requirements::SetupContext;
use crate::shell::CommandOptions;
use crate::ui::UserInterface;

/// A `major.minor.patch` tool version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

impl ToolVersion {
    /// Find the first version number in `text`, e.g. in
    /// `git version 2.39.2.windows.1`. A missing patch component is 0.
    pub fn extract(text: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(text)?;
        let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        Some(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3).unwrap_or(0),
        })
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Probe git without printing anything.
///
/// `Err` only for an unparsable `min_git_version` in the config.
pub fn probe_host(config: &HostConfig, ctx: &SetupContext<'_>) -> Result<HostStatus> {
    let minimum = ToolVersion::extract(&config.min_git_version).ok_or_else(|| {
        SetupError::Other(anyhow::anyhow!(
            "Invalid min_git_version '{}' in host config",
            config.min_git_version
        ))
    })?;

    let args = vec!["--version".to_string()];
    let output = match (ctx.run)(&config.git, &args, &CommandOptions::captured()) {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("git probe failed: {}", e);
            return Ok(HostStatus::Missing {
                message: format!("'{}' was not found on PATH", config.git),
            });
        }
    };

    if !output.success {
        return Ok(HostStatus::Missing {
            message: format!(
                "'{} --version' exited with code {:?}",
                config.git, output.exit_code
            ),
        });
    }

    let Some(found) = ToolVersion::extract(&output.stdout) else {
        return Ok(HostStatus::Missing {
            message: format!(
                "Could not read a version from '{}'",
                output.stdout.trim()
            ),
        });
    };

    tracing::debug!("Found git {} (minimum {})", found, minimum);

    match found.cmp(&minimum) {
        Ordering::Less => Ok(HostStatus::Missing {
            message: format!("git {} is older than the required {}", found, minimum),
        }),
        Ordering::Equal | Ordering::Greater => Ok(HostStatus::Ready {
            git_version: found.to_string(),
        }),
    }
}

/// Check git and report the result.
///
/// A missing or outdated git is reported and returned as
/// [`HostStatus::Missing`]; the rest of the setup still runs. `Err` only for
/// an invalid host config.
pub fn validate_host(
    config: &HostConfig,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<HostStatus> {
    let mut spinner = ui.start_spinner("Checking git...");

    let status = match probe_host(config, ctx) {
        Ok(status) => status,
        Err(e) => {
            spinner.finish_error("Could not check git");
            return Err(e);
        }
    };

    match &status {
        HostStatus::Ready { git_version } => {
            spinner.finish_success(&format!("Found git {}", git_version));
        }
        HostStatus::Missing { message } => {
            spinner.finish_error(message);
            tracing::warn!("git check failed: {}", message);
            ui.warning(&format!(
                "git {} or newer is needed to update submodules.",
                config.min_git_version
            ));
        }
    }

    Ok(status)
}
