//! Requirement status types.
//!
//! Each check produces a status describing whether, and how, a tool is
//! available. Statuses serialize for `oak-setup check --json`.

use serde::Serialize;
use std::path::PathBuf;

/// Result of probing the host prerequisites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HostStatus {
    /// git is present and new enough.
    Ready {
        /// Version reported by `git --version`
        git_version: String,
    },

    /// git is absent, unreadable or too old.
    Missing {
        /// Why the host is unusable
        message: String,
    },
}

impl HostStatus {
    /// Whether the setup can go on.
    pub fn is_ready(&self) -> bool {
        matches!(self, HostStatus::Ready { .. })
    }
}

/// Result of the Premake check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PremakeStatus {
    /// The executable was already in place.
    Found { path: PathBuf },

    /// The executable was downloaded during this run.
    Installed { path: PathBuf },

    /// Not present; the user declined the download or was never asked.
    Missing { expected: PathBuf },
}

impl PremakeStatus {
    /// Whether project generation can use Premake.
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            PremakeStatus::Found { .. } | PremakeStatus::Installed { .. }
        )
    }
}

/// Result of the Vulkan SDK check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VulkanStatus {
    /// A matching SDK is installed.
    Ready {
        /// Value of the SDK environment variable
        sdk_path: String,
        /// Whether the debug libraries are installed
        debug_libs: bool,
    },

    /// The SDK environment variable is not set.
    NotInstalled,

    /// An SDK is installed but its version does not match.
    WrongVersion { sdk_path: String },

    /// The installer was started; setup must be re-run afterwards.
    InstallerLaunched { installer: PathBuf },
}

impl VulkanStatus {
    /// Whether a matching SDK is installed.
    pub fn is_ready(&self) -> bool {
        matches!(self, VulkanStatus::Ready { .. })
    }

    /// Whether a debug build configuration is possible.
    pub fn has_debug_libs(&self) -> bool {
        matches!(
            self,
            VulkanStatus::Ready {
                debug_libs: true,
                ..
            }
        )
    }
}
