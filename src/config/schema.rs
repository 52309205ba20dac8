//! Configuration schema definitions.
//!
//! This module contains the structs that map to the optional
//! `.oak/setup.yml` file. Every field has a default matching the engine's
//! layout, so a file only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shell::Platform;

/// Root configuration structure for `.oak/setup.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Prerequisites of the setup tool itself
    pub host: HostConfig,

    /// Project generator
    pub premake: PremakeConfig,

    /// Graphics SDK
    pub vulkan: VulkanConfig,

    /// Platform-specific project generation
    pub generation: GenerationConfig,
}

/// The version-control tool the setup drives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Git executable name or path
    pub git: String,

    /// Oldest git whose `submodule update --init --recursive` is trusted
    pub min_git_version: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            min_git_version: "2.13.0".to_string(),
        }
    }
}

/// Premake location and download sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PremakeConfig {
    /// Release to download
    pub version: String,

    /// Install directory relative to the project root
    pub install_dir: PathBuf,

    /// Base URL of the release downloads
    pub release_base_url: String,

    /// License file fetched next to the binary
    pub license_url: String,
}

impl Default for PremakeConfig {
    fn default() -> Self {
        Self {
            version: "5.0.0-beta2".to_string(),
            install_dir: PathBuf::from("Thridparty/Premake/bin"),
            release_base_url: "https://github.com/premake/premake-core/releases/download"
                .to_string(),
            license_url: "https://raw.githubusercontent.com/premake/premake-core/master/LICENSE.txt"
                .to_string(),
        }
    }
}

impl PremakeConfig {
    /// Absolute install directory.
    pub fn install_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.install_dir)
    }

    /// Path of the premake executable for `platform`.
    pub fn executable_path(&self, project_root: &Path, platform: Platform) -> PathBuf {
        self.install_dir(project_root)
            .join(platform.executable_name("premake5"))
    }

    /// Release archive file name, e.g. `premake-5.0.0-beta2-windows.zip`.
    pub fn archive_name(&self, platform: Platform) -> String {
        let (os, ext) = match platform {
            Platform::Windows => ("windows", "zip"),
            Platform::Linux => ("linux", "tar.gz"),
            Platform::MacOS => ("macosx", "tar.gz"),
        };
        format!("premake-{}-{}.{}", self.version, os, ext)
    }

    /// Download URL of the release archive.
    pub fn archive_url(&self, platform: Platform) -> String {
        format!(
            "{}/v{}/{}",
            self.release_base_url.trim_end_matches('/'),
            self.version,
            self.archive_name(platform)
        )
    }

    /// Where the archive is downloaded before extraction.
    pub fn archive_path(&self, project_root: &Path, platform: Platform) -> PathBuf {
        self.install_dir(project_root)
            .join(self.archive_name(platform))
    }

    /// Where the license file is written.
    pub fn license_path(&self, project_root: &Path) -> PathBuf {
        self.install_dir(project_root).join("LICENSE.txt")
    }
}

/// Vulkan SDK expectations and installer source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VulkanConfig {
    /// Environment variable pointing at the SDK
    pub sdk_env_var: String,

    /// Version fragment that must appear in the SDK path
    pub required_version: String,

    /// Version offered for installation
    pub install_version: String,

    /// Directory the installer is downloaded to, relative to the project root
    pub install_dir: PathBuf,

    /// Base URL of the SDK downloads
    pub download_base_url: String,

    /// Library whose presence means the debug libraries were installed
    pub debug_library: PathBuf,
}

impl Default for VulkanConfig {
    fn default() -> Self {
        Self {
            sdk_env_var: "VULKAN_SDK".to_string(),
            required_version: "1.3.".to_string(),
            install_version: "1.3.246.1".to_string(),
            install_dir: PathBuf::from("Oak/Thirdparty/VulkanSDK"),
            download_base_url: "https://sdk.lunarg.com/sdk/download".to_string(),
            debug_library: PathBuf::from("Lib/shaderc_sharedd.lib"),
        }
    }
}

impl VulkanConfig {
    /// Installer file name, e.g. `VulkanSDK-1.3.246.1-Installer.exe`.
    pub fn installer_name(&self) -> String {
        format!("VulkanSDK-{}-Installer.exe", self.install_version)
    }

    /// Download URL of the installer.
    pub fn installer_url(&self) -> String {
        format!(
            "{}/{}/windows/{}",
            self.download_base_url.trim_end_matches('/'),
            self.install_version,
            self.installer_name()
        )
    }

    /// Where the installer is downloaded.
    pub fn installer_path(&self, project_root: &Path) -> PathBuf {
        project_root
            .join(&self.install_dir)
            .join(self.installer_name())
    }
}

/// Project file generation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// The only platform the script runs on
    pub platform: Platform,

    /// Script relative to the project root
    pub script: PathBuf,

    /// Arguments passed to the script
    pub args: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Windows,
            script: PathBuf::from("scripts/Win-GenProjects.bat"),
            args: vec!["nopause".to_string()],
        }
    }
}
