//! Vulkan SDK detection and installer hand-off.

use std::path::Path;

use crate::config::VulkanConfig;
use crate::error::Result;
use crate::requirements::consent::ask_permission;
use crate::requirements::status::VulkanStatus;
use crate::requirements::SetupContext;
use crate::shell::Platform;
use crate::ui::UserInterface;

/// Prompt key for the install question.
pub const INSTALL_PROMPT_KEY: &str = "install_vulkan_sdk";

/// Whether the SDK at `sdk_path` ships the debug libraries.
pub fn has_debug_libs(config: &VulkanConfig, sdk_path: &str) -> bool {
    Path::new(sdk_path).join(&config.debug_library).exists()
}

/// Report the SDK status from the environment, without prompting.
pub fn inspect_vulkan(config: &VulkanConfig, ctx: &SetupContext<'_>) -> VulkanStatus {
    let Some(sdk_path) = (ctx.env_var)(&config.sdk_env_var) else {
        return VulkanStatus::NotInstalled;
    };

    if !sdk_path.contains(&config.required_version) {
        return VulkanStatus::WrongVersion { sdk_path };
    }

    let debug_libs = has_debug_libs(config, &sdk_path);
    VulkanStatus::Ready {
        sdk_path,
        debug_libs,
    }
}

/// Check the SDK, offering to run the installer when it is missing or
/// the wrong version.
///
/// A launched installer yields [`VulkanStatus::InstallerLaunched`]; the
/// caller must stop and let the user re-run setup afterwards.
pub fn validate_vulkan(
    config: &VulkanConfig,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<VulkanStatus> {
    let status = inspect_vulkan(config, ctx);

    match &status {
        VulkanStatus::NotInstalled => {
            ui.warning("You don't have the Vulkan SDK installed!");
            offer_install(config, ctx, ui, status.clone())
        }
        VulkanStatus::WrongVersion { sdk_path } => {
            ui.message(&format!("Located Vulkan SDK at {}", sdk_path));
            ui.warning(&format!(
                "You don't have the correct Vulkan SDK version! (Engine requires {})",
                config.required_version
            ));
            offer_install(config, ctx, ui, status.clone())
        }
        VulkanStatus::Ready {
            sdk_path,
            debug_libs,
        } => {
            ui.message(&format!("Located Vulkan SDK at {}", sdk_path));
            ui.success(&format!("Correct Vulkan SDK located at {}", sdk_path));
            if !debug_libs {
                ui.warning("No Vulkan SDK debug libs found. Install Vulkan SDK with debug libs.");
                ui.warning("Debug configuration disabled.");
            }
            Ok(status)
        }
        VulkanStatus::InstallerLaunched { .. } => Ok(status),
    }
}

fn offer_install(
    config: &VulkanConfig,
    ctx: &SetupContext<'_>,
    ui: &mut dyn UserInterface,
    status: VulkanStatus,
) -> Result<VulkanStatus> {
    if ctx.platform != Platform::Windows {
        tracing::debug!("No Vulkan installer for {}", ctx.platform);
        ui.warning(&format!(
            "Install the Vulkan SDK {} with your platform's package manager or from LunarG.",
            config.install_version
        ));
        ui.warning("Vulkan SDK not installed correctly.");
        return Ok(status);
    }

    let question = format!(
        "Would you like to install VulkanSDK {}?",
        config.install_version
    );
    if !ask_permission(ui, INSTALL_PROMPT_KEY, &question)? {
        tracing::debug!("Vulkan SDK install declined");
        ui.warning("Vulkan SDK not installed correctly.");
        return Ok(status);
    }

    let url = config.installer_url();
    let installer = config.installer_path(ctx.project_root);
    ui.message(&format!("Downloading {} to {}", url, installer.display()));
    (ctx.download)(&url, &installer)?;

    ui.message("Running Vulkan SDK installer...");
    (ctx.launch)(&installer)?;
    ui.message("Re-run this script after installation!");

    tracing::debug!("Launched {}", installer.display());
    Ok(VulkanStatus::InstallerLaunched { installer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::test_support::{with_context, Recorder};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn sdk_dir(version: &str, debug: bool) -> (TempDir, String) {
        let temp = TempDir::new().unwrap();
        let sdk = temp.path().join("VulkanSDK").join(version);
        fs::create_dir_all(sdk.join("Lib")).unwrap();
        if debug {
            fs::write(sdk.join("Lib/shaderc_sharedd.lib"), "").unwrap();
        }
        let path = sdk.to_string_lossy().to_string();
        (temp, path)
    }

    #[test]
    fn ready_sdk_needs_no_prompt() {
        let (_temp, sdk) = sdk_dir("1.3.250.1", true);
        let rec = Recorder::default().with_env("VULKAN_SDK", &sdk);
        let mut ui = MockUI::new();

        let status = with_context(&rec, Path::new("/p"), Platform::Windows, |ctx| {
            validate_vulkan(&VulkanConfig::default(), ctx, &mut ui).unwrap()
        });

        assert!(status.has_debug_libs());
        assert!(ui.prompts_shown().is_empty());
        assert!(rec.no_effects());
        assert!(ui.has_success("Correct Vulkan SDK located at"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_debug_libs_disable_debug_configuration() {
        let (_temp, sdk) = sdk_dir("1.3.250.1", false);
        let rec = Recorder::default().with_env("VULKAN_SDK", &sdk);
        let mut ui = MockUI::new();

        let status = with_context(&rec, Path::new("/p"), Platform::Windows, |ctx| {
            validate_vulkan(&VulkanConfig::default(), ctx, &mut ui).unwrap()
        });

        assert!(status.is_ready());
        assert!(!status.has_debug_libs());
        assert!(ui.has_warning("Debug configuration disabled."));
    }

    #[test]
    fn wrong_version_detected() {
        let rec = Recorder::default().with_env("VULKAN_SDK", "C:/VulkanSDK/1.2.198.1");
        let status = with_context(&rec, Path::new("/p"), Platform::Windows, |ctx| {
            inspect_vulkan(&VulkanConfig::default(), ctx)
        });
        assert_eq!(
            status,
            VulkanStatus::WrongVersion {
                sdk_path: "C:/VulkanSDK/1.2.198.1".to_string()
            }
        );
    }

    #[test]
    fn declined_install_keeps_status() {
        let rec = Recorder::default();
        let mut ui = MockUI::new();
        ui.set_prompt_response(INSTALL_PROMPT_KEY, "n");

        let status = with_context(&rec, Path::new("/p"), Platform::Windows, |ctx| {
            validate_vulkan(&VulkanConfig::default(), ctx, &mut ui).unwrap()
        });

        assert_eq!(status, VulkanStatus::NotInstalled);
        assert!(rec.no_effects());
        assert!(ui.has_warning("You don't have the Vulkan SDK installed!"));
        assert!(ui.has_warning("Vulkan SDK not installed correctly."));
    }

    #[test]
    fn accepted_install_downloads_and_launches() {
        let rec = Recorder::default().with_env("VULKAN_SDK", "C:/VulkanSDK/1.2.198.1");
        let mut ui = MockUI::new();
        ui.set_prompt_response(INSTALL_PROMPT_KEY, "Y");
        let config = VulkanConfig::default();
        let root = Path::new("/p");

        let status = with_context(&rec, root, Platform::Windows, |ctx| {
            validate_vulkan(&config, ctx, &mut ui).unwrap()
        });

        let installer = config.installer_path(root);
        assert_eq!(
            status,
            VulkanStatus::InstallerLaunched {
                installer: installer.clone()
            }
        );
        assert_eq!(
            rec.download_urls(),
            vec!["https://sdk.lunarg.com/sdk/download/1.3.246.1/windows/VulkanSDK-1.3.246.1-Installer.exe".to_string()]
        );
        assert_eq!(rec.launches.borrow().as_slice(), &[installer]);
        assert!(rec.unpacks.borrow().is_empty());
        assert!(ui.has_message("Re-run this script after installation!"));
    }

    #[test]
    fn no_installer_offered_off_windows() {
        let rec = Recorder::default();
        let mut ui = MockUI::new();
        ui.set_prompt_response(INSTALL_PROMPT_KEY, "y");

        let status = with_context(&rec, Path::new("/p"), Platform::Linux, |ctx| {
            validate_vulkan(&VulkanConfig::default(), ctx, &mut ui).unwrap()
        });

        assert_eq!(status, VulkanStatus::NotInstalled);
        assert!(ui.prompts_shown().is_empty());
        assert!(rec.no_effects());
    }

    #[test]
    fn custom_env_var_is_read() {
        let rec = Recorder::default().with_env("OAK_VULKAN", "/opt/vulkan/1.3.268.0");
        let config = VulkanConfig {
            sdk_env_var: "OAK_VULKAN".to_string(),
            ..Default::default()
        };
        let status = with_context(&rec, Path::new("/p"), Platform::Linux, |ctx| {
            inspect_vulkan(&config, ctx)
        });
        assert!(status.is_ready());
    }
}
