//! Configuration for the setup run.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use oak_setup::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".oak")).unwrap();
//! fs::write(
//!     temp.path().join(".oak/setup.yml"),
//!     "premake:\n  version: 5.0.0-beta3\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.premake.version, "5.0.0-beta3");
//! assert_eq!(config.vulkan.sdk_env_var, "VULKAN_SDK");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE};
pub use schema::{GenerationConfig, HostConfig, PremakeConfig, SetupConfig, VulkanConfig};
