//! oak-setup - Development environment bootstrap for the Oak engine.
//!
//! Checks the host, fetches Premake on request, verifies the Vulkan SDK,
//! updates submodules and generates project files.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.oak/setup.yml` overrides
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP downloads and archive extraction
//! - [`requirements`] - Host, Premake and Vulkan checks
//! - [`runner`] - The setup run
//! - [`shell`] - Process execution and platform detection
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use oak_setup::config::SetupConfig;
//! use oak_setup::shell::Platform;
//!
//! let config = SetupConfig::default();
//! assert_eq!(
//!     config.premake.archive_name(Platform::Windows),
//!     "premake-5.0.0-beta2-windows.zip"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
