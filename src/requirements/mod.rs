//! Requirement detection and installation.
//!
//! Each requirement has an `inspect`/`probe` function that only looks, and a
//! `validate` function that reports through the UI and may offer to fetch
//! what is missing.
//!
//! # Modules
//!
//! - [`host`] - git, the one tool the setup itself depends on
//! - [`premake`] - the project generator, downloaded on request
//! - [`vulkan`] - the graphics SDK, installed out-of-band
//! - [`consent`] - the yes/no question asked before any download
//! - [`context`] - injectable side effects
//! - [`status`] - status types shared by the checks

pub mod consent;
pub mod context;
pub mod host;
pub mod premake;
pub mod status;
pub mod vulkan;

#[cfg(test)]
pub(crate) mod test_support;

pub use consent::ask_permission;
pub use context::{default_context, SetupContext};
pub use host::{probe_host, validate_host, ToolVersion};
pub use premake::{find_premake, inspect_premake, validate_premake};
pub use status::{HostStatus, PremakeStatus, VulkanStatus};
pub use vulkan::{inspect_vulkan, validate_vulkan};
