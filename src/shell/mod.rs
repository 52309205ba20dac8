//! Process execution, installer launching and platform detection.

pub mod command;
pub mod launch;
pub mod platform;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use launch::launch_detached;
pub use platform::{is_ci, Platform};
