//! Injectable side effects for requirement checks and setup.
//!
//! Every check takes a [`SetupContext`] instead of touching the network,
//! the environment or child processes directly, so tests can substitute
//! recording stubs.

use std::path::Path;

use crate::error::Result;
use crate::fetch::{download_file, unpack_archive};
use crate::shell::{execute, launch_detached, CommandOptions, CommandResult, Platform};

/// Mockable dependencies for the setup run.
pub struct SetupContext<'a> {
    /// Root of the engine checkout; relative config paths resolve here.
    pub project_root: &'a Path,
    /// Platform the run behaves as.
    pub platform: Platform,
    /// Read an environment variable.
    pub env_var: &'a dyn Fn(&str) -> Option<String>,
    /// Download a URL to a file, returning bytes written.
    pub download: &'a dyn Fn(&str, &Path) -> Result<u64>,
    /// Extract an archive into a directory and delete the archive.
    pub unpack: &'a dyn Fn(&Path, &Path) -> Result<()>,
    /// Hand a file to the OS opener without waiting.
    pub launch: &'a dyn Fn(&Path) -> Result<()>,
    /// Run a program with arguments.
    pub run: &'a dyn Fn(&str, &[String], &CommandOptions) -> Result<CommandResult>,
}

fn read_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Build the default `SetupContext` for production use.
pub fn default_context(project_root: &Path) -> SetupContext<'_> {
    SetupContext {
        project_root,
        platform: Platform::current(),
        env_var: &read_env_var,
        download: &download_file,
        unpack: &unpack_archive,
        launch: &launch_detached,
        run: &execute,
    }
}
