//! Recording stand-ins for [`SetupContext`] effects.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SetupError};
use crate::requirements::SetupContext;
use crate::shell::{CommandOptions, CommandResult, Platform};

/// Scripted environment plus a log of every effect requested.
pub struct Recorder {
    pub env: HashMap<String, String>,
    pub git_version_output: Option<String>,
    pub run_exit_code: i32,
    /// Every run other than the version probe fails to start.
    pub spawn_fails: bool,
    pub fail_downloads: bool,
    pub downloads: RefCell<Vec<(String, PathBuf)>>,
    pub unpacks: RefCell<Vec<(PathBuf, PathBuf)>>,
    pub launches: RefCell<Vec<PathBuf>>,
    pub runs: RefCell<Vec<(String, Vec<String>, Option<PathBuf>)>>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            env: HashMap::new(),
            git_version_output: Some("git version 2.43.0\n".to_string()),
            run_exit_code: 0,
            spawn_fails: false,
            fail_downloads: false,
            downloads: RefCell::new(Vec::new()),
            unpacks: RefCell::new(Vec::new()),
            launches: RefCell::new(Vec::new()),
            runs: RefCell::new(Vec::new()),
        }
    }
}

impl Recorder {
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn download_urls(&self) -> Vec<String> {
        self.downloads.borrow().iter().map(|(u, _)| u.clone()).collect()
    }

    /// Runs other than `git --version`.
    pub fn commands(&self) -> Vec<String> {
        self.runs
            .borrow()
            .iter()
            .filter(|(_, args, _)| args.first().map(String::as_str) != Some("--version"))
            .map(|(program, args, _)| format!("{} {}", program, args.join(" ")))
            .collect()
    }

    fn effect_count(&self) -> usize {
        self.downloads.borrow().len() + self.unpacks.borrow().len() + self.launches.borrow().len()
    }

    pub fn no_effects(&self) -> bool {
        self.effect_count() == 0
    }
}

/// Run `body` with a context whose effects are served by `rec`.
pub fn with_context<R>(
    rec: &Recorder,
    root: &Path,
    platform: Platform,
    body: impl FnOnce(&SetupContext<'_>) -> R,
) -> R {
    let env_var = |name: &str| rec.env.get(name).cloned();

    let download = |url: &str, dest: &Path| -> Result<u64> {
        rec.downloads
            .borrow_mut()
            .push((url.to_string(), dest.to_path_buf()));
        if rec.fail_downloads {
            return Err(SetupError::DownloadFailed {
                url: url.to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(0)
    };

    let unpack = |archive: &Path, dest: &Path| -> Result<()> {
        rec.unpacks
            .borrow_mut()
            .push((archive.to_path_buf(), dest.to_path_buf()));
        Ok(())
    };

    let launch = |path: &Path| -> Result<()> {
        rec.launches.borrow_mut().push(path.to_path_buf());
        Ok(())
    };

    let run = |program: &str, args: &[String], options: &CommandOptions| -> Result<CommandResult> {
        rec.runs
            .borrow_mut()
            .push((program.to_string(), args.to_vec(), options.cwd.clone()));

        let is_version_probe = args.first().map(String::as_str) == Some("--version");
        if !is_version_probe && rec.spawn_fails {
            return Err(SetupError::CommandFailed {
                command: program.to_string(),
                code: None,
            });
        }
        let (code, stdout) = match (is_version_probe, &rec.git_version_output) {
            (true, Some(out)) => (0, out.clone()),
            (true, None) => {
                return Err(SetupError::CommandFailed {
                    command: program.to_string(),
                    code: None,
                })
            }
            (false, _) => (rec.run_exit_code, String::new()),
        };

        Ok(CommandResult {
            exit_code: Some(code),
            stdout,
            stderr: String::new(),
            duration: Duration::ZERO,
            success: code == 0,
        })
    };

    let ctx = SetupContext {
        project_root: root,
        platform,
        env_var: &env_var,
        download: &download,
        unpack: &unpack,
        launch: &launch,
        run: &run,
    };
    body(&ctx)
}
