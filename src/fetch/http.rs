//! HTTP downloads.
//!
//! Downloads stream straight to disk behind an `indicatif` progress bar.
//! The client has no overall timeout: SDK installers are hundreds of
//! megabytes and the run is expected to block until they arrive.

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, SetupError};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("oak-setup/", env!("CARGO_PKG_VERSION"));

/// Fetches files over HTTP/HTTPS.
pub struct Downloader {
    client: Client,
    show_progress: bool,
}

impl Downloader {
    /// Create a downloader that shows a progress bar on a terminal.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(|e| SetupError::Other(e.into()))?;

        Ok(Self {
            client,
            show_progress: true,
        })
    }

    /// Disable the progress bar.
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Download `url` to `dest`, creating parent directories.
    ///
    /// Returns the number of bytes written. A partially written file is
    /// left in place when the transfer fails.
    pub fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let failed = |message: String| SetupError::DownloadFailed {
            url: url.to_string(),
            message,
        };

        tracing::debug!("Downloading {} to {}", url, dest.display());

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failed(format!("HTTP {}", response.status())));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let bar = self.progress_bar(response.content_length(), dest);
        let mut writer = BufWriter::new(File::create(dest)?);
        let mut reader = bar.wrap_read(response);

        let written = io::copy(&mut reader, &mut writer).map_err(|e| failed(e.to_string()))?;
        writer.flush()?;
        bar.finish_and_clear();

        tracing::debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }

    fn progress_bar(&self, length: Option<u64>, dest: &Path) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        match length {
            Some(len) => {
                let bar = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar().template(
                    "{msg} [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
                ) {
                    bar.set_style(style.progress_chars("=> "));
                }
                bar.set_message(name);
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} {bytes}")
                {
                    bar.set_style(style);
                }
                bar.set_message(name);
                bar
            }
        }
    }
}

/// Download with the default [`Downloader`].
pub fn download_file(url: &str, dest: &Path) -> Result<u64> {
    Downloader::new()?.download(url, dest)
}
