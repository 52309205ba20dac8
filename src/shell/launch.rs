//! Handing files to the OS opener.

use std::path::Path;

use crate::error::{Result, SetupError};

/// Open `path` with the OS default handler without waiting for it.
///
/// For an installer executable this starts the installer; the caller is
/// expected to stop and let the user finish the installation.
pub fn launch_detached(path: &Path) -> Result<()> {
    let absolute = std::path::absolute(path)?;
    tracing::debug!("Launching {}", absolute.display());

    open::that_detached(&absolute).map_err(|e| SetupError::LaunchFailed {
        path: absolute.clone(),
        message: e.to_string(),
    })
}
