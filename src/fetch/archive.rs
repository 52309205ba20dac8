//! Archive extraction.
//!
//! Release archives are unpacked into a target directory and then removed.
//! The format is chosen from the file name: `.zip` or `.tar.gz`/`.tgz`.

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::Path;

use crate::error::{Result, SetupError};

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

impl ArchiveFormat {
    /// Detect the format from a file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".zip") {
            Some(Self::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else {
            None
        }
    }
}

/// Extract `archive` into `dest`.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    let failed = |message: String| SetupError::ExtractFailed {
        path: archive.to_path_buf(),
        message,
    };

    let format = ArchiveFormat::from_path(archive)
        .ok_or_else(|| failed("unsupported archive format".to_string()))?;

    tracing::debug!("Extracting {} to {}", archive.display(), dest.display());
    fs::create_dir_all(dest)?;
    let file = File::open(archive)?;

    match format {
        ArchiveFormat::Zip => {
            let mut zip = zip::ZipArchive::new(file).map_err(|e| failed(e.to_string()))?;
            zip.extract(dest).map_err(|e| failed(e.to_string()))?;
        }
        ArchiveFormat::TarGz => {
            let mut tarball = tar::Archive::new(GzDecoder::new(file));
            tarball.unpack(dest).map_err(|e| failed(e.to_string()))?;
        }
    }

    Ok(())
}

/// Extract `archive` into `dest`, then delete the archive.
pub fn unpack_archive(archive: &Path, dest: &Path) -> Result<()> {
    extract_archive(archive, dest)?;
    fs::remove_file(archive)?;
    tracing::debug!("Removed {}", archive.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_zip(path: &Path, name: &str, contents: &[u8]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file(name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents).unwrap();
        writer.finish().unwrap();
    }

    fn write_tar_gz(path: &Path, name: &str, contents: &[u8]) {
        let encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, name, contents).unwrap();
        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn detects_formats() {
        assert_eq!(
            ArchiveFormat::from_path(Path::new("premake-5.0.0-beta2-windows.zip")),
            Some(ArchiveFormat::Zip)
        );
        assert_eq!(
            ArchiveFormat::from_path(Path::new("premake-5.0.0-beta2-linux.tar.gz")),
            Some(ArchiveFormat::TarGz)
        );
        assert_eq!(
            ArchiveFormat::from_path(Path::new("tool.TGZ")),
            Some(ArchiveFormat::TarGz)
        );
        assert_eq!(ArchiveFormat::from_path(Path::new("installer.exe")), None);
    }

    #[test]
    fn extracts_zip() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("premake.zip");
        write_zip(&archive, "premake5.exe", b"binary");

        let dest = temp.path().join("bin");
        extract_archive(&archive, &dest).unwrap();

        assert_eq!(fs::read(dest.join("premake5.exe")).unwrap(), b"binary");
        assert!(archive.exists());
    }

    #[test]
    fn extracts_tar_gz() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("premake.tar.gz");
        write_tar_gz(&archive, "premake5", b"binary");

        let dest = temp.path().join("bin");
        extract_archive(&archive, &dest).unwrap();

        assert_eq!(fs::read(dest.join("premake5")).unwrap(), b"binary");
    }

    #[test]
    fn unpack_removes_archive() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("premake.zip");
        write_zip(&archive, "premake5.exe", b"binary");

        unpack_archive(&archive, temp.path()).unwrap();

        assert!(!archive.exists());
        assert!(temp.path().join("premake5.exe").exists());
    }

    #[test]
    fn corrupt_zip_is_extract_failed() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("broken.zip");
        fs::write(&archive, b"not a zip").unwrap();

        match extract_archive(&archive, temp.path()) {
            Err(SetupError::ExtractFailed { path, .. }) => assert_eq!(path, archive),
            other => panic!("Expected ExtractFailed, got {:?}", other),
        }
    }

    #[test]
    fn unknown_format_is_extract_failed() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("tool.rar");
        fs::write(&archive, b"data").unwrap();

        let result = extract_archive(&archive, &PathBuf::from(temp.path()));
        assert!(matches!(result, Err(SetupError::ExtractFailed { .. })));
    }
}
