//! Fetching third-party tools: HTTP downloads and archive extraction.

pub mod archive;
pub mod http;

pub use archive::{extract_archive, unpack_archive, ArchiveFormat};
pub use http::{download_file, Downloader};
