use std::path::PathBuf;
use thiserror::Error;

/// Failures while building the content tree: archive ingestion, indexing and
/// cache access. All of these are fatal at boot except `CacheNotLoaded`,
/// which marks a request that arrived before the cache was populated.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("archive entry escapes the destination: {0}")]
    UnsafeEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("content cache not loaded")]
    CacheNotLoaded,
}

/// Per-request failures when serving a file out of the content root.
///
/// The `Display` strings for the first three variants are the exact response
/// bodies of the file endpoint.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Access denied")]
    AccessDenied,

    #[error("File not found")]
    NotFound,

    #[error("Cannot serve directory")]
    IsDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
