use crate::error::ContentError;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::info;
use zip::ZipArchive;

/// Replace `dest_dir` with the decompressed contents of the archive at
/// `archive_path`.
///
/// The destination is removed in its entirety first, so nothing from a
/// previous run survives: after a successful return the tree under
/// `dest_dir` mirrors the archive exactly. Entries are written one at a
/// time, each file fully written and closed before the next entry opens, so
/// an interrupted run leaves a prefix of the intended tree rather than a
/// half-written file that looks complete.
///
/// Directory entries (names ending in `/`) are skipped; the directories
/// they describe are created as parents of the files inside them. An
/// archive of empty directories therefore unpacks to an empty tree.
///
/// Blocking. Runs once at boot, before the listener is up.
pub fn unpack_archive(archive_path: &Path, dest_dir: &Path) -> Result<(), ContentError> {
    if !archive_path.exists() {
        return Err(ContentError::ArchiveNotFound(archive_path.to_path_buf()));
    }

    if dest_dir.exists() {
        fs::remove_dir_all(dest_dir)?;
    }
    fs::create_dir_all(dest_dir)?;

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }

        let Some(rel) = entry.enclosed_name() else {
            return Err(ContentError::UnsafeEntry(entry.name().to_string()));
        };
        let out_path = dest_dir.join(rel);

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
    }

    info!(
        archive = %archive_path.display(),
        dest = %dest_dir.display(),
        entries = archive.len(),
        "content archive extracted"
    );
    Ok(())
}
