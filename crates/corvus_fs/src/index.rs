use crate::error::ContentError;
use chrono::{DateTime, Utc};
use corvus_core::listing::{ContentNode, ContentSnapshot, NodeKind};
use std::path::Path;
use walkdir::WalkDir;

/// Walk `root` and materialize the full listing.
///
/// Pre-order: every directory appears before anything inside it. Siblings
/// are sorted lexicographically by file name, so two walks over the same
/// tree produce identical snapshots regardless of how the filesystem
/// enumerates entries.
///
/// Any unreadable entry fails the whole walk; a partial listing is never
/// returned.
pub fn index_tree(root: &Path) -> Result<ContentSnapshot, ContentError> {
    let mut content = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let metadata = entry.metadata()?;

        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        let kind = if entry.file_type().is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::File
        };
        let size = match kind {
            NodeKind::Directory => 0,
            NodeKind::File => metadata.len(),
        };
        let modified: DateTime<Utc> = metadata.modified()?.into();

        content.push(ContentNode {
            name,
            path,
            kind,
            size,
            modified,
        });
    }

    let total_files = count_files(root)?;
    Ok(ContentSnapshot::new(content, total_files))
}

/// Count the files below `root` with a dedicated walk.
///
/// Deliberately not derived from the listing: `totalFiles` is counted
/// against the tree itself, so the two always agree with the disk rather
/// than with each other.
pub fn count_files(root: &Path) -> Result<usize, ContentError> {
    let mut count = 0;
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            count += 1;
        }
    }
    Ok(count)
}
