//! Boot-time content preparation.

use crate::config::ServiceConfig;
use anyhow::{Context, Result};
use corvus_fs::{ContentCache, ContentStore, unpack_archive};
use std::sync::Arc;
use tracing::info;

/// Run the boot sequence that must complete before the listener opens:
/// replace the content root from the archive, then index it once.
///
/// Any failure here is fatal. The service never comes up over a stale or
/// partial tree.
pub fn prepare_content(config: &ServiceConfig) -> Result<(Arc<ContentCache>, ContentStore)> {
    info!(archive = %config.archive_path.display(), "extracting content archive");
    unpack_archive(&config.archive_path, &config.content_dir)
        .context("failed to extract content archive")?;

    let store =
        ContentStore::open(&config.content_dir).context("failed to open content root")?;

    let cache = Arc::new(ContentCache::new(&config.content_dir));
    cache.load().context("failed to load content cache")?;

    Ok((cache, store))
}
