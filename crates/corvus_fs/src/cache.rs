use crate::error::ContentError;
use crate::index::index_tree;
use corvus_core::listing::ContentSnapshot;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::info;

/// Snapshot holder for the content listing.
///
/// Populated via [`load`](Self::load) once at boot and handed out read-only
/// afterwards. A reload swaps the inner `Arc` in a single write, so a reader
/// sees either the previous snapshot or the new one, never a mix; readers
/// holding the old `Arc` keep a coherent view until they drop it.
#[derive(Debug)]
pub struct ContentCache {
    root: PathBuf,
    snapshot: RwLock<Option<Arc<ContentSnapshot>>>,
}

impl ContentCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            snapshot: RwLock::new(None),
        }
    }

    /// Index the content root and publish the result, replacing any
    /// previously published snapshot.
    pub fn load(&self) -> Result<Arc<ContentSnapshot>, ContentError> {
        let started = Instant::now();
        let snapshot = Arc::new(index_tree(&self.root)?);

        let mut slot = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(snapshot.clone());
        drop(slot);

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            entries = snapshot.content.len(),
            files = snapshot.total_files,
            "content cache loaded"
        );
        Ok(snapshot)
    }

    /// The published snapshot. Fails with [`ContentError::CacheNotLoaded`]
    /// until the first successful [`load`](Self::load).
    pub fn get(&self) -> Result<Arc<ContentSnapshot>, ContentError> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(ContentError::CacheNotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
