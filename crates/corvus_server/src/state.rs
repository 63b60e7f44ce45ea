use crate::jwt::JwtService;
use corvus_fs::{ContentCache, ContentStore};
use std::sync::Arc;

/// Shared state handed to every handler.
///
/// The cache is written during boot and read-only afterwards; the store goes
/// to disk on every file request.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ContentCache>,
    pub store: ContentStore,
    pub jwt: JwtService,
}
