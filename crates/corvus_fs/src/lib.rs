//! # Corvus FS
//!
//! The filesystem layer of the corvus service: ingests the content archive,
//! indexes the unpacked tree and performs path-contained reads for the file
//! endpoint.
//!
//! Boot order is [`unpack_archive`] then [`ContentStore::open`] then
//! [`ContentCache::load`]; the HTTP layer only ever touches [`ContentCache`]
//! and [`ContentStore`].

pub mod cache;
pub mod error;
pub mod index;
pub mod mime;
pub mod store;
pub mod unpack;

pub use cache::ContentCache;
pub use error::{ContentError, ServeError};
pub use index::{count_files, index_tree};
pub use mime::mime_for_path;
pub use store::ContentStore;
pub use unpack::unpack_archive;
