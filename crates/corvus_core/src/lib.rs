//! # Corvus Core
//!
//! Types shared by the corvus service crates. This is the wire contract of
//! the content API:
//!
//! - [`listing::ContentSnapshot`]: the cached tree listing behind `GET /api/content`
//! - [`claims::Credential`]: the verified identity attached to a request
//! - [`error::AuthError`]: the terminal outcomes of the token gate

pub mod claims;
pub mod error;
pub mod listing;

pub mod prelude {
    pub use super::claims::*;
    pub use super::error::*;
    pub use super::listing::*;
}
