pub use corvus_core::*;

#[cfg(feature = "server")]
pub mod server {
    pub use corvus_server::*;
}

#[cfg(feature = "fs")]
pub mod fs {
    pub use corvus_fs::*;
}

pub mod prelude {
    pub use corvus_core::prelude::*;

    #[cfg(feature = "server")]
    pub use corvus_server::prelude::*;

    #[cfg(feature = "fs")]
    pub use corvus_fs::{ContentCache, ContentStore};
}
