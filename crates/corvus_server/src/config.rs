use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_SECRET: &str = "your-secret-key";
pub const DEFAULT_ARCHIVE: &str = "CONTENT.zip";
pub const DEFAULT_CONTENT_DIR: &str = "CONTENT";

/// Service configuration, environment-supplied with documented defaults.
///
/// | variable          | default           | meaning                                  |
/// |-------------------|-------------------|------------------------------------------|
/// | `PORT`            | `3003`            | HTTP listen port                         |
/// | `JWT_SECRET`      | `your-secret-key` | HS256 signing secret                     |
/// | `CORS_ORIGINS`    | *(empty)*         | comma-separated allow-list; empty means any origin, with credentials |
/// | `CONTENT_ARCHIVE` | `CONTENT.zip`     | archive ingested at boot                 |
/// | `CONTENT_DIR`     | `CONTENT`         | content root, replaced wholesale at boot |
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub cors_origins: String,
    pub archive_path: PathBuf,
    pub content_dir: PathBuf,
}

impl ServiceConfig {
    /// Read the configuration from the environment, falling back to the
    /// documented default for anything absent or unparsable.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            cors_origins: env::var("CORS_ORIGINS").unwrap_or_default(),
            archive_path: env::var("CONTENT_ARCHIVE")
                .unwrap_or_else(|_| DEFAULT_ARCHIVE.to_string())
                .into(),
            content_dir: env::var("CONTENT_DIR")
                .unwrap_or_else(|_| DEFAULT_CONTENT_DIR.to_string())
                .into(),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: DEFAULT_SECRET.to_string(),
            cors_origins: String::new(),
            archive_path: DEFAULT_ARCHIVE.into(),
            content_dir: DEFAULT_CONTENT_DIR.into(),
        }
    }
}
