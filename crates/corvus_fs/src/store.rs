use crate::error::{ContentError, ServeError};
use crate::mime::mime_for_path;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Read access to the content root with path containment.
///
/// A request path is checked twice before any read: a lexical pass rejects
/// escapes whether or not the target exists, then the joined path is
/// canonicalized so a symlink inside the root cannot point the read outside
/// of it.
#[derive(Clone, Debug)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Open the store over an existing content root. The root is
    /// canonicalized up front so later prefix checks compare resolved paths.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, ContentError> {
        let root = root.as_ref().canonicalize()?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a slash-separated request path to an absolute path inside the
    /// root, or refuse it.
    pub async fn resolve(&self, rel: &str) -> Result<PathBuf, ServeError> {
        // Lexical pass: track how deep the path goes and refuse to pop above
        // the root. `a/../b` stays legal, `a/../../b` does not.
        let mut depth: usize = 0;
        for component in Path::new(rel).components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::CurDir => {}
                Component::ParentDir => {
                    depth = depth.checked_sub(1).ok_or(ServeError::AccessDenied)?;
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(ServeError::AccessDenied);
                }
            }
        }

        let joined = self.root.join(rel);

        // Symlink pass: canonicalize what exists and re-check the prefix.
        match fs::canonicalize(&joined).await {
            Ok(resolved) if resolved.starts_with(&self.root) => Ok(resolved),
            Ok(_) => Err(ServeError::AccessDenied),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ServeError::NotFound),
            Err(err) => Err(ServeError::Io(err)),
        }
    }

    /// Read a contained file in full, tagged with the MIME type of the
    /// requested path.
    ///
    /// Goes to disk on every call; file bytes are never cached.
    pub async fn read(&self, rel: &str) -> Result<(Bytes, &'static str), ServeError> {
        let resolved = self.resolve(rel).await?;

        let metadata = fs::metadata(&resolved).await?;
        if metadata.is_dir() {
            return Err(ServeError::IsDirectory);
        }

        let data = fs::read(&resolved).await?;
        Ok((Bytes::from(data), mime_for_path(Path::new(rel))))
    }
}
