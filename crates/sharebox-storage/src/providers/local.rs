//! Local filesystem provisioner.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use sharebox_core::error::{AppError, ErrorKind};
use sharebox_core::result::AppResult;
use sharebox_core::traits::Provisioner;

/// Creates and removes user folders below a root directory.
#[derive(Debug, Clone)]
pub struct LocalProvisioner {
    /// Root directory for all user folders.
    root: PathBuf,
}

impl LocalProvisioner {
    /// Create a new provisioner rooted at the given path, creating the root if needed.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path inside the root, refusing anything that escapes it.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let clean = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in clean.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => {
                    return Err(AppError::validation(format!(
                        "Path escapes the storage root: {path}"
                    )));
                }
            }
        }
        if resolved == self.root {
            return Err(AppError::validation("Refusing to operate on the storage root"));
        }
        Ok(resolved)
    }
}

#[async_trait]
impl Provisioner for LocalProvisioner {
    async fn mkdir_all(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        fs::create_dir_all(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create directory: {path}"),
                e,
            )
        })?;
        debug!(path, "Created directory");
        Ok(())
    }

    async fn remove(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        let meta = match fs::metadata(&full_path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to stat path: {path}"),
                    e,
                ));
            }
        };

        let result = if meta.is_dir() {
            fs::remove_dir_all(&full_path).await
        } else {
            fs::remove_file(&full_path).await
        };
        match result {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to remove path: {path}"),
                    e,
                ));
            }
        }

        debug!(path, "Removed path");
        Ok(())
    }
}
