//! JSON dataset adapter for [`PostSource`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::application::repos::{PostSource, RepoError};
use crate::domain::posts::Post;

/// Reads a JSON array of posts from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostSource for JsonFileSource {
    async fn load_posts(&self) -> Result<Vec<Post>, RepoError> {
        let path = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| RepoError::Io {
                path: path.clone(),
                source,
            })?;

        let posts: Vec<Post> =
            serde_json::from_slice(&bytes).map_err(|source| RepoError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(
            target = "postdeck::dataset",
            path = %path,
            posts = posts.len(),
            "dataset read"
        );
        Ok(posts)
    }
}
