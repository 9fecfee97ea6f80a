//! Source traits describing where the post collection comes from.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::posts::{Post, sample_posts};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("failed to read dataset `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies the read-only post collection once at startup.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn load_posts(&self) -> Result<Vec<Post>, RepoError>;
}

/// In-memory source backed by a fixed collection.
#[derive(Debug, Clone)]
pub struct StaticPostSource {
    posts: Vec<Post>,
}

impl StaticPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// The built-in sample dataset.
    pub fn sample() -> Self {
        Self::new(sample_posts())
    }
}

impl Default for StaticPostSource {
    fn default() -> Self {
        Self::sample()
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn load_posts(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.clone())
    }
}
