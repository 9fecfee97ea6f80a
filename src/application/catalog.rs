//! Read-only post catalog shared by every view.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    sync::Arc,
};

use tracing::info;
use url::Url;

use crate::application::{
    error::AppError,
    related::{self, RelatedBasis},
    repos::PostSource,
    search::PostQuery,
};
use crate::domain::{
    categories::{Category, derive_categories},
    comments::{ThreadComment, sample_thread},
    error::DomainError,
    posts::{Heading, Post, sort_latest},
    slug::is_url_safe,
};

/// Everything the detail view needs for one post.
#[derive(Debug, Clone)]
pub struct PostDetail<'a> {
    pub post: &'a Post,
    pub outline: Vec<Heading>,
    pub related: Vec<&'a Post>,
    pub related_basis: RelatedBasis,
    pub comments: &'a [ThreadComment],
}

/// What the landing page shows for the current search state.
///
/// The featured post is only offered while no filter is active. Featured
/// posts never appear in the grid; `total_matches` still counts them.
#[derive(Debug, Clone)]
pub struct Landing<'a> {
    pub featured: Option<&'a Post>,
    pub posts: Vec<&'a Post>,
    pub total_matches: usize,
    pub filtered: bool,
}

/// The validated post collection. Cloning shares the underlying records.
#[derive(Debug, Clone)]
pub struct PostCatalog {
    posts: Arc<[Post]>,
    comments: Arc<HashMap<String, Vec<ThreadComment>>>,
}

impl PostCatalog {
    /// Load the collection from `source` and validate it.
    pub async fn load(source: &dyn PostSource) -> Result<Self, AppError> {
        let posts = source.load_posts().await?;
        let catalog = Self::from_posts(posts)?;
        info!(
            target = "postdeck::catalog",
            posts = catalog.posts.len(),
            "post catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_posts(posts: Vec<Post>) -> Result<Self, DomainError> {
        validate(&posts)?;
        let comments = posts
            .iter()
            .map(|post| (post.id.clone(), sample_thread(&post.id)))
            .collect();

        Ok(Self {
            posts: posts.into(),
            comments: Arc::new(comments),
        })
    }

    /// Posts in collection order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts newest first.
    pub fn latest(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        sort_latest(&mut posts);
        posts
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// The first post flagged as featured, in collection order.
    pub fn featured(&self) -> Option<&Post> {
        self.posts.iter().find(|post| post.featured)
    }

    /// Existing discussion under `post`, top-level comments first.
    pub fn comments(&self, post: &Post) -> &[ThreadComment] {
        self.comments
            .get(&post.id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<Category> {
        derive_categories(&self.posts)
    }

    pub fn known_tags(&self) -> BTreeSet<&str> {
        self.posts
            .iter()
            .flat_map(|post| post.tags.iter().map(String::as_str))
            .collect()
    }

    pub fn search(&self, query: &PostQuery) -> Vec<&Post> {
        query.apply(&self.posts)
    }

    pub fn landing(&self, query: &PostQuery) -> Landing<'_> {
        let filtered = !query.is_unfiltered();
        let matches = self.search(query);
        let total_matches = matches.len();

        Landing {
            featured: if filtered { None } else { self.featured() },
            posts: matches.into_iter().filter(|post| !post.featured).collect(),
            total_matches,
            filtered,
        }
    }

    pub fn related(&self, current: &Post, limit: usize) -> Vec<&Post> {
        related::related(current, &self.posts, limit)
    }

    pub fn detail(&self, slug: &str, related_limit: usize) -> Result<PostDetail<'_>, DomainError> {
        let post = self
            .find_by_slug(slug)
            .ok_or_else(|| DomainError::not_found("post"))?;
        let ranked = related::rank(post, &self.posts, related_limit);

        Ok(PostDetail {
            post,
            outline: post.outline(),
            related: ranked.posts,
            related_basis: ranked.basis,
            comments: self.comments(post),
        })
    }
}

fn validate(posts: &[Post]) -> Result<(), DomainError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for post in posts {
        if post.id.trim().is_empty() {
            return Err(DomainError::validation("post id must not be empty"));
        }
        if !ids.insert(post.id.as_str()) {
            return Err(DomainError::duplicate("post id", post.id.as_str()));
        }
        if !is_url_safe(&post.slug) {
            return Err(DomainError::validation(format!(
                "post `{}` has a slug that is not URL-safe: `{}`",
                post.id, post.slug
            )));
        }
        if !slugs.insert(post.slug.as_str()) {
            return Err(DomainError::duplicate("post slug", post.slug.as_str()));
        }
        if post.reading_time == 0 {
            return Err(DomainError::invariant(format!(
                "post `{}` must have a positive reading time",
                post.id
            )));
        }
        if post.category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "post `{}` has an empty category",
                post.id
            )));
        }
        check_url(&post.id, "image", &post.image)?;
        check_url(&post.id, "author avatar", &post.author.avatar)?;
    }

    Ok(())
}

fn check_url(post_id: &str, field: &str, value: &str) -> Result<(), DomainError> {
    Url::parse(value).map(|_| ()).map_err(|err| {
        DomainError::validation(format!(
            "post `{post_id}` has an invalid {field} URL `{value}`: {err}"
        ))
    })
}
