//! Free-text and category filtering over the post collection.

use metrics::counter;

use crate::domain::posts::Post;

/// Return the posts matching both the text query and the category selector,
/// in collection order.
///
/// The query is trimmed and lower-cased, then matched as a substring of the
/// title, the excerpt, or any tag. An empty query matches every post. The
/// category selector is compared against the lower-cased post category and is
/// expected to be lower-case already.
pub fn filter<'a>(posts: &'a [Post], query: &str, category: Option<&str>) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();

    posts
        .iter()
        .filter(|post| matches_text(post, &needle) && matches_category(post, category))
        .collect()
}

fn matches_text(post: &Post, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
        || post
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn matches_category(post: &Post, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(selected) => post.category.to_lowercase() == selected,
    }
}

/// Search state held by a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub text: String,
    pub category: Option<String>,
}

impl PostQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    /// Select a category; the label is lower-cased to match [`filter`].
    pub fn in_category(mut self, category: impl AsRef<str>) -> Self {
        self.category = Some(category.as_ref().trim().to_lowercase());
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.text.trim().is_empty() && self.category.is_none()
    }

    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        counter!("postdeck_search_total").increment(1);
        let matches = filter(posts, &self.text, self.category.as_deref());
        tracing::debug!(
            target = "postdeck::search",
            query = %self.text,
            category = self.category.as_deref().unwrap_or("*"),
            matches = matches.len(),
            "filtered posts"
        );
        matches
    }
}
