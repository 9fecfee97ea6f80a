//! Categories derived from the live post collection.

use serde::Serialize;

use crate::domain::{posts::Post, slug::derive_slug};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub count: usize,
}

/// Recompute categories and their post counts from `posts`.
///
/// Labels that slugify identically share one entry; the first spelling seen
/// wins and entries appear in first-seen order.
pub fn derive_categories(posts: &[Post]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for post in posts {
        let slug = category_slug(&post.category);
        match categories.iter_mut().find(|entry| entry.slug == slug) {
            Some(entry) => entry.count += 1,
            None => categories.push(Category {
                id: slug.clone(),
                name: post.category.clone(),
                slug,
                count: 1,
            }),
        }
    }

    categories
}

fn category_slug(name: &str) -> String {
    derive_slug(name).unwrap_or_else(|_| name.trim().to_lowercase())
}
