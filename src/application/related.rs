//! Related-post suggestions for the detail view.

use metrics::counter;
use serde::Serialize;

use crate::domain::posts::{Post, sort_latest};

pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Points awarded when the candidate shares the current post's category.
pub const CATEGORY_WEIGHT: u32 = 2;
/// Points awarded per candidate tag also carried by the current post.
pub const SHARED_TAG_WEIGHT: u32 = 1;
/// Points awarded when both posts have the same author name.
pub const AUTHOR_WEIGHT: u32 = 1;

/// How a suggestion list was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelatedBasis {
    Relevance,
    Recency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedPosts<'a> {
    pub basis: RelatedBasis,
    pub posts: Vec<&'a Post>,
}

/// Relevance of `candidate` to `current`. All comparisons are exact.
pub fn relevance_score(current: &Post, candidate: &Post) -> u32 {
    let mut score = 0;

    if candidate.category == current.category {
        score += CATEGORY_WEIGHT;
    }

    let shared_tags = candidate
        .tags
        .iter()
        .filter(|tag| current.tags.contains(tag))
        .count() as u32;
    score += shared_tags * SHARED_TAG_WEIGHT;

    if candidate.author.name == current.author.name {
        score += AUTHOR_WEIGHT;
    }

    score
}

/// Rank the other posts against `current`, reporting which basis was used.
///
/// Candidates with a positive score are returned highest first, ties in
/// collection order. When nothing scores, the newest candidates are returned
/// instead. `current` is excluded by id and never returned.
pub fn rank<'a>(current: &Post, posts: &'a [Post], limit: usize) -> RelatedPosts<'a> {
    let candidates: Vec<&'a Post> = posts.iter().filter(|post| post.id != current.id).collect();

    let mut scored: Vec<(u32, &'a Post)> = candidates
        .iter()
        .map(|post| (relevance_score(current, post), *post))
        .filter(|(score, _)| *score > 0)
        .collect();

    if !scored.is_empty() {
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        return RelatedPosts {
            basis: RelatedBasis::Relevance,
            posts: scored
                .into_iter()
                .take(limit)
                .map(|(_, post)| post)
                .collect(),
        };
    }

    counter!("postdeck_related_fallback_total").increment(1);
    tracing::debug!(
        target = "postdeck::related",
        post = %current.slug,
        candidates = candidates.len(),
        "no relevance signal, falling back to recency"
    );

    let mut recent = candidates;
    sort_latest(&mut recent);
    recent.truncate(limit);

    RelatedPosts {
        basis: RelatedBasis::Recency,
        posts: recent,
    }
}

/// The most relevant other posts for `current`, at most `limit` of them.
pub fn related<'a>(current: &Post, posts: &'a [Post], limit: usize) -> Vec<&'a Post> {
    rank(current, posts, limit).posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::posts::{Author, sample_posts};
    use time::{Date, macros::date};

    fn post(id: &str, category: &str, tags: &[&str], author: &str, published_at: Date) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            excerpt: String::new(),
            content: String::new(),
            author: Author {
                name: author.to_string(),
                avatar: "https://example.com/avatar.png".to_string(),
                bio: String::new(),
            },
            published_at,
            reading_time: 5,
            category: category.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            featured: false,
            image: "https://example.com/image.png".to_string(),
            slug: format!("post-{id}"),
        }
    }

    fn ids<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
        posts.iter().map(|post| post.id.as_str()).collect()
    }

    fn current() -> Post {
        post(
            "current",
            "Design",
            &["CSS", "Layout"],
            "Emma Thompson",
            date!(2024 - 03 - 12),
        )
    }

    #[test]
    fn scores_follow_the_weight_table() {
        let current = current();
        let a = post("a", "Design", &["UX"], "X", date!(2024 - 01 - 01));
        let b = post("b", "Tech", &["CSS"], "X", date!(2024 - 01 - 02));
        let c = post(
            "c",
            "Design",
            &["CSS", "Layout"],
            "Emma Thompson",
            date!(2024 - 01 - 03),
        );

        assert_eq!(relevance_score(&current, &a), 2);
        assert_eq!(relevance_score(&current, &b), 1);
        assert_eq!(relevance_score(&current, &c), 5);

        let posts = vec![current.clone(), a, b, c];
        let result = rank(&current, &posts, DEFAULT_RELATED_LIMIT);

        assert_eq!(result.basis, RelatedBasis::Relevance);
        assert_eq!(ids(&result.posts), ["c", "a", "b"]);
    }

    #[test]
    fn comparisons_are_exact() {
        let current = current();
        let candidate = post("x", "design", &["css"], "emma thompson", date!(2024 - 01 - 01));

        assert_eq!(relevance_score(&current, &candidate), 0);
    }

    #[test]
    fn duplicate_candidate_tags_count_each_time() {
        let current = current();
        let candidate = post("x", "Tech", &["CSS", "CSS", "Other"], "X", date!(2024 - 01 - 01));

        assert_eq!(relevance_score(&current, &candidate), 2);
    }

    #[test]
    fn ties_keep_collection_order() {
        let current = current();
        let posts = vec![
            post("first", "Tech", &["CSS"], "X", date!(2023 - 01 - 01)),
            current.clone(),
            post("second", "Tech", &["Layout"], "Y", date!(2024 - 06 - 01)),
            post("third", "Other", &[], "Emma Thompson", date!(2024 - 07 - 01)),
        ];

        assert_eq!(ids(&related(&current, &posts, 10)), ["first", "second", "third"]);
    }

    #[test]
    fn only_signalling_candidates_are_returned() {
        let current = current();
        let posts = vec![
            post("none", "Tech", &["Rust"], "X", date!(2025 - 01 - 01)),
            post("one", "Tech", &["CSS"], "X", date!(2020 - 01 - 01)),
        ];

        let result = rank(&current, &posts, 3);
        assert_eq!(result.basis, RelatedBasis::Relevance);
        assert_eq!(ids(&result.posts), ["one"]);
    }

    #[test]
    fn truncates_to_limit() {
        let current = current();
        let posts: Vec<Post> = (0..6)
            .map(|n| post(&n.to_string(), "Design", &[], "X", date!(2024 - 01 - 01)))
            .collect();

        assert_eq!(related(&current, &posts, 3).len(), 3);
        assert_eq!(related(&current, &posts, 1).len(), 1);
        assert!(related(&current, &posts, 0).is_empty());
    }

    #[test]
    fn falls_back_to_recency_without_signals() {
        let current = current();
        let posts = vec![
            post("old", "Tech", &[], "X", date!(2023 - 01 - 01)),
            current.clone(),
            post("newest", "Tech", &[], "Y", date!(2024 - 05 - 01)),
            post("tie-a", "Tech", &[], "Z", date!(2024 - 02 - 01)),
            post("tie-b", "Tech", &[], "Z", date!(2024 - 02 - 01)),
        ];

        let result = rank(&current, &posts, 3);
        assert_eq!(result.basis, RelatedBasis::Recency);
        assert_eq!(ids(&result.posts), ["newest", "tie-a", "tie-b"]);
    }

    #[test]
    fn current_post_is_never_suggested() {
        let posts = sample_posts();
        for current in &posts {
            let result = related(current, &posts, DEFAULT_RELATED_LIMIT);
            assert!(result.len() <= DEFAULT_RELATED_LIMIT);
            assert!(result.iter().all(|post| post.id != current.id));
        }
    }

    #[test]
    fn lone_post_has_no_suggestions() {
        let posts = vec![current()];
        let result = rank(&posts[0], &posts, 3);

        assert!(result.posts.is_empty());
        assert_eq!(result.basis, RelatedBasis::Recency);
        assert!(related(&current(), &[], 3).is_empty());
    }

    #[test]
    fn sample_react_post_ranks_shared_category_and_tags() {
        let posts = sample_posts();
        let react = &posts[1];

        assert_eq!(relevance_score(react, &posts[5]), 4);
        assert_eq!(ids(&related(react, &posts, DEFAULT_RELATED_LIMIT)), ["6"]);
    }

    #[test]
    fn sample_grid_post_matches_its_category() {
        let posts = sample_posts();
        let grid = &posts[2];

        assert_eq!(relevance_score(grid, &posts[3]), 0);
        assert_eq!(ids(&related(grid, &posts, DEFAULT_RELATED_LIMIT)), ["5"]);
    }
}
