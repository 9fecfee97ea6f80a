//! Reader comments already attached to a post.

use time::{OffsetDateTime, macros::datetime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    pub name: String,
    pub avatar: Option<String>,
    pub email: String,
}

/// A comment and its replies. Replies are one level deep in practice but the
/// type does not limit nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadComment {
    pub id: String,
    pub author: CommentAuthor,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub likes: u32,
    pub replies: Vec<ThreadComment>,
}

impl ThreadComment {
    /// This comment plus every reply below it.
    pub fn total_count(&self) -> usize {
        1 + self
            .replies
            .iter()
            .map(ThreadComment::total_count)
            .sum::<usize>()
    }
}

/// Seeded discussion shown under `post_id`. Comment ids are prefixed with
/// the post id so threads from different posts never share ids.
pub fn sample_thread(post_id: &str) -> Vec<ThreadComment> {
    let author = |name: &str, avatar: Option<&str>, email: &str| CommentAuthor {
        name: name.to_string(),
        avatar: avatar.map(str::to_string),
        email: email.to_string(),
    };

    vec![
        ThreadComment {
            id: format!("{post_id}-c1"),
            author: author(
                "Sarah Johnson",
                Some("https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150"),
                "sarah@example.com",
            ),
            content: "Great article! This really helped me understand the concepts better. Looking forward to more content like this."
                .to_string(),
            created_at: datetime!(2024-01-15 10:30 UTC),
            likes: 12,
            replies: vec![ThreadComment {
                id: format!("{post_id}-c2"),
                author: author(
                    "Mike Chen",
                    Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150"),
                    "mike@example.com",
                ),
                content: "I agree! The examples were particularly helpful.".to_string(),
                created_at: datetime!(2024-01-15 11:15 UTC),
                likes: 3,
                replies: Vec::new(),
            }],
        },
        ThreadComment {
            id: format!("{post_id}-c3"),
            author: author("Alex Rivera", None, "alex@example.com"),
            content: "Thanks for sharing this. I've been struggling with this topic and your explanation made it click for me."
                .to_string(),
            created_at: datetime!(2024-01-14 16:45 UTC),
            likes: 8,
            replies: Vec::new(),
        },
    ]
}
