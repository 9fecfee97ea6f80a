//! Comment and newsletter submissions.
//!
//! Nothing is persisted. A submission is validated and logged, then completes
//! after its configured delay.

use std::time::Duration;

use metrics::counter;
use serde::Serialize;
use thiserror::Error;
use time::{Date, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use crate::domain::posts::Post;

pub const MAX_COMMENT_CHARS: usize = 2000;

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngagementError {
    #[error("comment author name must not be empty")]
    MissingAuthor,
    #[error("comment body must not be empty")]
    EmptyComment,
    #[error("comment body exceeds {max} characters")]
    CommentTooLong { max: usize },
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
    pub author_name: String,
    pub author_email: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: String,
    pub author_name: String,
    #[serde(skip_serializing)]
    pub author_email: String,
    pub body: String,
    #[serde(with = "calendar_date")]
    pub submitted_on: Date,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub email: String,
    #[serde(with = "calendar_date")]
    pub subscribed_on: Date,
}

#[derive(Debug, Clone)]
pub struct EngagementService {
    comment_delay: Duration,
    newsletter_delay: Duration,
}

impl EngagementService {
    pub fn new(comment_delay: Duration, newsletter_delay: Duration) -> Self {
        Self {
            comment_delay,
            newsletter_delay,
        }
    }

    pub fn comment_delay(&self) -> Duration {
        self.comment_delay
    }

    pub fn newsletter_delay(&self) -> Duration {
        self.newsletter_delay
    }

    /// Validate `draft` and accept it as a comment on `post`.
    ///
    /// Validation failures return immediately; accepted comments resolve once
    /// the comment delay has elapsed.
    pub async fn submit_comment(
        &self,
        post: &Post,
        draft: CommentDraft,
    ) -> Result<Comment, EngagementError> {
        let author_name = draft.author_name.trim();
        if author_name.is_empty() {
            return Err(EngagementError::MissingAuthor);
        }
        let author_email = normalize_email(&draft.author_email)?;

        let body = draft.body.trim();
        if body.is_empty() {
            return Err(EngagementError::EmptyComment);
        }
        if body.chars().count() > MAX_COMMENT_CHARS {
            return Err(EngagementError::CommentTooLong {
                max: MAX_COMMENT_CHARS,
            });
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: post.id.clone(),
            author_name: author_name.to_string(),
            author_email,
            body: body.to_string(),
            submitted_on: OffsetDateTime::now_utc().date(),
            likes: 0,
        };

        info!(
            target = "postdeck::engagement",
            post = %post.slug,
            comment_id = %comment.id,
            author = %comment.author_name,
            "comment submitted"
        );
        tokio::time::sleep(self.comment_delay).await;
        counter!("postdeck_comment_submitted_total").increment(1);

        Ok(comment)
    }

    pub async fn subscribe(&self, email: &str) -> Result<Subscription, EngagementError> {
        let email = normalize_email(email)?;

        info!(
            target = "postdeck::engagement",
            email = %email,
            "newsletter subscription requested"
        );
        tokio::time::sleep(self.newsletter_delay).await;
        counter!("postdeck_newsletter_subscribed_total").increment(1);

        Ok(Subscription {
            email,
            subscribed_on: OffsetDateTime::now_utc().date(),
        })
    }
}

fn normalize_email(raw: &str) -> Result<String, EngagementError> {
    let email = raw.trim().to_lowercase();
    let invalid = || EngagementError::InvalidEmail(raw.trim().to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(invalid());
    }

    let labels_ok = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    if !labels_ok {
        return Err(invalid());
    }

    Ok(email)
}
