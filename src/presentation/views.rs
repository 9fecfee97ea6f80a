use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};
use url::Url;

use crate::application::{
    catalog::{Landing, PostDetail},
    related::RelatedBasis,
    search::PostQuery,
};
use crate::domain::categories::Category;
use crate::domain::comments::ThreadComment;
use crate::domain::posts::{Heading, Post, format_human_date};
use crate::domain::slug::derive_slug;

const COMMENT_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute] [period]"
);

/// Summary shown in lists, search results and related-post rails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    pub reading_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.name.clone(),
            date: format_human_date(post.published_at),
            reading_time: reading_time_label(post.reading_time),
            category: post.category.clone(),
            tags: post.tags.clone(),
            featured: post.featured,
        }
    }
}

impl Display for PostCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let marker = if self.featured { "*" } else { " " };
        write!(
            f,
            "{marker} {title}\n    {category} · {author} · {date} · {reading}\n    /{slug}",
            title = self.title,
            category = self.category,
            author = self.author,
            date = self.date,
            reading = self.reading_time,
            slug = self.slug,
        )
    }
}

pub fn reading_time_label(minutes: u32) -> String {
    format!("{minutes} min read")
}

pub fn post_cards<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Vec<PostCard> {
    posts.into_iter().map(PostCard::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlineEntry {
    pub level: u8,
    pub text: String,
    pub href: String,
}

impl From<&Heading> for OutlineEntry {
    fn from(heading: &Heading) -> Self {
        Self {
            level: heading.level,
            text: heading.text.clone(),
            href: format!("#{}", heading.anchor),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetailView {
    pub card: PostCard,
    pub author: AuthorView,
    pub image: String,
    pub content: String,
    pub outline: Vec<OutlineEntry>,
    pub share: Option<ShareLinks>,
    pub related_heading: &'static str,
    pub related: Vec<PostCard>,
    pub comments: CommentsView,
}

impl PostDetailView {
    /// Attach share links pointing at the post under `base_url`.
    pub fn with_share_links(mut self, base_url: &Url) -> Self {
        self.share = ShareLinks::for_post(base_url, &self.card);
        self
    }
}

impl From<&PostDetail<'_>> for PostDetailView {
    fn from(detail: &PostDetail<'_>) -> Self {
        let post = detail.post;
        Self {
            card: PostCard::from(post),
            author: AuthorView {
                name: post.author.name.clone(),
                avatar: post.author.avatar.clone(),
                bio: post.author.bio.clone(),
            },
            image: post.image.clone(),
            content: post.content.clone(),
            outline: detail.outline.iter().map(OutlineEntry::from).collect(),
            share: None,
            related_heading: related_heading(detail.related_basis),
            related: post_cards(detail.related.iter().copied()),
            comments: CommentsView::new(detail.comments),
        }
    }
}

/// The discussion under a post. The heading counts top-level comments only.
#[derive(Debug, Clone, Serialize)]
pub struct CommentsView {
    pub heading: String,
    pub threads: Vec<CommentView>,
}

impl CommentsView {
    pub fn new(comments: &[ThreadComment]) -> Self {
        Self {
            heading: format!("Comments ({})", comments.len()),
            threads: comments.iter().map(|comment| CommentView::new(comment, false)).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub id: String,
    pub author: String,
    pub avatar: Option<String>,
    pub initials: String,
    pub posted: String,
    pub content: String,
    pub likes: u32,
    pub can_reply: bool,
    pub replies: Vec<CommentView>,
}

impl CommentView {
    fn new(comment: &ThreadComment, is_reply: bool) -> Self {
        Self {
            id: comment.id.clone(),
            author: comment.author.name.clone(),
            avatar: comment.author.avatar.clone(),
            initials: initials(&comment.author.name),
            posted: format_comment_time(comment.created_at),
            content: comment.content.clone(),
            likes: comment.likes,
            can_reply: !is_reply,
            replies: comment
                .replies
                .iter()
                .map(|reply| CommentView::new(reply, true))
                .collect(),
        }
    }

    fn write_indented(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth + 1);
        let badge = match &self.avatar {
            Some(_) => String::new(),
            None => format!(" [{}]", self.initials),
        };
        writeln!(f, "{indent}{}{badge} · {} · {} likes", self.author, self.posted, self.likes)?;
        writeln!(f, "{indent}  {}", self.content)?;
        for reply in &self.replies {
            reply.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

fn format_comment_time(at: OffsetDateTime) -> String {
    at.format(COMMENT_TIME_FORMAT)
        .unwrap_or_else(|_| at.to_string())
}

impl Display for CommentsView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for comment in &self.threads {
            comment.write_indented(f, 0)?;
        }
        Ok(())
    }
}

pub fn related_heading(basis: RelatedBasis) -> &'static str {
    match basis {
        RelatedBasis::Relevance => "Related posts",
        RelatedBasis::Recency => "Latest posts",
    }
}

impl Display for PostDetailView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.card)?;
        writeln!(f, "    by {} ({})", self.author.name, self.author.bio)?;

        if !self.outline.is_empty() {
            writeln!(f, "\nContents")?;
            for entry in &self.outline {
                let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
                writeln!(f, "  {indent}- {} ({})", entry.text, entry.href)?;
            }
        }

        if let Some(share) = &self.share {
            writeln!(f, "\nShare")?;
            writeln!(f, "  Twitter:  {}", share.twitter)?;
            writeln!(f, "  Facebook: {}", share.facebook)?;
            writeln!(f, "  LinkedIn: {}", share.linkedin)?;
        }

        writeln!(f, "\n{}", self.related_heading)?;
        if self.related.is_empty() {
            write!(f, "  (none)")?;
        }
        for (index, card) in self.related.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }

        write!(f, "\n\n{}", self.comments)
    }
}

/// Outbound share targets for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub page: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

impl ShareLinks {
    /// Build share links for `card`, or `None` when its slug cannot be joined
    /// onto `base_url`.
    pub fn for_post(base_url: &Url, card: &PostCard) -> Option<Self> {
        let page = base_url.join(&card.slug).ok()?;
        let page_str = page.as_str();

        let twitter = share_url(
            "https://twitter.com/intent/tweet",
            &[("text", card.title.as_str()), ("url", page_str)],
        )?;
        let facebook = share_url(
            "https://www.facebook.com/sharer/sharer.php",
            &[("u", page_str)],
        )?;
        let linkedin = share_url(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[
                ("url", page_str),
                ("title", card.title.as_str()),
                ("summary", card.excerpt.as_str()),
            ],
        )?;

        Some(Self {
            page: page.into(),
            twitter,
            facebook,
            linkedin,
        })
    }
}

fn share_url(endpoint: &str, params: &[(&str, &str)]) -> Option<String> {
    Url::parse_with_params(endpoint, params)
        .ok()
        .map(String::from)
}

/// Capitalized first letters of each word in `name`, used for avatar fallbacks.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// One-line description of the active search state.
pub fn filter_summary(query: &PostQuery, categories: &[Category]) -> Option<String> {
    let text = query.text.trim();
    let mut parts = Vec::new();

    if !text.is_empty() {
        parts.push(format!("Searching for \"{text}\""));
    }
    if let Some(selected) = query.category.as_deref() {
        let slug = derive_slug(selected).ok();
        let name = categories
            .iter()
            .find(|category| {
                Some(category.slug.as_str()) == slug.as_deref()
                    || category.name.to_lowercase() == selected
            })
            .map_or(selected, |category| category.name.as_str());
        parts.push(format!("Category: {name}"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

pub fn post_count_label(count: usize) -> String {
    let noun = if count == 1 { "post" } else { "posts" };
    format!("{count} {noun}")
}

/// Landing page: optional featured card above the post grid.
#[derive(Debug, Clone, Serialize)]
pub struct LandingView {
    pub featured: Option<PostCard>,
    pub heading: &'static str,
    pub summary: Option<String>,
    pub count_label: String,
    pub posts: Vec<PostCard>,
}

impl LandingView {
    pub fn new(landing: &Landing<'_>, query: &PostQuery, categories: &[Category]) -> Self {
        Self {
            featured: landing.featured.map(PostCard::from),
            heading: if landing.filtered {
                "Search Results"
            } else {
                "Latest Posts"
            },
            summary: filter_summary(query, categories),
            count_label: post_count_label(landing.total_matches),
            posts: post_cards(landing.posts.iter().copied()),
        }
    }
}

impl Display for LandingView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(featured) = &self.featured {
            writeln!(f, "Featured\n{featured}\n")?;
        }

        writeln!(f, "{} ({})", self.heading, self.count_label)?;
        if let Some(summary) = &self.summary {
            writeln!(f, "{summary}")?;
        }

        if self.posts.is_empty() {
            return write!(f, "No posts found.");
        }
        for (index, card) in self.posts.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            count: category.count,
        }
    }
}

impl Display for CategoryView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "post" } else { "posts" };
        write!(f, "{} ({} {noun})", self.name, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::PostCatalog;
    use crate::domain::{categories::derive_categories, posts::sample_posts};

    #[test]
    fn card_formats_date_and_reading_time() {
        let posts = sample_posts();
        let card = PostCard::from(&posts[0]);

        assert_eq!(card.date, "January 15, 2024");
        assert_eq!(card.reading_time, "8 min read");
        assert_eq!(card.author, "Sarah Chen");
        assert!(card.featured);
        assert!(card.to_string().starts_with("* The Future of Web Development"));
    }

    #[test]
    fn detail_view_links_outline_anchors() {
        let catalog = PostCatalog::from_posts(sample_posts()).expect("catalog");
        let detail = catalog.detail("css-grid-vs-flexbox", 3).expect("detail");
        let view = PostDetailView::from(&detail);

        assert_eq!(view.outline[0].href, "#css-grid-vs-flexbox-when-to-use-each");
        assert_eq!(view.related_heading, "Related posts");
        assert_eq!(view.related.len(), 1);
        assert_eq!(view.related[0].slug, "mobile-first-design-importance");
        assert!(view.share.is_none());

        let rendered = view.to_string();
        assert!(rendered.contains("Contents"));
        assert!(rendered.contains("- Understanding Flexbox (#understanding-flexbox)"));
        assert!(!rendered.contains("Share"));
    }

    #[test]
    fn share_links_encode_title_and_page() {
        let posts = sample_posts();
        let card = PostCard::from(&posts[2]);
        let base = Url::parse("https://blog.example.com/posts/").expect("url");
        let links = ShareLinks::for_post(&base, &card).expect("links");

        assert_eq!(links.page, "https://blog.example.com/posts/css-grid-vs-flexbox");
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fblog.example.com%2Fposts%2Fcss-grid-vs-flexbox"
        );
        assert!(links.twitter.starts_with(
            "https://twitter.com/intent/tweet?text=CSS+Grid+vs+Flexbox%3A+When+to+Use+Each&url="
        ));

        let linkedin = Url::parse(&links.linkedin).expect("linkedin url");
        let params: Vec<(String, String)> = linkedin
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        assert_eq!(params[0], ("url".to_string(), links.page.clone()));
        assert_eq!(params[1].1, card.title);
        assert_eq!(params[2].1, card.excerpt);
    }

    #[test]
    fn detail_view_renders_share_section() {
        let catalog = PostCatalog::from_posts(sample_posts()).expect("catalog");
        let detail = catalog.detail("art-of-api-design", 3).expect("detail");
        let base = Url::parse("http://localhost:3000/").expect("url");
        let view = PostDetailView::from(&detail).with_share_links(&base);

        let rendered = view.to_string();
        assert!(rendered.contains("Share"));
        assert!(rendered.contains("u=http%3A%2F%2Flocalhost%3A3000%2Fart-of-api-design"));
    }

    #[test]
    fn detail_view_lists_comment_thread() {
        let catalog = PostCatalog::from_posts(sample_posts()).expect("catalog");
        let detail = catalog.detail("mobile-first-design-importance", 3).expect("detail");
        let view = PostDetailView::from(&detail);

        assert_eq!(view.comments.heading, "Comments (2)");
        let first = &view.comments.threads[0];
        assert_eq!(first.author, "Sarah Johnson");
        assert_eq!(first.posted, "January 15, 2024 at 10:30 AM");
        assert_eq!(first.likes, 12);
        assert!(first.can_reply);
        assert_eq!(first.replies.len(), 1);
        assert_eq!(first.replies[0].author, "Mike Chen");
        assert!(!first.replies[0].can_reply);
        assert!(first.replies[0].replies.is_empty());

        let last = &view.comments.threads[1];
        assert!(last.avatar.is_none());
        assert_eq!(last.initials, "AR");
        assert_eq!(last.posted, "January 14, 2024 at 4:45 PM");

        let rendered = view.to_string();
        assert!(rendered.contains("Comments (2)"));
        assert!(rendered.contains("        Mike Chen · January 15, 2024 at 11:15 AM · 3 likes"));
        assert!(rendered.contains("Alex Rivera [AR]"));
    }

    #[test]
    fn comments_heading_counts_top_level_threads() {
        assert_eq!(CommentsView::new(&[]).heading, "Comments (0)");

        let json = serde_json::to_value(CommentsView::new(&crate::domain::comments::sample_thread("9")))
            .expect("json");
        assert_eq!(json["threads"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["threads"][0]["replies"][0]["id"], "9-c2");
        assert!(json["threads"][0].get("email").is_none());
    }

    #[test]
    fn filter_summary_resolves_multi_word_category_names() {
        let mut posts = sample_posts();
        posts[0].category = "Remote Work".to_string();
        let categories = derive_categories(&posts);

        let query = PostQuery::new("").in_category("Remote Work");
        assert_eq!(query.category.as_deref(), Some("remote work"));
        assert_eq!(
            filter_summary(&query, &categories).as_deref(),
            Some("Category: Remote Work")
        );
    }

    #[test]
    fn initials_use_first_letter_of_each_word() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("  ada   lovelace "), "AL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn filter_summary_names_query_and_category() {
        let categories = derive_categories(&sample_posts());

        assert!(filter_summary(&PostQuery::default(), &categories).is_none());
        assert_eq!(
            filter_summary(&PostQuery::new(" grid "), &categories).as_deref(),
            Some("Searching for \"grid\"")
        );
        assert_eq!(
            filter_summary(&PostQuery::new("grid").in_category("design"), &categories).as_deref(),
            Some("Searching for \"grid\" • Category: Design")
        );
        assert_eq!(
            filter_summary(&PostQuery::new("").in_category("poetry"), &categories).as_deref(),
            Some("Category: poetry")
        );
    }

    #[test]
    fn landing_view_labels_latest_and_search_states() {
        let catalog = PostCatalog::from_posts(sample_posts()).expect("catalog");
        let categories = catalog.categories();

        let home = PostQuery::default();
        let view = LandingView::new(&catalog.landing(&home), &home, &categories);
        assert_eq!(view.heading, "Latest Posts");
        assert_eq!(view.count_label, "6 posts");
        assert_eq!(
            view.featured.as_ref().map(|card| card.slug.as_str()),
            Some("future-of-web-development-2024")
        );
        assert_eq!(view.posts.len(), 4);

        let search = PostQuery::new("react");
        let view = LandingView::new(&catalog.landing(&search), &search, &categories);
        assert_eq!(view.heading, "Search Results");
        assert_eq!(view.count_label, "1 post");
        assert!(view.featured.is_none());
        assert!(view.posts.is_empty());
        assert!(view.to_string().ends_with("No posts found."));
    }

    #[test]
    fn recency_fallback_is_labelled() {
        assert_eq!(related_heading(RelatedBasis::Recency), "Latest posts");
    }

    #[test]
    fn category_view_pluralizes() {
        let categories = derive_categories(&sample_posts());
        let labels: Vec<String> = categories
            .iter()
            .map(|category| CategoryView::from(category).to_string())
            .collect();

        assert_eq!(labels[0], "Technology (1 post)");
        assert_eq!(labels[1], "Development (2 posts)");
    }

    #[test]
    fn cards_serialize_as_json() {
        let posts = sample_posts();
        let json = serde_json::to_value(post_cards(&posts[2..3])).expect("json");

        assert_eq!(json[0]["slug"], "css-grid-vs-flexbox");
        assert_eq!(json[0]["reading_time"], "6 min read");
        assert_eq!(json[0]["date"], "January 10, 2024");
    }
}
