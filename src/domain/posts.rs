mod data;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::FormatItem, macros::format_description};

use crate::domain::slug::AnchorSlugger;

pub use data::sample_posts;

pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: Author,
    #[serde(with = "iso_date")]
    pub published_at: Date,
    pub reading_time: u32,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub image: String,
    pub slug: String,
}

/// Deepest heading level that appears in a post outline.
pub const MAX_OUTLINE_LEVEL: usize = 3;

/// A heading found in a post body, with a document-unique anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

impl Post {
    /// Collect `#`, `##` and `###` headings from the body in document order.
    ///
    /// Headings whose text cannot produce an anchor are skipped.
    pub fn outline(&self) -> Vec<Heading> {
        let mut slugger = AnchorSlugger::new();

        self.content
            .lines()
            .filter_map(parse_heading)
            .filter_map(|(level, text)| {
                let anchor = slugger.anchor_for(text).ok()?;
                Some(Heading {
                    level,
                    text: text.to_string(),
                    anchor,
                })
            })
            .collect()
    }
}

fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|byte| *byte == b'#').count();
    if hashes == 0 || hashes > MAX_OUTLINE_LEVEL {
        return None;
    }

    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim().trim_end_matches('#').trim_end();
    if text.is_empty() {
        return None;
    }

    Some((hashes as u8, text))
}

/// Order posts newest first; equal dates keep their collection order.
pub fn sort_latest(posts: &mut [&Post]) {
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

pub fn format_human_date(date: Date) -> String {
    date.format(HUMAN_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn post_with_content(content: &str) -> Post {
        let mut post = sample_posts().remove(0);
        post.content = content.to_string();
        post
    }

    #[test]
    fn outline_collects_headings_with_unique_anchors() {
        let post = post_with_content(
            "# Introduction\nBody text.\n## Setup\n### Setup\nnot # a heading\n#NoSpace\n## Closing ##",
        );

        let outline = post.outline();
        let anchors: Vec<&str> = outline.iter().map(|h| h.anchor.as_str()).collect();
        let levels: Vec<u8> = outline.iter().map(|h| h.level).collect();

        assert_eq!(anchors, ["introduction", "setup", "setup-2", "closing"]);
        assert_eq!(levels, [1, 2, 3, 2]);
        assert_eq!(outline[3].text, "Closing");
    }

    #[test]
    fn outline_skips_headings_without_text() {
        let post = post_with_content("#\n# \n#### Too deep\n# !!!\n# Real");
        let outline = post.outline();

        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].anchor, "real");
    }

    #[test]
    fn heading_markers_start_the_line_and_accept_tabs() {
        let post = post_with_content("#\tTabbed\n  ## Indented\n##\t Mixed");
        let outline = post.outline();
        let texts: Vec<&str> = outline.iter().map(|h| h.text.as_str()).collect();

        assert_eq!(texts, ["Tabbed", "Mixed"]);
    }

    #[test]
    fn generated_suffix_never_collides_with_a_literal_heading() {
        let post = post_with_content("# Setup\n## Setup\n## Setup 2");
        let anchors: Vec<String> = post.outline().into_iter().map(|h| h.anchor).collect();

        assert_eq!(anchors, ["setup", "setup-2", "setup-2-2"]);
    }

    #[test]
    fn sample_outline_disambiguates_repeated_headings() {
        let posts = sample_posts();
        let outline = posts[2].outline();
        let anchors: Vec<&str> = outline.iter().map(|h| h.anchor.as_str()).collect();

        assert_eq!(
            anchors,
            [
                "css-grid-vs-flexbox-when-to-use-each",
                "understanding-flexbox",
                "best-use-cases",
                "understanding-css-grid",
                "best-use-cases-2",
                "making-the-right-choice",
                "conclusion",
            ]
        );
    }

    #[test]
    fn sort_latest_is_stable_for_equal_dates() {
        let mut posts = sample_posts();
        posts[1].published_at = posts[0].published_at;
        let mut refs: Vec<&Post> = posts.iter().collect();
        sort_latest(&mut refs);

        assert_eq!(refs[0].id, posts[0].id);
        assert_eq!(refs[1].id, posts[1].id);
        assert!(
            refs.windows(2)
                .all(|pair| pair[0].published_at >= pair[1].published_at)
        );
    }

    #[test]
    fn human_date_omits_day_padding() {
        assert_eq!(format_human_date(date!(2024 - 01 - 05)), "January 5, 2024");
    }

    #[test]
    fn post_deserializes_from_camel_case_json() {
        let json = r##"{
            "id": "7",
            "title": "Hello",
            "excerpt": "World",
            "content": "# Hello",
            "author": {"name": "Ada", "avatar": "https://example.com/a.png", "bio": "Writer"},
            "publishedAt": "2024-02-29",
            "readingTime": 3,
            "category": "Notes",
            "tags": ["intro"],
            "featured": false,
            "image": "https://example.com/i.png",
            "slug": "hello"
        }"##;

        let post: Post = serde_json::from_str(json).expect("valid post");
        assert_eq!(post.published_at, date!(2024 - 02 - 29));
        assert_eq!(post.reading_time, 3);
        assert_eq!(post.tags, vec!["intro".to_string()]);
    }

    #[test]
    fn post_rejects_invalid_calendar_dates() {
        let json = r##"{
            "id": "7", "title": "t", "excerpt": "e", "content": "",
            "author": {"name": "a", "avatar": "https://example.com/a.png", "bio": ""},
            "publishedAt": "2023-02-29", "readingTime": 1, "category": "c",
            "image": "https://example.com/i.png", "slug": "t"
        }"##;

        assert!(serde_json::from_str::<Post>(json).is_err());
    }
}
