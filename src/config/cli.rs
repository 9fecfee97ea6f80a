use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the postdeck binary.
#[derive(Debug, Parser)]
#[command(name = "postdeck", version, about = "Browse and search a static blog dataset")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "POSTDECK_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    /// Print results as JSON instead of text.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Load posts from a JSON dataset instead of the built-in sample.
    #[arg(long = "dataset", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dataset: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override the simulated comment submission latency.
    #[arg(long = "comment-delay-ms", value_name = "MILLIS")]
    pub comment_delay_ms: Option<u64>,

    /// Override the simulated newsletter signup latency.
    #[arg(long = "newsletter-delay-ms", value_name = "MILLIS")]
    pub newsletter_delay_ms: Option<u64>,

    /// Public base URL used to build share links.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Show the landing page: featured post plus the post grid.
    Home(SearchArgs),
    /// List every post, newest first.
    List,
    /// Filter posts by text and category.
    Search(SearchArgs),
    /// Show one post with its outline, share links and related posts.
    Show(PostArgs),
    /// List related posts for one post.
    Related(PostArgs),
    /// List categories with live post counts.
    Categories,
    /// Submit a comment on a post.
    Comment(CommentArgs),
    /// Subscribe an address to the newsletter.
    Subscribe(SubscribeArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct SearchArgs {
    /// Text matched against titles, excerpts and tags.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Restrict results to one category.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct PostArgs {
    /// Slug of the post.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Maximum number of related posts; defaults to the configured limit.
    #[arg(long, value_name = "COUNT")]
    pub limit: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct CommentArgs {
    /// Slug of the post being commented on.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Display name of the commenter.
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Contact address of the commenter; never displayed.
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Comment text.
    #[arg(value_name = "BODY")]
    pub body: String,
}

#[derive(Debug, Args, Clone)]
pub struct SubscribeArgs {
    /// Address to subscribe.
    #[arg(value_name = "EMAIL")]
    pub email: String,
}
