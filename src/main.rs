use std::{
    io::{self, Write},
    process,
};

use postdeck::{
    application::{
        catalog::PostCatalog,
        engagement::{CommentDraft, EngagementService},
        error::AppError,
        repos::{PostSource, StaticPostSource},
        search::PostQuery,
    },
    config::{self, Command, CommentArgs, PostArgs, SearchArgs},
    domain::error::DomainError,
    infra::{dataset::JsonFileSource, error::InfraError, telemetry},
    presentation::views::{
        CategoryView, LandingView, PostCard, PostDetailView, post_cards, related_heading,
    },
};
use serde::Serialize;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let chain = error.chain().join(": ");
    if dispatcher::has_been_set() {
        error!(error = %chain, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %chain, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let source: Box<dyn PostSource> = match settings.catalog.dataset.as_ref() {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(StaticPostSource::sample()),
    };
    let catalog = PostCatalog::load(source.as_ref()).await?;

    let output = Output {
        json: cli_args.json,
    };
    let related_limit = settings.catalog.related_limit.get();
    let engagement = EngagementService::new(
        settings.engagement.comment_delay,
        settings.engagement.newsletter_delay,
    );

    match cli_args
        .command
        .unwrap_or_else(|| Command::Home(SearchArgs::default()))
    {
        Command::Home(args) => run_home(&catalog, &output, args),
        Command::List => output.cards(&post_cards(catalog.latest())),
        Command::Search(args) => run_search(&catalog, &output, args),
        Command::Show(args) => {
            let detail = catalog.detail(&args.slug, args.limit.unwrap_or(related_limit))?;
            let view = PostDetailView::from(&detail).with_share_links(&settings.site.base_url);
            output.message(&view, || view.to_string())
        }
        Command::Related(args) => run_related(&catalog, &output, args, related_limit),
        Command::Categories => {
            let categories: Vec<CategoryView> =
                catalog.categories().iter().map(CategoryView::from).collect();
            output.lines(&categories)
        }
        Command::Comment(args) => run_comment(&catalog, &output, &engagement, args).await,
        Command::Subscribe(args) => {
            let subscription = engagement.subscribe(&args.email).await?;
            info!(
                target = "postdeck::cli",
                email = %subscription.email,
                "newsletter subscription confirmed"
            );
            output.message(&subscription, || {
                format!(
                    "Successfully subscribed! Updates will be sent to {}.",
                    subscription.email
                )
            })
        }
    }
}

fn query_from(args: SearchArgs) -> PostQuery {
    let query = PostQuery::new(args.query);
    match args.category {
        Some(category) => query.in_category(category),
        None => query,
    }
}

fn run_home(catalog: &PostCatalog, output: &Output, args: SearchArgs) -> Result<(), AppError> {
    let query = query_from(args);
    let landing = catalog.landing(&query);
    let view = LandingView::new(&landing, &query, &catalog.categories());
    output.message(&view, || view.to_string())
}

fn run_search(catalog: &PostCatalog, output: &Output, args: SearchArgs) -> Result<(), AppError> {
    let query = query_from(args);
    output.cards(&post_cards(catalog.search(&query)))
}

fn run_related(
    catalog: &PostCatalog,
    output: &Output,
    args: PostArgs,
    default_limit: usize,
) -> Result<(), AppError> {
    let detail = catalog.detail(&args.slug, args.limit.unwrap_or(default_limit))?;
    let cards = post_cards(detail.related.iter().copied());

    if !output.json {
        output.write_line(related_heading(detail.related_basis))?;
    }
    output.cards(&cards)
}

async fn run_comment(
    catalog: &PostCatalog,
    output: &Output,
    engagement: &EngagementService,
    args: CommentArgs,
) -> Result<(), AppError> {
    let post = catalog
        .find_by_slug(&args.slug)
        .ok_or_else(|| DomainError::not_found("post"))?;
    let draft = CommentDraft {
        author_name: args.name,
        author_email: args.email,
        body: args.body,
    };

    let comment = engagement.submit_comment(post, draft).await?;
    output.message(&comment, || {
        format!("Comment {} posted on {}", comment.id, post.title)
    })
}

struct Output {
    json: bool,
}

impl Output {
    fn cards(&self, cards: &[PostCard]) -> Result<(), AppError> {
        if self.json {
            return self.write_json(cards);
        }
        if cards.is_empty() {
            return self.write_line("No posts found.");
        }
        self.lines(cards)
    }

    fn lines<T: Serialize + std::fmt::Display>(&self, items: &[T]) -> Result<(), AppError> {
        if self.json {
            return self.write_json(items);
        }
        for item in items {
            self.write_line(item)?;
        }
        Ok(())
    }

    fn message<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<(), AppError> {
        if self.json {
            self.write_json(value)
        } else {
            self.write_line(text())
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), AppError> {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, value).map_err(InfraError::from)?;
        writeln!(stdout).map_err(InfraError::from)?;
        Ok(())
    }

    fn write_line(&self, line: impl std::fmt::Display) -> Result<(), AppError> {
        writeln!(io::stdout().lock(), "{line}").map_err(InfraError::from)?;
        Ok(())
    }
}
