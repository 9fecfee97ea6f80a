//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{num::NonZeroUsize, path::PathBuf, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

pub use cli::{
    CliArgs, Command, CommentArgs, GlobalOverrides, PostArgs, SearchArgs, SubscribeArgs,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "postdeck";
const DEFAULT_RELATED_LIMIT: usize = 3;
const DEFAULT_COMMENT_DELAY_MS: u64 = 1000;
const DEFAULT_NEWSLETTER_DELAY_MS: u64 = 1500;
const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub catalog: CatalogSettings,
    pub engagement: EngagementSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// JSON dataset to load; the built-in sample is used when absent.
    pub dataset: Option<PathBuf>,
    pub related_limit: NonZeroUsize,
}

#[derive(Debug, Clone)]
pub struct EngagementSettings {
    pub comment_delay: Duration,
    pub newsletter_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Public root of the blog; always ends with `/`.
    pub base_url: Url,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("POSTDECK").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    catalog: RawCatalogSettings,
    engagement: RawEngagementSettings,
    site: RawSiteSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(path) = overrides.dataset.as_ref() {
            self.catalog.dataset = Some(path.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(delay) = overrides.comment_delay_ms {
            self.engagement.comment_delay_ms = Some(delay);
        }
        if let Some(delay) = overrides.newsletter_delay_ms {
            self.engagement.newsletter_delay_ms = Some(delay);
        }
        if let Some(base_url) = overrides.base_url.as_ref() {
            self.site.base_url = Some(base_url.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            catalog,
            engagement,
            site,
        } = raw;

        Ok(Self {
            logging: build_logging_settings(logging)?,
            catalog: build_catalog_settings(catalog)?,
            engagement: build_engagement_settings(engagement),
            site: build_site_settings(site)?,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_catalog_settings(catalog: RawCatalogSettings) -> Result<CatalogSettings, LoadError> {
    let dataset = catalog
        .dataset
        .filter(|path| !path.as_os_str().is_empty());

    let limit = catalog.related_limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    let related_limit = NonZeroUsize::new(limit)
        .ok_or_else(|| LoadError::invalid("catalog.related_limit", "must be greater than zero"))?;

    Ok(CatalogSettings {
        dataset,
        related_limit,
    })
}

fn build_engagement_settings(engagement: RawEngagementSettings) -> EngagementSettings {
    let comment = engagement
        .comment_delay_ms
        .unwrap_or(DEFAULT_COMMENT_DELAY_MS);
    let newsletter = engagement
        .newsletter_delay_ms
        .unwrap_or(DEFAULT_NEWSLETTER_DELAY_MS);

    EngagementSettings {
        comment_delay: Duration::from_millis(comment),
        newsletter_delay: Duration::from_millis(newsletter),
    }
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let raw = site
        .base_url
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut base_url = Url::parse(&raw)
        .map_err(|err| LoadError::invalid("site.base_url", format!("failed to parse: {err}")))?;
    if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "site.base_url",
            "must be an absolute http(s) URL",
        ));
    }
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok(SiteSettings { base_url })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCatalogSettings {
    dataset: Option<PathBuf>,
    related_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawEngagementSettings {
    comment_delay_ms: Option<u64>,
    newsletter_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    base_url: Option<String>,
}
