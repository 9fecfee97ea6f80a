//! Utilities for deterministic, URL-safe slugs.
//!
//! Post slugs come from the dataset and are only checked here; category slugs
//! and heading anchors are derived from human-readable text.

use std::collections::{HashMap, HashSet};

use slug::slugify;
use thiserror::Error;

/// Errors that can occur while generating a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive a base slug from the provided human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);

    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Returns `true` when the value is already in canonical slug form.
pub fn is_url_safe(value: &str) -> bool {
    !value.is_empty() && slugify(value) == value
}

/// Hands out heading anchors that are unique within one post body.
///
/// The first heading with a given slug keeps it; later ones are numbered
/// from 2 in document order, skipping any anchor already handed out.
#[derive(Default, Debug)]
pub struct AnchorSlugger {
    issued: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl AnchorSlugger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor_for(&mut self, heading: &str) -> Result<String, SlugError> {
        let base = derive_slug(heading)?;

        let anchor = if self.issued.contains(&base) {
            let suffix = self.next_suffix.entry(base.clone()).or_insert(2);
            loop {
                let candidate = format!("{base}-{suffix}");
                *suffix += 1;
                if !self.issued.contains(&candidate) {
                    break candidate;
                }
            }
        } else {
            base
        };

        self.issued.insert(anchor.clone());
        Ok(anchor)
    }
}
