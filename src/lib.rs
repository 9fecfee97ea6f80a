//! Presentation core for a static blog front end.
//!
//! Post records live in `domain`. The services that search, rank and serve
//! them live in `application`; `presentation` turns their output into view
//! models for the CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
