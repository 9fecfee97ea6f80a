//! Application services: search, ranking, catalog queries and engagement.

pub mod catalog;
pub mod engagement;
pub mod error;
pub mod related;
pub mod repos;
pub mod search;
