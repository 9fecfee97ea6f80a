//! View models for list, detail and category screens.

pub mod views;
