//! Terminal infinite-scroll feed.
//!
//! Loads a paginated JSON endpoint page by page as the user scrolls toward
//! the bottom of the list.

pub mod cli;
pub mod config;
pub mod feed;
pub mod logging;
pub mod source;
pub mod ui;
