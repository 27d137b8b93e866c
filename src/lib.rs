//! Utilities for rendering a GitHub profile README from live account data.
//!
//! The library exposes the building blocks of the renderer: configuration
//! loading, settings resolution, GitHub retrieval, language aggregation,
//! recent-activity collection, badge URL construction, and document assembly.
//! The binary stays a thin orchestration layer over these pieces, and all
//! public APIs are documented with error semantics and minimal examples.

mod activity;
mod badge;
mod config;
mod document;
mod error;
mod gif;
mod github;
mod languages;
mod settings;

pub use activity::{
    CommitPayload, CommitRef, EventPayload, EventRepository, PublicEvent, collect_recent_commits,
    fetch_recent_commits,
};
pub use badge::{shield_badge_url, stats_card_url, top_languages_card_url, visitor_badge_url};
pub use config::{ProfileConfig, load_config, parse_config};
pub use document::{ReadmeContext, build_readme, current_timestamp, write_readme};
pub use error::{Error, io_error, readme_io_error};
pub use gif::resolve_gif_url;
pub use github::{GithubClient, RepoRecord};
pub use languages::{
    BAR_WIDTH, NO_LANGUAGE_DATA, aggregate_language_totals, progress_bar, render_language_table,
};
pub use settings::ProfileSettings;
