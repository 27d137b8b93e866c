// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Assembles and persists the rendered README document.
///
/// Section order is fixed: title, animated header, bio, badge row, languages,
/// recent activity, timestamp, footer. Optional fragments are skipped without
/// leaving gaps, so a sparse configuration still yields a well-formed
/// document.
use std::{fs, path::Path};

use chrono::Utc;
use tracing::info;

use crate::{
    activity::CommitRef,
    badge::shield_badge_url,
    error::{self, Error}
};

/// Rendered when the public event feed yields no commits.
const NO_COMMITS_PLACEHOLDER: &str = "_No public commits found yet — start committing!_\n";
/// Closing note appended after the horizontal rule.
const FOOTER_NOTE: &str = "This README is generated automatically. Updates occur daily and whenever this repository receives a push.";
/// Timestamp layout used in the last-updated line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fragments assembled into the final document.
///
/// All fields borrow from the caller; the context is built once per run after
/// every fetch and render step has finished.
#[derive(Debug, Clone)]
pub struct ReadmeContext<'a> {
    /// GitHub account the profile belongs to.
    pub username: &'a str,
    /// Name rendered as the document title.
    pub display_name: &'a str,
    /// Bio snippet rendered as a fenced code block.
    pub bio_code: Option<&'a str>,
    /// LinkedIn profile URL the badge links to.
    pub linkedin_url: Option<&'a str>,
    /// Animated header image URL.
    pub gif_url: Option<&'a str>,
    /// Visitor-counter badge URL.
    pub visitor_badge: Option<&'a str>,
    /// Statistics card image URL.
    pub stats_card: Option<&'a str>,
    /// Top-languages card image URL.
    pub top_languages_card: Option<&'a str>,
    /// Pre-rendered language table, or its no-data sentinel.
    pub language_table: &'a str,
    /// Recent commit references, newest first.
    pub commits: &'a [CommitRef],
    /// UTC timestamp rendered in the last-updated line.
    pub last_updated: &'a str
}

/// Builds the complete README document from the provided fragments.
///
/// The document is returned without a trailing newline; sections are joined
/// with single newlines and sections that own a blank separator carry it in
/// their final line.
///
/// # Example
///
/// ```
/// use prr::{ReadmeContext, build_readme};
///
/// let context = ReadmeContext {
///     username: "octocat",
///     display_name: "The Octocat",
///     bio_code: None,
///     linkedin_url: None,
///     gif_url: None,
///     visitor_badge: None,
///     stats_card: None,
///     top_languages_card: None,
///     language_table: "No language data available.\n",
///     commits: &[],
///     last_updated: "2025-01-01 00:00:00",
/// };
///
/// let document = build_readme(&context);
/// assert!(document.starts_with("# The Octocat\n"));
/// assert!(document.contains("## Recent activity"));
/// ```
pub fn build_readme(context: &ReadmeContext<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}\n", context.display_name));

    if let Some(gif_url) = context.gif_url {
        lines.push("<p align=\"center\">".to_owned());
        lines.push(format!(
            "  <img src=\"{gif_url}\" alt=\"Animated coder\" width=\"320\"/>"
        ));
        lines.push("</p>\n".to_owned());
    }

    if let Some(bio) = context.bio_code {
        lines.push("```cpp".to_owned());
        lines.push(bio.to_owned());
        lines.push("```\n".to_owned());
    }

    let mut cards: Vec<String> = Vec::new();
    if let Some(url) = context.stats_card {
        cards.push(format!("![GitHub stats]({url})"));
    }
    if let Some(url) = context.top_languages_card {
        cards.push(format!("![Top languages]({url})"));
    }
    if let Some(badge) = context.visitor_badge {
        cards.push(format!(
            "[![Visitors]({badge})](https://github.com/{})",
            context.username
        ));
    }
    if let Some(linkedin) = context.linkedin_url {
        let shield = shield_badge_url("LinkedIn", "blue", "linkedin");
        lines.push(format!("[![LinkedIn]({shield})]({linkedin})  "));
    }
    if !cards.is_empty() {
        // Two trailing spaces force a hard line break between cards.
        lines.push(format!("{}\n", cards.join("  \n")));
    }

    lines.push("## Languages\n".to_owned());
    lines.push(context.language_table.to_owned());

    lines.push("## Recent activity\n".to_owned());
    if context.commits.is_empty() {
        lines.push(NO_COMMITS_PLACEHOLDER.to_owned());
    } else {
        for commit in context.commits {
            lines.push(commit_line(commit));
        }
        lines.push(String::new());
    }

    lines.push(format!("_Last updated: {} UTC_\n", context.last_updated));

    lines.push("---".to_owned());
    lines.push(FOOTER_NOTE.to_owned());

    lines.join("\n")
}

fn commit_line(commit: &CommitRef) -> String {
    match commit.url.as_deref() {
        Some(url) => format!(
            "- [{message}]({url}) — _{repository}_",
            message = commit.message,
            repository = commit.repository
        ),
        None => format!(
            "- {message} — _{repository}_",
            message = commit.message,
            repository = commit.repository
        )
    }
}

/// Returns the current UTC time formatted for the last-updated line.
pub fn current_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Writes the document to `path`, replacing any previous contents.
///
/// # Errors
///
/// Returns [`Error::ReadmeIo`](Error::ReadmeIo) when the file cannot be
/// written.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use prr::write_readme;
///
/// # fn main() -> Result<(), prr::Error> {
/// write_readme(Path::new("README.md"), "# Title\n")?;
/// # Ok(())
/// # }
/// ```
pub fn write_readme(path: &Path, content: &str) -> Result<(), Error> {
    info!("Writing README to {}", path.display());
    fs::write(path, content).map_err(|source| error::readme_io_error(path, source))?;
    info!("README written successfully");
    Ok(())
}
