// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge and stat-card URL builders.
//!
//! Everything here is pure string construction. The URLs point at external
//! rendering services (shields.io, countapi, github-readme-stats) that are
//! fetched by whoever views the README, never by this program.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched when a URL is embedded in a query parameter.
///
/// Everything outside ASCII alphanumerics and `-._~` is percent-encoded,
/// which is what shields.io expects for its dynamic JSON `url` parameter.
const QUERY_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builds the visitor-counter badge URL for a username.
///
/// The countapi hit endpoint is embedded percent-encoded into a shields.io
/// dynamic JSON badge, so the viewer's image fetch performs the actual hit.
///
/// # Example
///
/// ```
/// use prr::visitor_badge_url;
///
/// let url = visitor_badge_url("octocat");
/// assert!(url.contains("url=https%3A%2F%2Fapi.countapi.xyz%2Fhit%2Foctocat%2Foctocat"));
/// ```
pub fn visitor_badge_url(username: &str) -> String {
    let endpoint = format!("https://api.countapi.xyz/hit/{username}/{username}");
    let encoded = utf8_percent_encode(&endpoint, QUERY_VALUE_SET);
    format!(
        "https://img.shields.io/badge/dynamic/json?color=blue&label=Visitors&query=value&url={encoded}"
    )
}

/// Builds a static shields.io badge URL.
///
/// Spaces in the label become `%20`; other characters pass through unchanged,
/// matching what shields.io accepts in its path segment.
pub fn shield_badge_url(label: &str, color: &str, logo: &str) -> String {
    let encoded_label = label.replace(' ', "%20");
    format!(
        "https://img.shields.io/badge/{encoded_label}-{color}?style=for-the-badge&logo={logo}&logoColor=white"
    )
}

/// Builds the github-readme-stats summary card URL for a username.
pub fn stats_card_url(username: &str) -> String {
    format!(
        "https://github-readme-stats.vercel.app/api?username={username}&show_icons=true&count_private=false&theme=radical"
    )
}

/// Builds the github-readme-stats top-languages card URL for a username.
pub fn top_languages_card_url(username: &str) -> String {
    format!(
        "https://github-readme-stats.vercel.app/api/top-langs/?username={username}&layout=compact&langs_count=8&theme=radical"
    )
}
