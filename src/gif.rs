// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Animated header image resolution.
///
/// Decides which image URL the README header embeds, preferring an external
/// URL over a repository-local asset.
use crate::settings::ProfileSettings;

/// Resolves the animated header image URL, if any.
///
/// Resolution order:
///
/// 1. An externally hosted URL is used verbatim when configured.
/// 2. Without a configured repository path the header is omitted.
/// 3. A path that exists under the project root is kept repository-relative,
///    with backslashes normalized so GitHub renders it.
/// 4. Otherwise the path is assumed to live on the profile repository and a
///    raw-content URL is built for the configured branch.
///
/// # Returns
///
/// The image URL, or `None` when no image is configured.
pub fn resolve_gif_url(settings: &ProfileSettings) -> Option<String> {
    if let Some(external) = settings.external_gif_url.as_deref() {
        return Some(external.to_owned());
    }

    let gif_path = settings.gif_path.as_deref()?;
    if settings.project_root.join(gif_path).exists() {
        return Some(gif_path.replace('\\', "/"));
    }

    Some(format!(
        "https://raw.githubusercontent.com/{username}/{username}/{branch}/{gif_path}",
        username = settings.username,
        branch = settings.branch_name
    ))
}
