// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Language byte aggregation and table rendering.
///
/// Sums per-repository language byte counts across a user's own (non-fork)
/// repositories and renders the totals as a Markdown table with fixed-width
/// progress bars.
use std::collections::{BTreeMap, HashMap};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::github::{GithubClient, RepoRecord};

/// Number of glyphs in a rendered progress bar.
pub const BAR_WIDTH: usize = 20;

/// Sentinel emitted when no language data is available.
pub const NO_LANGUAGE_DATA: &str = "No language data available.\n";

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Aggregates language byte counts across the user's own repositories.
///
/// Forks are skipped entirely so copied code does not inflate the profile.
/// A failed per-repository fetch is logged and skipped; the aggregate never
/// fails because of one bad repository.
///
/// # Arguments
///
/// * `client` - GitHub API client
/// * `repositories` - Listing produced by the repository fetcher
pub async fn aggregate_language_totals(
    client: &GithubClient,
    repositories: &[RepoRecord],
) -> BTreeMap<String, u64,>
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .expect("valid template",),
    );

    let owned = owned_repositories(repositories,);
    debug!("Skipping {} forks", repositories.len() - owned.len());
    info!("Aggregating languages across {} repositories", owned.len());

    let mut totals = BTreeMap::new();
    for repository in owned {
        pb.set_message(format!("Fetching languages for {}...", repository.full_name),);
        match client.fetch_repository_languages(&repository.full_name,).await {
            Ok(breakdown,) => accumulate_languages(&mut totals, breakdown,),
            Err(error,) => {
                warn!("Skipping {}: {}", repository.full_name, error);
            }
        }
    }

    pb.finish_with_message(format!(
        "Language aggregation complete: {} languages",
        totals.len()
    ),);

    totals
}

/// Filters the listing down to repositories whose code is the user's own.
fn owned_repositories(repositories: &[RepoRecord],) -> Vec<&RepoRecord,>
{
    repositories.iter().filter(|repository| !repository.fork,).collect()
}

fn accumulate_languages(totals: &mut BTreeMap<String, u64,>, breakdown: HashMap<String, u64,>,)
{
    for (language, bytes,) in breakdown {
        *totals.entry(language,).or_insert(0,) += bytes;
    }
}

/// Renders language totals as a Markdown table.
///
/// Rows are ordered by byte count descending with ties broken by language
/// name ascending, so equal inputs always render identically. Returns the
/// fixed sentinel when no bytes were counted.
///
/// # Arguments
///
/// * `totals` - Aggregated byte counts per language
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use prr::render_language_table;
///
/// let totals = BTreeMap::from([("Rust".to_owned(), 75u64,), ("C".to_owned(), 25u64,)],);
/// let table = render_language_table(&totals,);
/// assert!(table.contains("| Rust | 75.0% |"));
/// ```
pub fn render_language_table(totals: &BTreeMap<String, u64,>,) -> String
{
    let total_bytes: u64 = totals.values().sum();
    if total_bytes == 0 {
        return NO_LANGUAGE_DATA.to_owned();
    }

    let mut ordered: Vec<(&String, &u64,),> = totals.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(a.1,).then_with(|| a.0.cmp(b.0,),),);

    let mut lines = Vec::with_capacity(ordered.len() + 2,);
    lines.push("| Language | % | Progress |".to_owned(),);
    lines.push("|---:|:---:|:---|".to_owned(),);
    for (language, bytes,) in ordered {
        let percent = (*bytes as f64 / total_bytes as f64) * 100.0;
        let bar = progress_bar(percent, BAR_WIDTH,);
        lines.push(format!("| {language} | {percent:.1}% | {bar} |"),);
    }

    lines.join("\n",) + "\n"
}

/// Renders a fixed-width progress bar for a percentage.
///
/// The filled glyph count is the percentage scaled to the width and rounded
/// to the nearest unit; filled and empty glyphs always sum to the width.
///
/// # Arguments
///
/// * `percent` - Percentage in the range `0.0..=100.0`
/// * `width` - Total number of glyphs in the bar
pub fn progress_bar(percent: f64, width: usize,) -> String
{
    let filled = (((percent / 100.0) * width as f64).round() as usize).min(width,);
    let empty = width - filled;

    format!("{}{}", BAR_FILLED.repeat(filled,), BAR_EMPTY.repeat(empty,))
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;

    fn record(name: &str, fork: bool,) -> RepoRecord
    {
        RepoRecord {
            name:      name.to_owned(),
            full_name: format!("octocat/{name}"),
            fork,
        }
    }

    #[test]
    fn owned_repositories_excludes_forks()
    {
        let repositories =
            vec![record("own-project", false,), record("forked-project", true,)];

        let owned = owned_repositories(&repositories,);

        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, "own-project");
    }

    #[test]
    fn accumulate_languages_merges_across_repositories()
    {
        let mut totals = BTreeMap::new();
        accumulate_languages(
            &mut totals,
            HashMap::from([("Rust".to_owned(), 100u64,), ("C".to_owned(), 10u64,)],),
        );
        accumulate_languages(&mut totals, HashMap::from([("Rust".to_owned(), 50u64,)],),);

        assert_eq!(totals.get("Rust"), Some(&150u64));
        assert_eq!(totals.get("C"), Some(&10u64));
    }

    #[test]
    fn render_language_table_matches_known_split()
    {
        let totals = BTreeMap::from([("A".to_owned(), 75u64,), ("B".to_owned(), 25u64,)],);

        let table = render_language_table(&totals,);

        let expected = "| Language | % | Progress |\n\
                        |---:|:---:|:---|\n\
                        | A | 75.0% | ███████████████░░░░░ |\n\
                        | B | 25.0% | █████░░░░░░░░░░░░░░░ |\n";
        assert_eq!(table, expected);
    }

    #[test]
    fn render_language_table_returns_sentinel_for_empty_totals()
    {
        let table = render_language_table(&BTreeMap::new(),);
        assert_eq!(table, "No language data available.\n");
    }

    #[test]
    fn render_language_table_breaks_byte_ties_by_name()
    {
        let totals = BTreeMap::from([("Rust".to_owned(), 50u64,), ("Go".to_owned(), 50u64,)],);

        let table = render_language_table(&totals,);
        let go_position = table.find("| Go |",).expect("Go row missing",);
        let rust_position = table.find("| Rust |",).expect("Rust row missing",);

        assert!(go_position < rust_position, "equal byte counts should order by name",);
    }

    #[test]
    fn progress_bar_fills_proportionally()
    {
        let bar = progress_bar(75.0, 20,);

        assert_eq!(bar.chars().count(), 20);
        assert_eq!(bar.chars().filter(|glyph| *glyph == '█',).count(), 15);
        assert_eq!(bar.chars().filter(|glyph| *glyph == '░',).count(), 5);
    }

    #[test]
    fn progress_bar_handles_extremes()
    {
        assert_eq!(progress_bar(0.0, 20,), "░".repeat(20,));
        assert_eq!(progress_bar(100.0, 20,), "█".repeat(20,));
    }

    #[test]
    fn progress_bar_rounds_to_nearest_glyph()
    {
        let bar = progress_bar(12.3, 20,);
        assert_eq!(bar.chars().filter(|glyph| *glyph == '█',).count(), 2);
    }

    proptest! {
        #[test]
        fn rendered_rows_cover_the_total(
            totals in prop::collection::btree_map("[A-Za-z][A-Za-z0-9]{0,11}", 1u64..1_000_000, 1..8,)
        )
        {
            let table = render_language_table(&totals,);
            let rows: Vec<&str,> = table.trim_end().lines().skip(2,).collect();
            prop_assert_eq!(rows.len(), totals.len());

            let mut percent_sum = 0.0f64;
            for row in &rows {
                let cells: Vec<&str,> =
                    row.trim_matches('|',).split('|',).map(str::trim,).collect();
                prop_assert_eq!(cells.len(), 3);

                let percent: f64 =
                    cells[1].trim_end_matches('%',).parse().expect("numeric percent",);
                percent_sum += percent;
                prop_assert_eq!(cells[2].chars().count(), BAR_WIDTH);
            }

            let slack = 0.05 * rows.len() as f64 + 1e-9;
            prop_assert!((percent_sum - 100.0).abs() <= slack);
        }
    }
}
