// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// GitHub REST API access for profile rendering.
///
/// Wraps an octocrab client behind the three read-only endpoints the renderer
/// needs: paginated repository listing, per-repository language breakdown,
/// and the public event feed.
use std::{collections::HashMap, time::Duration};

use masterror::AppError;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::activity::PublicEvent;

/// Upper bound applied to every outbound API request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15,);

const PER_PAGE: u8 = 100;
const REPO_TYPE_OWNER: &str = "owner";
const SORT_PUSHED: &str = "pushed";

/// Repository record from the listing endpoint.
#[derive(Debug, Clone, Deserialize,)]
pub struct RepoRecord
{
    pub name:      String,
    pub full_name: String,
    #[serde(default)]
    pub fork:      bool,
}

#[derive(Debug, Serialize,)]
struct RepoListQuery
{
    per_page:  u8,
    page:      u32,
    #[serde(rename = "type")]
    repo_type: &'static str,
    sort:      &'static str,
}

/// Thin client exposing the REST endpoints used by the renderer.
#[derive(Clone,)]
pub struct GithubClient
{
    octocrab: Octocrab,
}

impl GithubClient
{
    /// Builds a client, optionally authenticated with a personal token.
    ///
    /// # Arguments
    ///
    /// * `token` - Personal access token; unauthenticated when `None`
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the underlying HTTP client cannot be
    /// initialized.
    pub fn new(token: Option<&str,>,) -> Result<Self, AppError,>
    {
        let builder = Octocrab::builder();
        let octocrab = match token {
            Some(value,) => builder.personal_token(value.to_owned(),).build(),
            None => builder.build(),
        }
        .map_err(|e| AppError::unauthorized(format!("failed to initialize GitHub client: {e}"),),)?;

        Ok(Self {
            octocrab,
        },)
    }

    /// Fetches every repository owned by the user, most recently pushed
    /// first.
    ///
    /// Pagination stops when a page comes back empty or shorter than the
    /// page size. Forks are included here; the language aggregation step
    /// decides what to skip.
    ///
    /// # Arguments
    ///
    /// * `username` - GitHub account to list repositories for
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when any page request fails or times out; no
    /// partial listing is returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use prr::GithubClient;
    ///
    /// # async fn example() -> Result<(), masterror::AppError> {
    /// let client = GithubClient::new(Some("token",),)?;
    /// let repositories = client.fetch_repositories("octocat",).await?;
    /// println!("{} repositories", repositories.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_repositories(&self, username: &str,) -> Result<Vec<RepoRecord,>, AppError,>
    {
        debug!("Fetching repositories for {}", username);

        let route = format!("/users/{username}/repos");
        let mut repositories = Vec::new();
        let mut page = 1u32;

        loop {
            let query = RepoListQuery {
                per_page: PER_PAGE,
                page,
                repo_type: REPO_TYPE_OWNER,
                sort: SORT_PUSHED,
            };

            let page_items: Vec<RepoRecord,> =
                timeout(REQUEST_TIMEOUT, self.octocrab.get(&route, Some(&query,),),)
                    .await
                    .map_err(|_| {
                        AppError::service(format!("repository listing for {username} timed out"),)
                    },)?
                    .map_err(|e| {
                        AppError::service(format!(
                            "failed to fetch repositories for {username}: {e}"
                        ),)
                    },)?;

            let items_count = page_items.len();
            repositories.extend(page_items,);

            if items_count == 0 || items_count < usize::from(PER_PAGE,) {
                break;
            }

            page += 1;
        }

        info!("Found {} repositories for {}", repositories.len(), username);

        Ok(repositories,)
    }

    /// Fetches the per-language byte breakdown for one repository.
    ///
    /// # Arguments
    ///
    /// * `full_name` - Repository reference in `owner/repo` form
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the request fails or times out.
    pub async fn fetch_repository_languages(
        &self,
        full_name: &str,
    ) -> Result<HashMap<String, u64,>, AppError,>
    {
        debug!("Fetching language breakdown for {}", full_name);

        let route = format!("/repos/{full_name}/languages");
        timeout(REQUEST_TIMEOUT, self.octocrab.get(&route, None::<&(),>,),)
            .await
            .map_err(|_| {
                AppError::service(format!("language breakdown for {full_name} timed out"),)
            },)?
            .map_err(|e| {
                AppError::service(format!("failed to fetch languages for {full_name}: {e}"),)
            },)
    }

    /// Fetches a single page of the user's public event feed.
    ///
    /// # Arguments
    ///
    /// * `username` - GitHub account whose feed is read
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the request fails or times out.
    pub async fn fetch_public_events(
        &self,
        username: &str,
    ) -> Result<Vec<PublicEvent,>, AppError,>
    {
        debug!("Fetching public events for {}", username);

        let route = format!("/users/{username}/events/public");
        timeout(REQUEST_TIMEOUT, self.octocrab.get(&route, None::<&(),>,),)
            .await
            .map_err(|_| AppError::service(format!("event feed for {username} timed out"),),)?
            .map_err(|e| {
                AppError::service(format!("failed to fetch public events for {username}: {e}"),)
            },)
    }
}
