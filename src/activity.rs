// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Recent commit extraction from the public event feed.
///
/// Filters push events out of a user's public feed and collects a bounded
/// number of commit references for the recent-activity section. The feed is
/// best-effort: any fetch failure degrades to an empty list instead of
/// aborting the run.
use serde::Deserialize;
use tracing::warn;

use crate::github::GithubClient;

const PUSH_EVENT_KIND: &str = "PushEvent";

/// Public feed entry as returned by the events endpoint.
///
/// Payload shapes differ per event kind; all fields the renderer reads are
/// defaulted so foreign event kinds deserialize without errors.
#[derive(Debug, Clone, Deserialize,)]
pub struct PublicEvent
{
    #[serde(rename = "type")]
    pub kind:    String,
    #[serde(default)]
    pub repo:    EventRepository,
    #[serde(default)]
    pub payload: EventPayload,
}

/// Repository descriptor attached to a feed entry.
#[derive(Debug, Clone, Default, Deserialize,)]
pub struct EventRepository
{
    #[serde(default)]
    pub name: String,
}

/// Payload fragment carrying pushed commits.
#[derive(Debug, Clone, Default, Deserialize,)]
pub struct EventPayload
{
    #[serde(default)]
    pub commits: Vec<CommitPayload,>,
}

/// Single pushed commit inside an event payload.
#[derive(Debug, Clone, Default, Deserialize,)]
pub struct CommitPayload
{
    #[serde(default)]
    pub sha:     String,
    #[serde(default)]
    pub message: String,
}

/// Commit reference rendered in the recent-activity section.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct CommitRef
{
    pub repository: String,
    pub message:    String,
    pub url:        Option<String,>,
}

/// Collects up to `limit` commit references from feed entries.
///
/// Only push events contribute. Commits are taken in payload order and
/// collection stops the moment the limit is reached, even in the middle of
/// an event.
///
/// # Arguments
///
/// * `events` - Feed entries in the order returned by the API
/// * `limit` - Maximum number of references to collect
pub fn collect_recent_commits(events: &[PublicEvent], limit: usize,) -> Vec<CommitRef,>
{
    if limit == 0 {
        return Vec::new();
    }

    let mut commits = Vec::with_capacity(limit,);
    for event in events {
        if event.kind != PUSH_EVENT_KIND {
            continue;
        }

        for commit in &event.payload.commits {
            commits.push(CommitRef {
                repository: event.repo.name.clone(),
                message:    commit.message.clone(),
                url:        commit_url(&event.repo.name, &commit.sha,),
            },);

            if commits.len() >= limit {
                return commits;
            }
        }
    }

    commits
}

/// Builds the canonical commit link when both parts are known.
fn commit_url(repository: &str, sha: &str,) -> Option<String,>
{
    if repository.is_empty() || sha.is_empty() {
        return None;
    }

    Some(format!("https://github.com/{repository}/commit/{sha}"),)
}

/// Fetches the public feed and extracts recent commit references.
///
/// Feed failures are recovered to an empty list with a warning; the
/// recent-activity section renders its placeholder in that case.
///
/// # Arguments
///
/// * `client` - GitHub API client
/// * `username` - Account whose feed is read
/// * `limit` - Maximum number of references to collect
pub async fn fetch_recent_commits(
    client: &GithubClient,
    username: &str,
    limit: usize,
) -> Vec<CommitRef,>
{
    match client.fetch_public_events(username,).await {
        Ok(events,) => collect_recent_commits(&events, limit,),
        Err(error,) => {
            warn!("Failed to fetch public events for {}: {}", username, error);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests
{
    use serde_json::json;

    use super::*;

    fn commit(sha: &str, message: &str,) -> CommitPayload
    {
        CommitPayload {
            sha:     sha.to_owned(),
            message: message.to_owned(),
        }
    }

    fn push_event(repository: &str, commits: Vec<CommitPayload,>,) -> PublicEvent
    {
        PublicEvent {
            kind:    PUSH_EVENT_KIND.to_owned(),
            repo:    EventRepository {
                name: repository.to_owned(),
            },
            payload: EventPayload {
                commits,
            },
        }
    }

    #[test]
    fn collect_truncates_in_the_middle_of_an_event()
    {
        let events = vec![
            push_event("octocat/alpha", vec![commit("a1", "first"), commit("a2", "second")],),
            push_event("octocat/beta", vec![commit("b1", "third"), commit("b2", "fourth")],),
            push_event("octocat/gamma", vec![commit("c1", "fifth"), commit("c2", "sixth")],),
        ];

        let collected = collect_recent_commits(&events, 5,);

        assert_eq!(collected.len(), 5);
        let messages: Vec<&str,> =
            collected.iter().map(|reference| reference.message.as_str(),).collect();
        assert_eq!(messages, vec!["first", "second", "third", "fourth", "fifth"]);
        assert_eq!(collected[4].repository, "octocat/gamma");
    }

    #[test]
    fn collect_ignores_non_push_events()
    {
        let mut watch = push_event("octocat/alpha", vec![commit("a1", "starred")],);
        watch.kind = "WatchEvent".to_owned();
        let events = vec![watch, push_event("octocat/beta", vec![commit("b1", "pushed")],)];

        let collected = collect_recent_commits(&events, 5,);

        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].message, "pushed");
    }

    #[test]
    fn collect_returns_empty_without_push_events()
    {
        let mut event = push_event("octocat/alpha", Vec::new(),);
        event.kind = "IssuesEvent".to_owned();

        let collected = collect_recent_commits(&[event], 5,);
        assert!(collected.is_empty());
    }

    #[test]
    fn collect_builds_commit_links()
    {
        let events = vec![push_event("octocat/alpha", vec![commit("abc123", "fix bug")],)];

        let collected = collect_recent_commits(&events, 5,);

        assert_eq!(
            collected[0].url.as_deref(),
            Some("https://github.com/octocat/alpha/commit/abc123")
        );
    }

    #[test]
    fn collect_omits_link_when_sha_is_missing()
    {
        let events = vec![push_event("octocat/alpha", vec![commit("", "no sha")],)];

        let collected = collect_recent_commits(&events, 5,);

        assert_eq!(collected[0].message, "no sha");
        assert!(collected[0].url.is_none());
    }

    #[test]
    fn collect_omits_link_when_repository_is_missing()
    {
        let events = vec![push_event("", vec![commit("abc123", "orphan")],)];

        let collected = collect_recent_commits(&events, 5,);
        assert!(collected[0].url.is_none());
    }

    #[test]
    fn collect_with_zero_limit_returns_empty()
    {
        let events = vec![push_event("octocat/alpha", vec![commit("a1", "first")],)];
        assert!(collect_recent_commits(&events, 0,).is_empty());
    }

    #[test]
    fn public_event_deserializes_push_payload()
    {
        let value = json!({
            "type": "PushEvent",
            "repo": { "id": 1, "name": "octocat/alpha" },
            "payload": {
                "push_id": 7,
                "commits": [
                    { "sha": "a1", "message": "first", "author": { "name": "octocat" } }
                ]
            }
        });

        let event: PublicEvent = serde_json::from_value(value,).expect("deserialization failed",);
        assert_eq!(event.kind, "PushEvent");
        assert_eq!(event.repo.name, "octocat/alpha");
        assert_eq!(event.payload.commits.len(), 1);
        assert_eq!(event.payload.commits[0].sha, "a1");
    }

    #[test]
    fn public_event_tolerates_foreign_payloads()
    {
        let value = json!({
            "type": "WatchEvent",
            "repo": { "name": "octocat/alpha" },
            "payload": { "action": "started" }
        });

        let event: PublicEvent = serde_json::from_value(value,).expect("deserialization failed",);
        assert_eq!(event.kind, "WatchEvent");
        assert!(event.payload.commits.is_empty());
    }

    #[test]
    fn public_event_tolerates_missing_payload()
    {
        let value = json!({ "type": "PushEvent" });

        let event: PublicEvent = serde_json::from_value(value,).expect("deserialization failed",);
        assert!(event.repo.name.is_empty());
        assert!(event.payload.commits.is_empty());
    }
}
