//! Command-line interface for the profile README renderer.
//!
//! The binary loads the profile configuration, retrieves repository and
//! activity data from GitHub, renders the language and activity sections, and
//! writes the assembled README to disk.

use std::{path::PathBuf, process};

use clap::Parser;
use prr::{
    Error, GithubClient, ProfileSettings, ReadmeContext, aggregate_language_totals, build_readme,
    current_timestamp, fetch_recent_commits, load_config, render_language_table, resolve_gif_url,
    stats_card_url, top_languages_card_url, visitor_badge_url, write_readme,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line interface for rendering a GitHub profile README.
#[derive(Debug, Parser,)]
#[command(name = "prr", version, about = "Render a GitHub profile README")]
/// Top-level CLI options parsed from user input.
struct Cli
{
    /// Path to the YAML configuration file describing the profile.
    #[arg(long = "config", value_name = "PATH", default_value = "config.yml")]
    config: PathBuf,

    /// Destination path for the rendered document.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,

    /// Personal access token used to authenticate API requests.
    #[arg(long = "token", value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String,>,

    /// Workflow actor used when the configuration omits a username.
    #[arg(long = "actor", value_name = "USER", env = "GITHUB_ACTOR")]
    actor: Option<String,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    init_tracing();

    if let Err(error,) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from configuration loading, GitHub
/// retrieval, and document persistence.
async fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    execute(cli,).await
}

async fn execute(cli: Cli,) -> Result<(), Error,>
{
    if !cli.config.exists() {
        return Err(Error::validation(format!(
            "missing {}, create one based on config.yml.example",
            cli.config.display()
        ),),);
    }

    let config = load_config(&cli.config,)?;
    let settings = ProfileSettings::resolve(
        &config,
        &cli.config,
        cli.actor.as_deref(),
        cli.output.as_deref(),
    )?;

    let token = cli.token.as_deref().map(str::trim,).filter(|value| !value.is_empty(),);
    if token.is_none() {
        warn!("GITHUB_TOKEN not set, requests are unauthenticated and rate-limited");
    }

    info!("Rendering profile README for {}", settings.username);

    let client = GithubClient::new(token,)?;
    let repositories = client.fetch_repositories(&settings.username,).await?;
    let totals = aggregate_language_totals(&client, &repositories,).await;
    let language_table = render_language_table(&totals,);

    let commits = fetch_recent_commits(&client, &settings.username, settings.commit_limit,).await;
    let last_updated = current_timestamp();

    let visitor_badge = visitor_badge_url(&settings.username,);
    let stats_card = stats_card_url(&settings.username,);
    let top_languages_card = top_languages_card_url(&settings.username,);
    let gif_url = resolve_gif_url(&settings,);

    let context = ReadmeContext {
        username:           &settings.username,
        display_name:       &settings.display_name,
        bio_code:           settings.bio_code.as_deref(),
        linkedin_url:       settings.linkedin_url.as_deref(),
        gif_url:            gif_url.as_deref(),
        visitor_badge:      Some(visitor_badge.as_str(),),
        stats_card:         Some(stats_card.as_str(),),
        top_languages_card: Some(top_languages_card.as_str(),),
        language_table:     &language_table,
        commits:            &commits,
        last_updated:       &last_updated,
    };

    let document = build_readme(&context,);
    write_readme(&settings.output_path, &document,)?;

    println!("README.md generated.");

    Ok((),)
}

/// Initializes the tracing subscriber, honoring `RUST_LOG` overrides.
fn init_tracing()
{
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into(),),
        )
        .with(tracing_subscriber::fmt::layer(),)
        .init();
}
