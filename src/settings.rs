//! Resolution of raw configuration documents into runtime settings.
//!
//! The resolution step trims user-supplied values, applies documented
//! defaults, and resolves the GitHub username from the configuration with an
//! optional workflow-actor fallback. The resulting [`ProfileSettings`] value
//! is constructed once at startup and passed explicitly to every component;
//! nothing reads configuration ambiently after this point.

use std::path::{Path, PathBuf};

use crate::{config::ProfileConfig, error::Error};

/// Branch assumed for raw-content asset URLs when none is configured.
const DEFAULT_BRANCH: &str = "Main";
/// Number of commit references rendered when no limit is configured.
const DEFAULT_COMMIT_LIMIT: usize = 5;
/// File name of the rendered document inside the project root.
const DEFAULT_OUTPUT_FILE: &str = "README.md";

/// Fully resolved runtime settings for one rendering run.
///
/// Optional fields are `None` when the configuration omitted them or supplied
/// a blank value; string fields carrying defaults are always populated.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct ProfileSettings
{
    /// GitHub account whose profile is rendered.
    pub username:         String,
    /// Name rendered as the document title.
    pub display_name:     String,
    /// Optional bio snippet rendered as a fenced code block.
    pub bio_code:         Option<String,>,
    /// Optional LinkedIn profile URL.
    pub linkedin_url:     Option<String,>,
    /// Optional externally hosted animated image URL.
    pub external_gif_url: Option<String,>,
    /// Optional repository-relative animated image path.
    pub gif_path:         Option<String,>,
    /// Branch used when building raw-content asset URLs.
    pub branch_name:      String,
    /// Maximum number of commit references rendered.
    pub commit_limit:     usize,
    /// Directory containing the configuration file and local assets.
    pub project_root:     PathBuf,
    /// Destination path of the rendered document.
    pub output_path:      PathBuf,
}

impl ProfileSettings
{
    /// Resolves runtime settings from a raw configuration document.
    ///
    /// The username is taken from the configuration when present, falling
    /// back to the workflow actor. The project root is the configuration
    /// file's parent directory; the output path defaults to `README.md`
    /// inside it unless an override is supplied.
    ///
    /// # Arguments
    ///
    /// * `config` - Raw configuration document
    /// * `config_path` - Location the configuration document was loaded from
    /// * `actor` - Optional username fallback from the environment
    /// * `output` - Optional output path override
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when no username can
    /// be resolved from either source.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    ///
    /// use prr::{ProfileConfig, ProfileSettings};
    ///
    /// let config = ProfileConfig {
    ///     github_username: Some("octocat".to_owned(),),
    ///     ..ProfileConfig::default()
    /// };
    /// let settings = ProfileSettings::resolve(&config, Path::new("config.yml",), None, None,)
    ///     .expect("resolvable settings",);
    /// assert_eq!(settings.username, "octocat");
    /// assert_eq!(settings.branch_name, "Main");
    /// assert_eq!(settings.commit_limit, 5);
    /// ```
    pub fn resolve(
        config: &ProfileConfig,
        config_path: &Path,
        actor: Option<&str,>,
        output: Option<&Path,>,
    ) -> Result<Self, Error,>
    {
        let username = normalized(config.github_username.as_deref(),)
            .or_else(|| normalized(actor,),)
            .ok_or_else(|| {
                Error::validation("no github_username in config and GITHUB_ACTOR not set",)
            },)?;

        let display_name =
            normalized(config.display_name.as_deref(),).unwrap_or_else(|| username.clone(),);
        let branch_name = normalized(config.branch_name.as_deref(),)
            .unwrap_or_else(|| DEFAULT_BRANCH.to_owned(),);
        let commit_limit = config.commit_limit.unwrap_or(DEFAULT_COMMIT_LIMIT,);

        let project_root = project_root_of(config_path,);
        let output_path = match output {
            Some(path,) => path.to_path_buf(),
            None => project_root.join(DEFAULT_OUTPUT_FILE,),
        };

        Ok(Self {
            username,
            display_name,
            bio_code: normalized(config.bio_code.as_deref(),),
            linkedin_url: normalized(config.linkedin_url.as_deref(),),
            external_gif_url: normalized(config.external_gif_url.as_deref(),),
            gif_path: normalized(config.gif_path.as_deref(),),
            branch_name,
            commit_limit,
            project_root,
            output_path,
        },)
    }
}

/// Derives the project root from the configuration file location.
///
/// A bare file name has an empty parent; the current directory is used in
/// that case so relative asset paths keep working.
fn project_root_of(config_path: &Path,) -> PathBuf
{
    match config_path.parent() {
        Some(parent,) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from(".",),
    }
}

fn normalized(value: Option<&str,>,) -> Option<String,>
{
    value.map(str::trim,).filter(|candidate| !candidate.is_empty(),).map(str::to_owned,)
}
