//! Configuration document types for the profile README renderer.
//!
//! The types in this module mirror the structure of the `config.yml` document
//! supplied by the profile owner. Every field is optional at this layer so
//! partially filled documents still deserialize; resolution of defaults and
//! required values happens in [`crate::settings`].

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Raw profile configuration document.
///
/// # Examples
///
/// ```
/// use prr::ProfileConfig;
///
/// let yaml = r#"
/// github_username: octocat
/// display_name: Mona Lisa
/// branch_name: Main
/// "#;
/// let config: ProfileConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert_eq!(config.github_username.as_deref(), Some("octocat"));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct ProfileConfig
{
    /// GitHub account whose repositories and activity are rendered.
    #[serde(default, alias = "username")]
    pub github_username: Option<String,>,

    /// Optional display name used for the document title.
    #[serde(default)]
    pub display_name: Option<String,>,

    /// Optional one-line bio rendered as a fenced code block.
    #[serde(default)]
    pub bio_code: Option<String,>,

    /// Optional LinkedIn profile URL rendered as a badge link.
    #[serde(default)]
    pub linkedin_url: Option<String,>,

    /// Optional externally hosted animated image URL.
    #[serde(default)]
    pub external_gif_url: Option<String,>,

    /// Optional repository-relative path to a committed animated image.
    #[serde(default)]
    pub gif_path: Option<String,>,

    /// Optional branch name used when building raw-content asset URLs.
    #[serde(default, alias = "branch", alias = "branch-name", alias = "branchName")]
    pub branch_name: Option<String,>,

    /// Optional cap on rendered commit references, constrained to `1..`.
    #[serde(default, alias = "limit", deserialize_with = "deserialize_optional_commit_limit")]
    pub commit_limit: Option<usize,>,
}

/// Loads the profile configuration from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read or the YAML cannot be
/// deserialized.
pub fn load_config(path: &Path,) -> Result<ProfileConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses the profile configuration from the provided YAML document string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the configuration contents.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded.
///
/// # Examples
///
/// ```
/// use prr::parse_config;
///
/// let config = parse_config("github_username: octocat",).expect("valid configuration",);
/// assert_eq!(config.github_username.as_deref(), Some("octocat"));
/// assert!(config.display_name.is_none());
/// ```
pub fn parse_config(contents: &str,) -> Result<ProfileConfig, Error,>
{
    let config: ProfileConfig = serde_yaml::from_str(contents,)?;
    Ok(config,)
}

fn deserialize_optional_commit_limit<'de, D,>(deserializer: D,) -> Result<Option<usize,>, D::Error,>
where
    D: serde::Deserializer<'de,>,
{
    let value: Option<usize,> = Option::deserialize(deserializer,)?;
    if let Some(limit,) = value
        && limit == 0
    {
        return Err(serde::de::Error::custom("commit_limit must be greater than zero",),);
    }
    Ok(value,)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::tempdir;

    use super::{load_config, parse_config};
    use crate::error::Error;

    #[test]
    fn parse_config_reads_every_recognized_key()
    {
        let yaml = r#"
github_username: octocat
display_name: Mona Lisa
bio_code: 'std::string bio = "I build things.";'
linkedin_url: https://www.linkedin.com/in/octocat
external_gif_url: https://example.com/coder.gif
gif_path: assets/coder.gif
branch_name: trunk
commit_limit: 3
"#;

        let config = parse_config(yaml,).expect("failed to parse configuration",);
        assert_eq!(config.github_username.as_deref(), Some("octocat"));
        assert_eq!(config.display_name.as_deref(), Some("Mona Lisa"));
        assert_eq!(config.bio_code.as_deref(), Some("std::string bio = \"I build things.\";"));
        assert_eq!(config.linkedin_url.as_deref(), Some("https://www.linkedin.com/in/octocat"));
        assert_eq!(config.external_gif_url.as_deref(), Some("https://example.com/coder.gif"));
        assert_eq!(config.gif_path.as_deref(), Some("assets/coder.gif"));
        assert_eq!(config.branch_name.as_deref(), Some("trunk"));
        assert_eq!(config.commit_limit, Some(3));
    }

    #[test]
    fn parse_config_defaults_missing_keys_to_none()
    {
        let config = parse_config("github_username: octocat",).expect("failed to parse",);
        assert!(config.display_name.is_none());
        assert!(config.bio_code.is_none());
        assert!(config.linkedin_url.is_none());
        assert!(config.external_gif_url.is_none());
        assert!(config.gif_path.is_none());
        assert!(config.branch_name.is_none());
        assert!(config.commit_limit.is_none());
    }

    #[test]
    fn parse_config_tolerates_unknown_keys()
    {
        let yaml = r"
github_username: octocat
future_option: enabled
";
        let config = parse_config(yaml,).expect("unknown keys should be ignored",);
        assert_eq!(config.github_username.as_deref(), Some("octocat"));
    }

    #[test]
    fn parse_config_accepts_branch_alias()
    {
        let config = parse_config("branch: develop",).expect("alias should be accepted",);
        assert_eq!(config.branch_name.as_deref(), Some("develop"));
    }

    #[test]
    fn parse_config_accepts_limit_alias()
    {
        let config = parse_config("limit: 7",).expect("alias should be accepted",);
        assert_eq!(config.commit_limit, Some(7));
    }

    #[test]
    fn parse_config_rejects_zero_commit_limit()
    {
        let result = parse_config("commit_limit: 0",);
        match result {
            Err(Error::Parse {
                ..
            },) => {}
            other => panic!("expected parse error for zero commit_limit, got {other:?}"),
        }
    }

    #[test]
    fn parse_config_rejects_invalid_yaml()
    {
        let result = parse_config("github_username: [unclosed",);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn load_config_reads_document_from_disk()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("config.yml",);
        fs::write(&config_path, "github_username: octocat\n",).expect("failed to write config",);

        let config = load_config(&config_path,).expect("failed to load configuration",);
        assert_eq!(config.github_username.as_deref(), Some("octocat"));
    }

    #[test]
    fn load_config_missing_file_maps_to_io_error()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("missing.yml",);

        let result = load_config(&config_path,);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
