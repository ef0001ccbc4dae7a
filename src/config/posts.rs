//! `[posts]` section configuration.
//!
//! Controls where dated posts live, under which name the sorted list is
//! published, and whether day archives are generated.

use super::{defaults, error::ConfigError};
use crate::utils::date::parse_date;
use chrono::{DateTime, FixedOffset};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[posts]` section in tola.toml - post classification settings.
///
/// # Example
/// ```toml
/// [posts]
/// path_prefix = "/news"                 # Posts live under /news/
/// assign_to = "posts"                   # Published list name
/// archive_template = "/news/_archive"   # Template for day archives
/// archive_path = "/news"                # Output root for day archives
/// ignore_older_than = "2012-01-01"      # Drop anything older
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PostsConfig {
    /// Source path prefix posts must live under (no trailing slash).
    #[serde(default = "defaults::posts::path_prefix")]
    #[educe(Default = defaults::posts::path_prefix())]
    pub path_prefix: String,

    /// Name the sorted post list is published under.
    #[serde(default = "defaults::posts::assign_to")]
    #[educe(Default = defaults::posts::assign_to())]
    pub assign_to: String,

    /// Template page loaded once per archive day.
    pub archive_template: Option<String>,

    /// Output root for archive pages.
    pub archive_path: Option<String>,

    /// Posts dated before this are removed from the site.
    pub ignore_older_than: Option<String>,

    /// Allow nested directories between the prefix and the file name.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub subdirs: bool,
}

impl PostsConfig {
    /// Whether day archives should be generated.
    pub fn archive_enabled(&self) -> bool {
        self.archive_template.is_some() && self.archive_path.is_some()
    }

    /// Parsed `ignore_older_than` cutoff.
    pub fn cutoff(&self) -> Result<Option<DateTime<FixedOffset>>, ConfigError> {
        self.ignore_older_than
            .as_deref()
            .map(|raw| {
                parse_date(raw).ok_or_else(|| {
                    ConfigError::Posts(format!(
                        "`ignore_older_than` is not a valid date: {raw}"
                    ))
                })
            })
            .transpose()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assign_to.trim().is_empty() {
            return Err(ConfigError::Posts(
                "`assign_to` must not be empty".into(),
            ));
        }
        if self.path_prefix.ends_with('/') {
            return Err(ConfigError::Posts(format!(
                "`path_prefix` must not end with `/`: {}",
                self.path_prefix
            )));
        }
        self.cutoff()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_posts_config_default() {
        let config = PostsConfig::default();
        assert_eq!(config.path_prefix, "");
        assert_eq!(config.assign_to, "posts");
        assert!(config.archive_template.is_none());
        assert!(config.archive_path.is_none());
        assert!(config.ignore_older_than.is_none());
        assert!(config.subdirs);
        assert!(!config.archive_enabled());
    }

    #[test]
    fn test_archive_enabled_needs_both() {
        let mut config = PostsConfig {
            archive_template: Some("/news/_archive".into()),
            ..Default::default()
        };
        assert!(!config.archive_enabled());

        config.archive_path = Some("/news".into());
        assert!(config.archive_enabled());
    }

    #[test]
    fn test_cutoff_parsing() {
        let config = PostsConfig {
            ignore_older_than: Some("2012-01-01".into()),
            ..Default::default()
        };
        let cutoff = config.cutoff().unwrap().unwrap();
        assert_eq!(cutoff.year(), 2012);

        assert!(PostsConfig::default().cutoff().unwrap().is_none());
    }

    #[test]
    fn test_validate_rejects_bad_cutoff() {
        let config = PostsConfig {
            ignore_older_than: Some("last tuesday".into()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Posts(_)));
        assert_eq!(
            err.to_string(),
            "invalid [posts] section: `ignore_older_than` is not a valid date: last tuesday"
        );
    }

    #[test]
    fn test_validate_rejects_empty_assign_to() {
        let config = PostsConfig {
            assign_to: "  ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_trailing_slash() {
        let config = PostsConfig {
            path_prefix: "/news/".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
