//! Site configuration for `tola.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[posts]`   | Post prefix, published name, archives, cutoff |
//! | `[extra]`   | User-defined custom fields                   |
//!
//! # Example
//!
//! ```toml
//! [posts]
//! path_prefix = "/news"
//! archive_template = "/news/_archive"
//! archive_path = "/news"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

pub mod defaults;
mod error;
mod posts;

pub use error::ConfigError;
pub use posts::PostsConfig;

use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Post classification settings
    #[serde(default)]
    pub posts: PostsConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.posts.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.posts.assign_to, "posts");
        assert_eq!(config.posts.path_prefix, "");
        assert!(config.posts.subdirs);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_posts_section() {
        let config = SiteConfig::from_str(
            r#"
            [posts]
            path_prefix = "/news"
            assign_to = "news"
            archive_template = "/news/_archive"
            archive_path = "/news"
            ignore_older_than = "2010-06-01"
            subdirs = false
            "#,
        )
        .unwrap();

        let posts = &config.posts;
        assert_eq!(posts.path_prefix, "/news");
        assert_eq!(posts.assign_to, "news");
        assert_eq!(posts.archive_template.as_deref(), Some("/news/_archive"));
        assert_eq!(posts.archive_path.as_deref(), Some("/news"));
        assert_eq!(posts.ignore_older_than.as_deref(), Some("2010-06-01"));
        assert!(!posts.subdirs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = SiteConfig::from_str("[posts]\npath_prefix = \"/blog\"").unwrap();
        assert_eq!(config.posts.path_prefix, "/blog");
        assert_eq!(config.posts.assign_to, "posts");
        assert!(config.posts.subdirs);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = SiteConfig::from_str("[posts]\nprefix = \"/news\"");
        assert!(result.is_err());

        let result = SiteConfig::from_str("[unknown]\nkey = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_fields() {
        let config = SiteConfig::from_str("[extra]\nanalytics_id = \"UA-1\"").unwrap();
        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-1")
        );
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[posts]\nassign_to = \"entries\"").unwrap();

        let config = SiteConfig::from_path(file.path()).unwrap();
        assert_eq!(config.posts.assign_to, "entries");
        assert!(config.config_path.is_absolute());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/definitely/not/here/tola.toml")).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(config_err, ConfigError::Io(..)));
    }

    #[test]
    fn test_validate_propagates_section_errors() {
        let config = SiteConfig::from_str("[posts]\nignore_older_than = \"soon\"").unwrap();
        assert!(config.validate().is_err());
    }
}
