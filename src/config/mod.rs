//! Site configuration management for `site.toml`.
//!
//! The built-in table in [`crate::consts`] is the default for every field, so
//! a missing or empty `site.toml` yields exactly the compiled-in values.
//!
//! # Sections
//!
//! | Section             | Purpose                                   |
//! |---------------------|-------------------------------------------|
//! | `[site]`            | Owner name, contact email, homepage limits |
//! | `[pages.<page>]`    | Title and description per page            |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Vegard Bjørsvik"
//! email = "hey@vegar.dev"
//! num_posts_on_homepage = 3
//!
//! [pages.work]
//! title = "Work"
//! description = "Where I have worked and what I have done."
//! ```

pub mod defaults;
mod error;
mod handle;
mod pages;
mod site;

pub use error::ConfigError;
pub use handle::{cfg, init_config};
pub use pages::{PageConfig, PagesConfig};
pub use site::SiteSection;

use crate::{collection::Collection, consts::is_valid_email, page::Page};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity and homepage limits
    #[serde(default)]
    pub site: SiteSection,

    /// Per-page title and description
    #[serde(default)]
    pub pages: PagesConfig,
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    /// Parse configuration from TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

impl SiteConfig {
    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        content.parse()
    }

    /// Load and validate the effective configuration.
    ///
    /// Without a path the built-in table is used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Metadata for one page.
    pub fn page(&self, page: Page) -> &PageConfig {
        self.pages.get(page)
    }

    /// How many items of `collection` the homepage shows.
    pub fn homepage_limit(&self, collection: Collection) -> usize {
        self.site.homepage_limit(collection)
    }

    /// Serialize as pretty TOML, the format `site.toml` is read in.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate every field, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.site.name.trim().is_empty() {
            problems.push("[site.name] must not be empty".to_owned());
        }
        if !is_valid_email(self.site.email.trim()) {
            problems.push(format!(
                "[site.email] `{}` is not a valid email address",
                self.site.email
            ));
        }

        for page in Page::ALL {
            let meta = self.page(page);
            if meta.title.trim().is_empty() {
                problems.push(format!("[pages.{page}.title] must not be empty"));
            }
            if meta.description.trim().is_empty() {
                problems.push(format!("[pages.{page}.description] must not be empty"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HOME, PROJECTS, SITE, WORK};
    use std::path::PathBuf;

    #[test]
    fn test_default_matches_builtin_table() {
        let config = SiteConfig::default();

        assert_eq!(config.site, SiteSection::from(&SITE));
        assert_eq!(config.page(Page::Home).title, HOME.title);
        assert_eq!(config.page(Page::Work).description, WORK.description);
        assert_eq!(config.page(Page::Projects).description, PROJECTS.description);
        assert_eq!(config.homepage_limit(Collection::Posts), 3);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_str_empty() {
        let config: SiteConfig = "".parse().unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [site
            name = "Me"
        "#;
        let result = invalid_config.parse::<SiteConfig>();

        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [site]
            name = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [site]
            name = "Alice"
            email = "alice@example.com"
            num_posts_on_homepage = 6
            num_works_on_homepage = 3
            num_projects_on_homepage = 4

            [pages.home]
            title = "Start"
            description = "Alice's corner of the web."

            [pages.blog]
            title = "Notes"
            description = "Things I wrote down."

            [pages.work]
            title = "CV"
            description = "Jobs."

            [pages.projects]
            title = "Code"
            description = "Side projects."
        "#;
        let config: SiteConfig = config.parse().unwrap();

        assert_eq!(config.site.name, "Alice");
        assert_eq!(config.homepage_limit(Collection::Projects), 4);
        assert_eq!(config.page(Page::Home).title, "Start");
        assert_eq!(config.page(Page::Blog).description, "Things I wrote down.");
        assert_eq!(config.page(Page::Work).title, "CV");
        assert_eq!(config.page(Page::Projects).title, "Code");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let config = r#"
            [site]
            name = "  "
            email = "not-an-email"

            [pages.blog]
            title = ""

            [pages.projects]
            description = " "
        "#;
        let config: SiteConfig = config.parse().unwrap();

        let err = config.validate().unwrap_err();
        let ConfigError::Validation(message) = &err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(message.contains("[site.name]"));
        assert!(message.contains("[site.email]"));
        assert!(message.contains("not-an-email"));
        assert!(message.contains("[pages.blog.title]"));
        assert!(message.contains("[pages.projects.description]"));
        assert!(!message.contains("[pages.home"));
        assert!(!message.contains("[pages.work"));
    }

    #[test]
    fn test_validate_accepts_zero_counts() {
        let config = r#"
            [site]
            num_posts_on_homepage = 0
            num_works_on_homepage = 0
            num_projects_on_homepage = 0
        "#;
        let config: SiteConfig = config.parse().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_toml_parses_back() {
        let config = SiteConfig::default();
        let content = config.to_toml().unwrap();

        assert!(content.contains("[site]"));
        assert!(content.contains("[pages.home]"));
        assert!(content.contains("hey@vegar.dev"));
        assert_eq!(content.parse::<SiteConfig>().unwrap(), config);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[pages.blog]\ntitle = \"Writing\"\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.page(Page::Blog).title, "Writing");
        assert_eq!(config.page(Page::Blog).description, crate::consts::BLOG.description);
    }

    #[test]
    fn test_from_path_missing_file() {
        let path = PathBuf::from("/definitely/not/here/site.toml");
        let err = SiteConfig::from_path(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Io(ref p, _) if p == &path));
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        assert_eq!(SiteConfig::load(None).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\nemail = \"nobody\"\n").unwrap();

        let err = SiteConfig::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
