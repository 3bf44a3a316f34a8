//! `[pages]` section configuration.
//!
//! One `[pages.<page>]` table per page. Missing tables and missing keys fall
//! back to the built-in metadata for that page.

use super::defaults;
use crate::consts::Metadata;
use crate::page::Page;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Title and description of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
}

impl From<&Metadata> for PageConfig {
    fn from(meta: &Metadata) -> Self {
        Self {
            title: meta.title.to_owned(),
            description: meta.description.to_owned(),
        }
    }
}

impl From<Page> for PageConfig {
    fn from(page: Page) -> Self {
        Self::from(page.metadata())
    }
}

/// `[pages]` section in site.toml.
///
/// # Example
/// ```toml
/// [pages.blog]
/// title = "Writing"
///
/// [pages.projects]
/// description = "Things I have built."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(from = "RawPages")]
pub struct PagesConfig {
    #[educe(Default = defaults::pages::home())]
    pub home: PageConfig,

    #[educe(Default = defaults::pages::blog())]
    pub blog: PageConfig,

    #[educe(Default = defaults::pages::work())]
    pub work: PageConfig,

    #[educe(Default = defaults::pages::projects())]
    pub projects: PageConfig,
}

impl PagesConfig {
    pub fn get(&self, page: Page) -> &PageConfig {
        match page {
            Page::Home => &self.home,
            Page::Blog => &self.blog,
            Page::Work => &self.work,
            Page::Projects => &self.projects,
        }
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// `[pages.<page>]` as written, every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPage {
    title: Option<String>,
    description: Option<String>,
}

impl RawPage {
    fn merge(self, page: Page) -> PageConfig {
        let builtin = page.metadata();
        PageConfig {
            title: self.title.unwrap_or_else(|| builtin.title.to_owned()),
            description: self
                .description
                .unwrap_or_else(|| builtin.description.to_owned()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPages {
    #[serde(default)]
    home: RawPage,
    #[serde(default)]
    blog: RawPage,
    #[serde(default)]
    work: RawPage,
    #[serde(default)]
    projects: RawPage,
}

impl From<RawPages> for PagesConfig {
    fn from(raw: RawPages) -> Self {
        Self {
            home: raw.home.merge(Page::Home),
            blog: raw.blog.merge(Page::Blog),
            work: raw.work.merge(Page::Work),
            projects: raw.projects.merge(Page::Projects),
        }
    }
}
