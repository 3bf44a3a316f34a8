//! Page identifiers and lookup of their built-in metadata.

use crate::config::ConfigError;
use crate::consts::{BLOG, HOME, Metadata, PROJECTS, WORK};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A logical page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Blog,
    Work,
    Projects,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Blog, Page::Work, Page::Projects];

    /// Lowercase identifier, also the TOML table name under `[pages]`.
    pub const fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Blog => "blog",
            Page::Work => "work",
            Page::Projects => "projects",
        }
    }

    /// Built-in metadata for this page.
    pub const fn metadata(self) -> &'static Metadata {
        match self {
            Page::Home => &HOME,
            Page::Blog => &BLOG,
            Page::Work => &WORK,
            Page::Projects => &PROJECTS,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownPage(s.to_owned()))
    }
}
