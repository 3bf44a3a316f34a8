//! Content collections shown on the homepage and their display limits.
//!
//! The limits live on [`Site`]; this module names the collections and reads
//! the matching count.
//!
//! ```
//! use sitemeta::{Collection, SITE};
//!
//! let posts = ["a", "b", "c", "d", "e"];
//! let shown: Vec<_> = SITE.take_for_homepage(Collection::Posts, posts).collect();
//! assert_eq!(shown, ["a", "b", "c"]);
//! ```

use crate::config::ConfigError;
use crate::consts::Site;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A content list with a homepage limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Posts,
    Works,
    Projects,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Posts, Collection::Works, Collection::Projects];

    pub const fn slug(self) -> &'static str {
        match self {
            Collection::Posts => "posts",
            Collection::Works => "works",
            Collection::Projects => "projects",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Collection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Collection::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownCollection(s.to_owned()))
    }
}

impl Site {
    /// How many items of `collection` the homepage shows.
    pub const fn homepage_limit(&self, collection: Collection) -> usize {
        match collection {
            Collection::Posts => self.num_posts_on_homepage,
            Collection::Works => self.num_works_on_homepage,
            Collection::Projects => self.num_projects_on_homepage,
        }
    }

    /// Yield at most [`homepage_limit`](Self::homepage_limit) items.
    pub fn take_for_homepage<I>(
        &self,
        collection: Collection,
        items: I,
    ) -> std::iter::Take<I::IntoIter>
    where
        I: IntoIterator,
    {
        items.into_iter().take(self.homepage_limit(collection))
    }
}
