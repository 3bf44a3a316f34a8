//! `[site]` section configuration.
//!
//! Contains site identity and homepage display limits.

use super::defaults;
use crate::collection::Collection;
use crate::consts::Site;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in site.toml - identity and homepage limits.
///
/// # Example
/// ```toml
/// [site]
/// name = "Vegard Bjørsvik"
/// email = "hey@vegar.dev"
/// num_posts_on_homepage = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Owner name shown in header, footer and meta tags.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// Contact address.
    #[serde(default = "defaults::site::email")]
    #[educe(Default = defaults::site::email())]
    pub email: String,

    #[serde(default = "defaults::site::num_posts_on_homepage")]
    #[educe(Default = defaults::site::num_posts_on_homepage())]
    pub num_posts_on_homepage: usize,

    #[serde(default = "defaults::site::num_works_on_homepage")]
    #[educe(Default = defaults::site::num_works_on_homepage())]
    pub num_works_on_homepage: usize,

    #[serde(default = "defaults::site::num_projects_on_homepage")]
    #[educe(Default = defaults::site::num_projects_on_homepage())]
    pub num_projects_on_homepage: usize,
}

impl SiteSection {
    pub fn homepage_limit(&self, collection: Collection) -> usize {
        match collection {
            Collection::Posts => self.num_posts_on_homepage,
            Collection::Works => self.num_works_on_homepage,
            Collection::Projects => self.num_projects_on_homepage,
        }
    }
}

impl From<&Site> for SiteSection {
    fn from(site: &Site) -> Self {
        Self {
            name: site.name.to_owned(),
            email: site.email.to_owned(),
            num_posts_on_homepage: site.num_posts_on_homepage,
            num_works_on_homepage: site.num_works_on_homepage,
            num_projects_on_homepage: site.num_projects_on_homepage,
        }
    }
}
