//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization, and all of
//! them read from the built-in table in [`crate::consts`].

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    use crate::consts::SITE;

    pub fn name() -> String {
        SITE.name.into()
    }

    pub fn email() -> String {
        SITE.email.into()
    }

    pub fn num_posts_on_homepage() -> usize {
        SITE.num_posts_on_homepage
    }

    pub fn num_works_on_homepage() -> usize {
        SITE.num_works_on_homepage
    }

    pub fn num_projects_on_homepage() -> usize {
        SITE.num_projects_on_homepage
    }
}

// ============================================================================
// [pages] Section Defaults
// ============================================================================

pub mod pages {
    use super::super::PageConfig;
    use crate::page::Page;

    pub fn home() -> PageConfig {
        PageConfig::from(Page::Home)
    }

    pub fn blog() -> PageConfig {
        PageConfig::from(Page::Blog)
    }

    pub fn work() -> PageConfig {
        PageConfig::from(Page::Work)
    }

    pub fn projects() -> PageConfig {
        PageConfig::from(Page::Projects)
    }
}
