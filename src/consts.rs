//! Built-in site identity and per-page metadata.
//!
//! These records are the single source of truth for the text the site
//! renders in page headers and SEO tags, and for how many items of each
//! collection the homepage shows.
//!
//! # Example
//!
//! ```
//! use sitemeta::{HOME, SITE, WORK};
//!
//! assert_eq!(HOME.title, "Home");
//! assert_eq!(SITE.num_posts_on_homepage, 3);
//! assert_eq!(WORK.description, "Where I have worked and what I have done.");
//! ```

use serde::Serialize;

// ============================================================================
// Record Types
// ============================================================================

/// Site-wide identity and homepage display limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Site {
    /// Owner name, shown in the header and footer.
    pub name: &'static str,

    /// Contact address.
    pub email: &'static str,

    /// Latest posts listed on the homepage.
    pub num_posts_on_homepage: usize,

    /// Work entries listed on the homepage.
    pub num_works_on_homepage: usize,

    /// Projects listed on the homepage.
    pub num_projects_on_homepage: usize,
}

/// Title and description of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Metadata {
    /// Short display title, also used in `<title>`.
    pub title: &'static str,

    /// One-sentence summary for the page header and `<meta name="description">`.
    pub description: &'static str,
}

impl Metadata {
    /// Both title and description are non-empty.
    pub const fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}

// ============================================================================
// Site Configuration Table
// ============================================================================

pub const SITE: Site = Site {
    name: "Vegard Bjørsvik",
    email: "hey@vegar.dev",
    num_posts_on_homepage: 3,
    num_works_on_homepage: 2,
    num_projects_on_homepage: 3,
};

pub const HOME: Metadata = Metadata {
    title: "Home",
    description: "A personal website and blog by Vegard Bjørsvik.",
};

pub const BLOG: Metadata = Metadata {
    title: "Blog",
    description: "A collection of articles on topics I find interesting.",
};

pub const WORK: Metadata = Metadata {
    title: "Work",
    description: "Where I have worked and what I have done.",
};

pub const PROJECTS: Metadata = Metadata {
    title: "Projects",
    description: "A collection of my projects, with links to repositories and demos.",
};

// A malformed record fails the build, not the render.
const _: () = {
    assert!(!SITE.name.is_empty(), "SITE.name is empty");
    assert!(is_valid_email(SITE.email), "SITE.email is not an email address");
    assert!(HOME.is_complete(), "HOME is missing a title or description");
    assert!(BLOG.is_complete(), "BLOG is missing a title or description");
    assert!(WORK.is_complete(), "WORK is missing a title or description");
    assert!(PROJECTS.is_complete(), "PROJECTS is missing a title or description");
};

// ============================================================================
// Validation Helpers
// ============================================================================

/// Check that `s` has the shape `local@domain.tld`.
///
/// Accepts exactly one `@`, a non-empty local part and a domain with at
/// least one inner `.`. Whitespace anywhere is rejected. This is a shape
/// check, not RFC 5322.
pub const fn is_valid_email(s: &str) -> bool {
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut at = None;
    let mut i = 0;
    while i < len {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            return false;
        }
        if b == b'@' {
            if at.is_some() {
                return false;
            }
            at = Some(i);
        }
        i += 1;
    }

    let at = match at {
        Some(at) => at,
        None => return false,
    };
    if at == 0 || at + 1 >= len {
        return false;
    }

    // Domain needs a dot that is neither its first nor its last byte.
    let domain_start = at + 1;
    let mut j = domain_start + 1;
    while j + 1 < len {
        if bytes[j] == b'.' {
            return true;
        }
        j += 1;
    }
    false
}

// ============================================================================
// Tests
// ============================================================================
