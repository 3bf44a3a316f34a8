//! Site identity and per-page metadata for a personal website and blog.
//!
//! The built-in table lives in [`consts`] and is what templates read by
//! default. [`config::SiteConfig`] mirrors it as owned data and can be
//! loaded from `site.toml` to override individual fields.
//!
//! ```
//! use sitemeta::{Page, SITE, HOME, WORK};
//!
//! assert_eq!(HOME.title, "Home");
//! assert_eq!(SITE.num_posts_on_homepage, 3);
//! assert_eq!(Page::Work.metadata(), &WORK);
//! ```

pub mod collection;
pub mod config;
pub mod consts;
pub mod init;
pub mod page;
pub mod utils;

pub use collection::Collection;
pub use consts::{BLOG, HOME, Metadata, PROJECTS, SITE, Site, WORK};
pub use page::Page;
