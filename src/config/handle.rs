//! Process-wide config, set once at startup.
//!
//! Readers that run before [`init_config`] see the built-in table. Once a
//! value is observed it never changes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::config::{cfg, init_config};
//!
//! init_config(SiteConfig::load(path)?)?;
//! let title = &cfg().pages.home.title;
//! ```

use super::{ConfigError, SiteConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the process-wide config.
///
/// Falls back to (and pins) the built-in table if nothing was initialized.
#[inline]
pub fn cfg() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

/// Initialize global config (called once at startup).
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInitialized`] if a config was already
/// stored, or if [`cfg`] already pinned the default.
pub fn init_config(config: SiteConfig) -> Result<(), ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}
