//! Scaffold a `site.toml` holding the built-in table.

use crate::config::{CONFIG_FILE, ConfigError, SiteConfig};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the built-in table to `<dir>/site.toml`.
///
/// Refuses to overwrite an existing file. Creates `dir` if needed.
pub fn write_default_config(dir: &Path) -> Result<PathBuf, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path));
    }

    fs::create_dir_all(dir).map_err(|err| ConfigError::Io(dir.to_path_buf(), err))?;

    let content = SiteConfig::default().to_toml()?;
    fs::write(&path, content).map_err(|err| ConfigError::Io(path.clone(), err))?;

    Ok(path)
}
