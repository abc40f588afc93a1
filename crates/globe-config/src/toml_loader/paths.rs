//! Where the config lives, and writing the first-run template there.

use globe_common::ConfigError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that points at a config file directly.
pub const CONFIG_PATH_ENV: &str = "VISITOR_GLOBE_CONFIG";

const APP_DIR: &str = "visitor-globe";
const FILE_NAME: &str = "config.toml";

/// `$VISITOR_GLOBE_CONFIG` if set, else `<config dir>/visitor-globe/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

fn resolve_config_path(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
///
/// Goes through a sibling temp file so a crash never leaves half a config.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, p: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", p.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_err("cannot create config directory", parent, e))?;
    }

    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, default_config_toml())
        .map_err(|e| io_err("cannot write", &tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err("cannot move default config to", path, e))?;

    info!(path = %path.display(), "Wrote default config");
    Ok(())
}
