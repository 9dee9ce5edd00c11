//! Credential storage in the per-user config file.
//!
//! The file lives at `~/.commitgen/config` and holds `KEY=VALUE` lines. The
//! only key written is [`API_KEY_VAR`].

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable and config key holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const CONFIG_DIR_NAME: &str = ".commitgen";
const CONFIG_FILE_NAME: &str = "config";

/// Directory holding the config file.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Full path of the config file.
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Write `OPENAI_API_KEY=<key>` to `path`, replacing any previous contents.
///
/// Parent directories are created as needed. The file is written to a temp
/// file in the same directory and then renamed into place.
pub fn save_api_key(path: &Path, key: &str) -> Result<(), ConfigError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::EmptyApiKey);
    }

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(ConfigError::Write)?;

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(ConfigError::Write)?;
    writeln!(file, "{API_KEY_VAR}={key}").map_err(ConfigError::Write)?;
    file.flush().map_err(ConfigError::Write)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o600))
            .map_err(ConfigError::Write)?;
    }

    file.persist(path).map_err(|e| ConfigError::Write(e.error))?;
    debug!("Wrote config to {}", path.display());

    Ok(())
}

/// Parse `KEY=VALUE` lines from `path`.
///
/// A missing file yields an empty map. Blank lines, `#` comments, and lines
/// without `=` are skipped; keys and values are trimmed.
pub fn load_config(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(ConfigError::Read(e)),
    };

    Ok(parse_config(&content))
}

fn parse_config(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Resolve the API key from the environment, then the config file.
pub fn ensure_api_key() -> Result<String, ConfigError> {
    resolve_api_key(config_file)
}

/// Like [`ensure_api_key`] but reads the given config file.
pub fn ensure_api_key_in(path: &Path) -> Result<String, ConfigError> {
    resolve_api_key(|| Ok(path.to_path_buf()))
}

/// The config path is only resolved when the environment has no key.
fn resolve_api_key(
    path: impl FnOnce() -> Result<PathBuf, ConfigError>,
) -> Result<String, ConfigError> {
    if let Some(key) = api_key_from_env() {
        return Ok(key);
    }

    load_config(&path()?)?
        .remove(API_KEY_VAR)
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey)
}

fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty())
}
