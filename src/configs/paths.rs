use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};

const TALLY_CONFIG_NAME: &str = "tally.toml";
const TALLY_APP_NAME: &str = "tally";
const ANSWERS_DIR_NAME: &str = "answers";

/// Expands a path with tilde (~) and environment variable substitution
///
/// - `~` → user's home directory
/// - `~/path` → path relative to home directory
/// - `$VAR/path` and `${VAR}/path` → expands environment variable VAR
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use tally::configs::expand_path;
///
/// # fn main() -> anyhow::Result<()> {
/// let expanded = expand_path(PathBuf::from("~/forms/survey.toml"))?;
/// // Returns: /Users/username/forms/survey.toml
/// # Ok(())
/// # }
/// ```
pub fn expand_path(path: PathBuf) -> Result<PathBuf> {
    let path_str = path
        .to_str()
        .context("Path contains invalid UTF-8 characters")?;

    let expanded = shellexpand::full(path_str).context("Failed to expand path")?;

    Ok(PathBuf::from(expanded.as_ref()))
}

/// Returns `$XDG_CONFIG_HOME/tally`, or `~/.config/tally` when the variable
/// is unset, empty or relative.
pub fn get_default_config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns `$XDG_DATA_HOME/tally`, or `~/.local/share/tally` when the
/// variable is unset, empty or relative.
pub fn get_default_data_dir() -> Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_dir(variable: &str, fallback: &[&str]) -> Result<PathBuf> {
    if let Ok(xdg_dir) = env::var(variable)
        && !xdg_dir.is_empty()
    {
        let path = PathBuf::from(&xdg_dir);
        // XDG: relative paths must be ignored
        if path.is_absolute() {
            return Ok(path.join(TALLY_APP_NAME));
        }
    }

    dirs::home_dir()
        .map(|home| {
            fallback
                .iter()
                .fold(home, |dir, segment| dir.join(segment))
                .join(TALLY_APP_NAME)
        })
        .context("Failed to determine home directory")
}

/// Finds the config file using the following search order:
///
/// 1. CLI argument path (if provided) - returns error if specified but doesn't exist
/// 2. XDG config directory: `~/.config/tally/tally.toml`
/// 3. Current directory: `./tally.toml`
///
/// Returns `Ok(None)` when nothing was found via auto-discovery.
pub fn find_config_file(cli_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path));
        } else {
            return Err(anyhow!("Specified config file does not exist: {:?}", path));
        }
    }

    let xdg_config_path = get_default_config_dir()?.join(TALLY_CONFIG_NAME);
    if xdg_config_path.exists() {
        return Ok(Some(xdg_config_path));
    }

    let local_config_path = PathBuf::from(".").join(TALLY_CONFIG_NAME);
    if local_config_path.exists() {
        return Ok(Some(local_config_path));
    }

    Ok(None)
}

/// Default answers location for a form: `<data dir>/answers/<form stem>.json`
pub fn default_answers_path(form_path: &Path) -> Result<PathBuf> {
    let stem = form_path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Could not derive a form name from {:?}", form_path))?;

    Ok(get_default_data_dir()?
        .join(ANSWERS_DIR_NAME)
        .join(format!("{}.json", stem)))
}
