use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TRUDY_SEARCH_DATA_DIR";

const APP_DIR_NAME: &str = "trudy-search";

/// Get the directory holding recent searches and the TUI log
///
/// Resolution order: explicit override, `TRUDY_SEARCH_DATA_DIR`, then the
/// platform data directory (`~/.local/share/trudy-search` on Linux).
pub fn get_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    if let Ok(dir) = env::var(DATA_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
