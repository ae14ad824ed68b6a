use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Defaults for `sug convert`, read from `sug.toml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SugConfig {
    /// Output directory for generated Markdown
    pub output: Option<String>,
    /// Language forced for every input
    pub language: Option<String>,
    /// Omit code blocks from the output
    pub doc_only: Option<bool>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("sug.toml")
}

/// Load the config at `path` (or `./sug.toml`). A missing file is `Ok(None)`.
pub fn load_config(path: Option<&Path>) -> Result<Option<SugConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SugConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.as_os_str().is_empty() && !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
    }
    Ok(())
}
