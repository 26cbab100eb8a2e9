use std::path::PathBuf;

use directories::ProjectDirs;

/// Error type for local storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot determine a data directory for this platform")]
    NoDataDir,
    #[error("cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot serialize {what}: {source}")]
    EncodeError {
        what: &'static str,
        source: serde_json::Error,
    },
}

/// Resolve the directory holding config.toml, profile.json and state.json.
///
/// Precedence: explicit `-C` flag, then EVOLUX_DIR (used by the integration
/// tests), then the platform config directory.
pub fn data_dir(override_dir: Option<&str>) -> Result<PathBuf, StoreError> {
    if let Some(dir) = override_dir {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("EVOLUX_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("app", "Evolux", "evolux").ok_or(StoreError::NoDataDir)?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Create the data directory if missing.
pub fn ensure_dir(dir: &std::path::Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir).map_err(|e| StoreError::WriteError {
        path: dir.to_path_buf(),
        source: e,
    })
}
