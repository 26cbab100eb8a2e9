use std::fs;
use std::path::Path;

use crate::model::SessionProfile;

use super::paths::{StoreError, ensure_dir};

/// Read profile.json. Absent or malformed both mean "no profile" — the
/// caller routes to the registration flow, never to an error.
pub fn load_profile(dir: &Path) -> Option<SessionProfile> {
    let path = dir.join("profile.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write profile.json.
pub fn save_profile(dir: &Path, profile: &SessionProfile) -> Result<(), StoreError> {
    ensure_dir(dir)?;
    let path = dir.join("profile.json");
    let content = serde_json::to_string_pretty(profile).map_err(|e| StoreError::EncodeError {
        what: "profile",
        source: e,
    })?;
    fs::write(&path, content).map_err(|e| StoreError::WriteError { path, source: e })
}

/// Delete profile.json if present.
pub fn clear_profile(dir: &Path) -> Result<bool, StoreError> {
    let path = dir.join("profile.json");
    match fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StoreError::WriteError { path, source: e }),
    }
}
