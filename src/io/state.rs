use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which view was showing ("menu", "inbox", ...)
    pub view: String,
    /// Selected branch ID, if any
    #[serde(default)]
    pub selected_branch: Option<String>,
    /// Palette name chosen in settings
    #[serde(default)]
    pub theme: Option<String>,
}

/// Read state.json from the data directory
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let path = dir.join("state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write state.json to the data directory
pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = dir.join("state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn state_round_trips() {
        let dir = TempDir::new().unwrap();
        let state = UiState {
            view: "inbox".into(),
            selected_branch: Some("north".into()),
            theme: Some("darkPurple".into()),
        };
        write_ui_state(dir.path(), &state).unwrap();
        let back = read_ui_state(dir.path()).unwrap();
        assert_eq!(back.view, "inbox");
        assert_eq!(back.selected_branch.as_deref(), Some("north"));
        assert_eq!(back.theme.as_deref(), Some("darkPurple"));
    }

    #[test]
    fn missing_state_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }
}
