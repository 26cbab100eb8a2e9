use serde::{Deserialize, Serialize};

/// The locally identified user. Absence of a profile gates the whole main
/// content area behind the registration modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub role: String,
    pub email: String,
}

impl RegisterRequest {
    /// Local pre-flight check — the backend validates again on its side.
    /// Returns the first problem found, or None if submittable.
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name is required");
        }
        if self.email.trim().is_empty() {
            return Some("email is required");
        }
        if !self.email.contains('@') {
            return Some("email must contain @");
        }
        if self.role.trim().is_empty() {
            return Some("role is required");
        }
        None
    }
}
