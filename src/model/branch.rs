use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A branch (physical location) the user can work against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub manager: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
    pub created_at: DateTime<Utc>,
}

/// Opening hours in "HH:MM" form, e.g. "08:00"–"18:00"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

/// Records which branch a user is currently working against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchSelection {
    pub user_id: String,
    pub branch_id: String,
    pub selected_at: DateTime<Utc>,
}
