use serde::{Deserialize, Serialize};

/// Open work per team member on the current branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberLoad {
    pub user_id: String,
    pub user_name: String,
    pub open_tasks: usize,
    pub in_progress: usize,
    pub estimated_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadSnapshot {
    pub branch_id: String,
    pub members: Vec<MemberLoad>,
    pub unassigned_tasks: usize,
}
