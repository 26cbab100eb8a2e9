use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Cycle status: pending → in-progress → done → pending
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// A task as held by the backend. The shell never constructs one of these
/// itself — they only arrive through the command bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub branch_id: String,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Server-side filter for task listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<TaskStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority: Vec<TaskPriority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub branch_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Partial update: `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl TaskFilter {
    /// Whether a task passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(ref branch) = self.branch_id
            && &task.branch_id != branch
        {
            return false;
        }
        if let Some(ref who) = self.assigned_to
            && task.assigned_to.as_ref() != Some(who)
        {
            return false;
        }
        if !self.status.is_empty() && !self.status.contains(&task.status) {
            return false;
        }
        if !self.priority.is_empty() {
            match task.priority {
                Some(p) if self.priority.contains(&p) => {}
                _ => return false,
            }
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| task.tags.contains(t)) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn sample_task() -> Task {
        Task {
            id: "T-1".into(),
            branch_id: "north".into(),
            created_by: "ana".into(),
            assigned_to: Some("ana".into()),
            title: "Restock shelves".into(),
            description: None,
            status: TaskStatus::Pending,
            priority: Some(TaskPriority::High),
            due_date: None,
            estimated_hours: Some(2.0),
            actual_hours: None,
            tags: vec!["stock".into()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn status_cycles_through_all_states() {
        assert_eq!(TaskStatus::Pending.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::Pending);
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(TaskFilter::default().matches(&sample_task()));
    }

    #[test]
    fn filter_by_branch_and_status() {
        let task = sample_task();
        let mut filter = TaskFilter {
            branch_id: Some("north".into()),
            status: vec![TaskStatus::Pending],
            ..Default::default()
        };
        assert!(filter.matches(&task));
        filter.branch_id = Some("south".into());
        assert!(!filter.matches(&task));
    }

    #[test]
    fn filter_priority_rejects_unset_priority() {
        let mut task = sample_task();
        task.priority = None;
        let filter = TaskFilter {
            priority: vec![TaskPriority::High],
            ..Default::default()
        };
        assert!(!filter.matches(&task));
    }

    #[test]
    fn task_round_trips_through_json() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.status, task.status);
        assert_eq!(back.tags, task.tags);
    }
}
