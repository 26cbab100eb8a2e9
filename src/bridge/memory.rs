use std::cell::RefCell;

use chrono::{Duration, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use super::{BridgeError, CommandBridge};
use crate::model::{
    Branch, BranchSelection, CreateTaskRequest, DailyHours, MarkReadRequest, MemberLoad,
    MetricsSummary, Notification, NotificationKind, NotificationListResponse, ProductivityReport,
    RegisterRequest, SessionProfile, StatusBreakdown, Task, TaskFilter, TaskStatus,
    UpdateTaskRequest, WorkingHours, WorkloadSnapshot,
};

/// In-memory command bridge, seeded with sample data. This is the default
/// collaborator for local runs and the fixture for tests; it keeps the same
/// contract a networked backend would.
///
/// Interior mutability via RefCell: all calls happen on the event loop
/// thread, no borrow is held across a call boundary.
pub struct MemoryBridge {
    inner: RefCell<Inner>,
}

struct Inner {
    branches: Vec<Branch>,
    tasks: Vec<Task>,
    notifications: Vec<Notification>,
    selection: Option<BranchSelection>,
    next_task_seq: u32,
}

impl MemoryBridge {
    /// Empty bridge (no branches, no tasks). Mostly for tests.
    pub fn new() -> Self {
        MemoryBridge {
            inner: RefCell::new(Inner {
                branches: Vec::new(),
                tasks: Vec::new(),
                notifications: Vec::new(),
                selection: None,
                next_task_seq: 1,
            }),
        }
    }

    /// Bridge pre-loaded with demo data for the TUI.
    pub fn seeded() -> Self {
        let bridge = MemoryBridge::new();
        {
            let mut inner = bridge.inner.borrow_mut();
            let now = Utc::now();

            for (id, name, manager) in [
                ("north", "North Branch", "Clara"),
                ("south", "South Branch", "Miguel"),
                ("central", "Central Office", "Sofia"),
            ] {
                inner.branches.push(Branch {
                    id: id.into(),
                    name: name.into(),
                    manager: manager.into(),
                    active: true,
                    working_hours: Some(WorkingHours {
                        start: "08:00".into(),
                        end: "18:00".into(),
                    }),
                    created_at: now - Duration::days(90),
                });
            }

            let seed_tasks = [
                ("Restock front shelves", "north", "Clara", Some("Ana"), TaskStatus::Pending, 2.0),
                ("Close monthly report", "north", "Clara", Some("Ana"), TaskStatus::InProgress, 4.0),
                ("Inventory audit", "north", "Clara", None, TaskStatus::Pending, 6.0),
                ("Train new cashier", "south", "Miguel", Some("Bea"), TaskStatus::Done, 3.0),
                ("Update price labels", "south", "Miguel", Some("Bea"), TaskStatus::Pending, 1.5),
                ("Quarterly planning", "central", "Sofia", Some("Ana"), TaskStatus::Done, 5.0),
            ];
            for (i, (title, branch, by, to, status, est)) in seed_tasks.into_iter().enumerate() {
                inner.tasks.push(Task {
                    id: format!("T-{:03}", i + 1),
                    branch_id: branch.into(),
                    created_by: by.into(),
                    assigned_to: to.map(Into::into),
                    title: title.into(),
                    description: None,
                    status,
                    priority: None,
                    due_date: None,
                    estimated_hours: Some(est),
                    actual_hours: (status == TaskStatus::Done).then_some(est),
                    tags: Vec::new(),
                    created_at: now - Duration::days(7 - i as i64),
                    updated_at: now - Duration::days(1),
                });
            }
            inner.next_task_seq = seed_tasks.len() as u32 + 1;

            let seed_notifications = [
                ("Task assigned", "Restock front shelves was assigned to you", NotificationKind::TaskAssigned, false),
                ("Task completed", "Train new cashier was completed", NotificationKind::TaskCompleted, false),
                ("Reminder", "Monthly report is due Friday", NotificationKind::Reminder, true),
            ];
            for (i, (title, message, kind, read)) in seed_notifications.into_iter().enumerate() {
                inner.notifications.push(Notification {
                    id: format!("N-{:03}", i + 1),
                    user_id: "ana".into(),
                    title: title.into(),
                    message: message.into(),
                    kind,
                    read,
                    created_at: now - Duration::hours(i as i64 * 6),
                });
            }
        }
        bridge
    }
}

impl Default for MemoryBridge {
    fn default() -> Self {
        MemoryBridge::new()
    }
}

fn summarize(tasks: &[Task]) -> MetricsSummary {
    let completed = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
    let pending = tasks.iter().filter(|t| t.status == TaskStatus::Pending).count();
    let in_progress = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    let total_hours: f64 = tasks.iter().filter_map(|t| t.actual_hours).sum();
    let avg = if completed > 0 {
        total_hours / completed as f64
    } else {
        0.0
    };
    let score = if tasks.is_empty() {
        0.0
    } else {
        completed as f64 / tasks.len() as f64 * 100.0
    };
    MetricsSummary {
        total_hours,
        completed_tasks: completed,
        pending_tasks: pending,
        in_progress_tasks: in_progress,
        avg_completion_hours: avg,
        productivity_score: score,
    }
}

impl CommandBridge for MemoryBridge {
    fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, BridgeError> {
        let inner = self.inner.borrow();
        Ok(inner
            .tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    fn create_task(&self, req: &CreateTaskRequest) -> Result<Task, BridgeError> {
        if req.title.trim().is_empty() {
            return Err(BridgeError::InvalidRequest("title is required".into()));
        }
        let mut inner = self.inner.borrow_mut();
        if !inner.branches.iter().any(|b| b.id == req.branch_id) {
            return Err(BridgeError::NotFound(format!("branch {}", req.branch_id)));
        }
        let now = Utc::now();
        let task = Task {
            id: format!("T-{:03}", inner.next_task_seq),
            branch_id: req.branch_id.clone(),
            created_by: "local".into(),
            assigned_to: req.assigned_to.clone(),
            title: req.title.clone(),
            description: req.description.clone(),
            status: TaskStatus::Pending,
            priority: req.priority,
            due_date: req.due_date,
            estimated_hours: None,
            actual_hours: None,
            tags: req.tags.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.next_task_seq += 1;
        inner.tasks.insert(0, task.clone());
        Ok(task)
    }

    fn update_task(&self, req: &UpdateTaskRequest) -> Result<Task, BridgeError> {
        let mut inner = self.inner.borrow_mut();
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == req.id)
            .ok_or_else(|| BridgeError::NotFound(format!("task {}", req.id)))?;
        if let Some(ref title) = req.title {
            task.title = title.clone();
        }
        if let Some(ref description) = req.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = req.status {
            task.status = status;
            if status == TaskStatus::Done && task.actual_hours.is_none() {
                task.actual_hours = task.estimated_hours;
            }
        }
        if let Some(priority) = req.priority {
            task.priority = Some(priority);
        }
        if let Some(ref assigned) = req.assigned_to {
            task.assigned_to = Some(assigned.clone());
        }
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    fn delete_task(&self, task_id: &str) -> Result<(), BridgeError> {
        let mut inner = self.inner.borrow_mut();
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != task_id);
        if inner.tasks.len() == before {
            return Err(BridgeError::NotFound(format!("task {task_id}")));
        }
        Ok(())
    }

    fn list_branches(&self) -> Result<Vec<Branch>, BridgeError> {
        Ok(self.inner.borrow().branches.clone())
    }

    fn select_branch(&self, selection: &BranchSelection) -> Result<(), BridgeError> {
        let mut inner = self.inner.borrow_mut();
        if !inner.branches.iter().any(|b| b.id == selection.branch_id) {
            return Err(BridgeError::NotFound(format!(
                "branch {}",
                selection.branch_id
            )));
        }
        inner.selection = Some(selection.clone());
        Ok(())
    }

    fn list_notifications(&self, user_id: &str) -> Result<NotificationListResponse, BridgeError> {
        let inner = self.inner.borrow();
        let notifications: Vec<Notification> = inner
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        let total = notifications.len();
        let unread = notifications.iter().filter(|n| !n.read).count();
        Ok(NotificationListResponse {
            notifications,
            total,
            unread,
        })
    }

    fn mark_read(&self, req: &MarkReadRequest) -> Result<usize, BridgeError> {
        let mut inner = self.inner.borrow_mut();
        let mut marked = 0;
        for n in inner.notifications.iter_mut() {
            if !n.read && req.notification_ids.iter().any(|id| id == &n.id) {
                n.read = true;
                marked += 1;
            }
        }
        Ok(marked)
    }

    fn branch_metrics(&self, branch_id: &str) -> Result<MetricsSummary, BridgeError> {
        let inner = self.inner.borrow();
        let tasks: Vec<Task> = inner
            .tasks
            .iter()
            .filter(|t| t.branch_id == branch_id)
            .cloned()
            .collect();
        Ok(summarize(&tasks))
    }

    fn status_breakdown(&self, branch_id: &str) -> Result<Vec<StatusBreakdown>, BridgeError> {
        let inner = self.inner.borrow();
        let tasks: Vec<&Task> = inner
            .tasks
            .iter()
            .filter(|t| t.branch_id == branch_id)
            .collect();
        let total = tasks.len();
        let mut out = Vec::new();
        for (status, label) in [
            (TaskStatus::Pending, "Pending"),
            (TaskStatus::InProgress, "InProgress"),
            (TaskStatus::Done, "Done"),
        ] {
            let count = tasks.iter().filter(|t| t.status == status).count();
            let percentage = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            out.push(StatusBreakdown {
                status: label.into(),
                count,
                percentage,
            });
        }
        Ok(out)
    }

    fn productivity(&self, user_id: &str) -> Result<ProductivityReport, BridgeError> {
        let inner = self.inner.borrow();
        let mine: Vec<Task> = inner
            .tasks
            .iter()
            .filter(|t| t.assigned_to.as_deref() == Some(user_id))
            .cloned()
            .collect();
        // Aggregate by day, preserving first-seen order
        let mut daily: IndexMap<String, DailyHours> = IndexMap::new();
        for task in mine.iter().filter(|t| t.status == TaskStatus::Done) {
            let date = task.updated_at.format("%Y-%m-%d").to_string();
            let day = daily.entry(date.clone()).or_insert(DailyHours {
                date,
                hours: 0.0,
                tasks_completed: 0,
            });
            day.hours += task.actual_hours.unwrap_or(0.0);
            day.tasks_completed += 1;
        }
        Ok(ProductivityReport {
            user_id: user_id.into(),
            user_name: user_id.into(),
            summary: summarize(&mine),
            daily: daily.into_values().collect(),
        })
    }

    fn workload(&self, branch_id: &str) -> Result<WorkloadSnapshot, BridgeError> {
        let inner = self.inner.borrow();
        let open: Vec<&Task> = inner
            .tasks
            .iter()
            .filter(|t| t.branch_id == branch_id && t.status != TaskStatus::Done)
            .collect();
        let mut members: Vec<MemberLoad> = Vec::new();
        let mut unassigned = 0;
        for task in &open {
            let Some(who) = task.assigned_to.as_deref() else {
                unassigned += 1;
                continue;
            };
            let entry = match members.iter_mut().find(|m| m.user_id == who) {
                Some(m) => m,
                None => {
                    members.push(MemberLoad {
                        user_id: who.into(),
                        user_name: who.into(),
                        open_tasks: 0,
                        in_progress: 0,
                        estimated_hours: 0.0,
                    });
                    members.last_mut().expect("just pushed")
                }
            };
            entry.open_tasks += 1;
            if task.status == TaskStatus::InProgress {
                entry.in_progress += 1;
            }
            entry.estimated_hours += task.estimated_hours.unwrap_or(0.0);
        }
        Ok(WorkloadSnapshot {
            branch_id: branch_id.into(),
            members,
            unassigned_tasks: unassigned,
        })
    }

    fn register_user(&self, req: &RegisterRequest) -> Result<SessionProfile, BridgeError> {
        if let Some(problem) = req.validate() {
            return Err(BridgeError::InvalidRequest(problem.into()));
        }
        Ok(SessionProfile {
            id: Uuid::new_v4().to_string(),
            name: req.name.trim().to_string(),
            role: req.role.trim().to_string(),
            email: req.email.trim().to_string(),
        })
    }
}
