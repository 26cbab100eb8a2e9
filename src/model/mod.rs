pub mod branch;
pub mod metrics;
pub mod notification;
pub mod profile;
pub mod task;
pub mod workload;

pub use branch::{Branch, BranchSelection, WorkingHours};
pub use metrics::{DailyHours, MetricsSummary, ProductivityReport, StatusBreakdown};
pub use notification::{MarkReadRequest, Notification, NotificationKind, NotificationListResponse};
pub use profile::{RegisterRequest, SessionProfile};
pub use task::{CreateTaskRequest, Task, TaskFilter, TaskPriority, TaskStatus, UpdateTaskRequest};
pub use workload::{MemberLoad, WorkloadSnapshot};
