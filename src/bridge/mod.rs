pub mod memory;

pub use memory::MemoryBridge;

use crate::model::{
    Branch, BranchSelection, CreateTaskRequest, MarkReadRequest, MetricsSummary,
    NotificationListResponse, ProductivityReport, RegisterRequest, SessionProfile, StatusBreakdown,
    Task, TaskFilter, UpdateTaskRequest, WorkloadSnapshot,
};

/// Error type for command-bridge calls
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// The remote-procedure seam between the shell and the backend that owns all
/// business data. Every payload is an explicit struct — field names are
/// checked at compile time on both sides of the call.
///
/// All calls happen on the event loop thread, so implementations may use
/// interior mutability without locking.
pub trait CommandBridge {
    // tasks (Inbox)
    fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, BridgeError>;
    fn create_task(&self, req: &CreateTaskRequest) -> Result<Task, BridgeError>;
    fn update_task(&self, req: &UpdateTaskRequest) -> Result<Task, BridgeError>;
    fn delete_task(&self, task_id: &str) -> Result<(), BridgeError>;

    // branches (Select Branch)
    fn list_branches(&self) -> Result<Vec<Branch>, BridgeError>;
    fn select_branch(&self, selection: &BranchSelection) -> Result<(), BridgeError>;

    // notifications
    fn list_notifications(&self, user_id: &str) -> Result<NotificationListResponse, BridgeError>;
    fn mark_read(&self, req: &MarkReadRequest) -> Result<usize, BridgeError>;

    // metrics / productivity / workload
    fn branch_metrics(&self, branch_id: &str) -> Result<MetricsSummary, BridgeError>;
    fn status_breakdown(&self, branch_id: &str) -> Result<Vec<StatusBreakdown>, BridgeError>;
    fn productivity(&self, user_id: &str) -> Result<ProductivityReport, BridgeError>;
    fn workload(&self, branch_id: &str) -> Result<WorkloadSnapshot, BridgeError>;

    // registration
    fn register_user(&self, req: &RegisterRequest) -> Result<SessionProfile, BridgeError>;
}
