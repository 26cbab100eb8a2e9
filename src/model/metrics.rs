use serde::{Deserialize, Serialize};

/// Headline numbers for the metrics view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_hours: f64,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub in_progress_tasks: usize,
    pub avg_completion_hours: f64,
    pub productivity_score: f64,
}

/// Hours and completions for one calendar day ("YYYY-MM-DD")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyHours {
    pub date: String,
    pub hours: f64,
    pub tasks_completed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub status: String,
    pub count: usize,
    pub percentage: f64,
}

/// Per-user productivity, shown in the Your Productivity view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductivityReport {
    pub user_id: String,
    pub user_name: String,
    pub summary: MetricsSummary,
    pub daily: Vec<DailyHours>,
}
