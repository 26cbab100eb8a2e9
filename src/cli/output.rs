use serde::Serialize;

use crate::model::{Branch, SessionProfile, Task, TaskStatus};
use crate::tui::theme::Palette;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ThemeJson {
    pub name: &'static str,
}

#[derive(Serialize)]
pub struct TaskJson {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

#[derive(Serialize)]
pub struct BranchJson {
    pub id: String,
    pub name: String,
    pub manager: String,
    pub active: bool,
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        TaskJson {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            branch: task.branch_id.clone(),
            assigned_to: task.assigned_to.clone(),
        }
    }
}

impl From<&Branch> for BranchJson {
    fn from(branch: &Branch) -> Self {
        BranchJson {
            id: branch.id.clone(),
            name: branch.name.clone(),
            manager: branch.manager.clone(),
            active: branch.active,
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

pub fn print_profile(profile: &SessionProfile, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(profile).unwrap_or_default());
    } else {
        println!("{} <{}> — {}", profile.name, profile.email, profile.role);
    }
}

pub fn print_themes(palettes: &[Palette], json: bool) {
    if json {
        let list: Vec<ThemeJson> = palettes.iter().map(|p| ThemeJson { name: p.name }).collect();
        println!("{}", serde_json::to_string_pretty(&list).unwrap_or_default());
    } else {
        for palette in palettes {
            println!("{}", palette.name);
        }
    }
}

pub fn print_tasks(tasks: &[Task], json: bool) {
    if json {
        let list: Vec<TaskJson> = tasks.iter().map(TaskJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&list).unwrap_or_default());
    } else {
        for task in tasks {
            let status = match task.status {
                TaskStatus::Pending => "[ ]",
                TaskStatus::InProgress => "[>]",
                TaskStatus::Done => "[x]",
            };
            println!("{status} {} {} ({})", task.id, task.title, task.branch_id);
        }
    }
}

pub fn print_branches(branches: &[Branch], json: bool) {
    if json {
        let list: Vec<BranchJson> = branches.iter().map(BranchJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&list).unwrap_or_default());
    } else {
        for branch in branches {
            let state = if branch.active { "active" } else { "inactive" };
            println!("{} — {} (manager: {}, {state})", branch.id, branch.name, branch.manager);
        }
    }
}
