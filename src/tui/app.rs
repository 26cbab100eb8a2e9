use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::bridge::CommandBridge;
use crate::io::config_io::AppConfig;
use crate::io::{config_io, profile_io, state};
use crate::model::{
    Branch, BranchSelection, CreateTaskRequest, MarkReadRequest, MetricsSummary,
    NotificationListResponse, ProductivityReport, RegisterRequest, SessionProfile,
    StatusBreakdown, Task, TaskFilter, UpdateTaskRequest, WorkloadSnapshot,
};

use super::theme::Palette;

/// How long a view swap stays in its dimmed two-phase window.
pub const TRANSITION: Duration = Duration::from_millis(150);

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Menu,
    SelectBranch,
    Inbox,
    Notifications,
    Metrics,
    Productivity,
    Workload,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Menu => "Menu",
            View::SelectBranch => "Select Branch",
            View::Inbox => "Inbox",
            View::Notifications => "Notifications",
            View::Metrics => "Metrics",
            View::Productivity => "Your Productivity",
            View::Workload => "Workload",
        }
    }

    fn key(self) -> &'static str {
        match self {
            View::Menu => "menu",
            View::SelectBranch => "select-branch",
            View::Inbox => "inbox",
            View::Notifications => "notifications",
            View::Metrics => "metrics",
            View::Productivity => "productivity",
            View::Workload => "workload",
        }
    }

    fn from_key(key: &str) -> Option<View> {
        match key {
            "menu" => Some(View::Menu),
            "select-branch" => Some(View::SelectBranch),
            "inbox" => Some(View::Inbox),
            "notifications" => Some(View::Notifications),
            "metrics" => Some(View::Metrics),
            "productivity" => Some(View::Productivity),
            "workload" => Some(View::Workload),
            _ => None,
        }
    }
}

/// Overlay dialogs. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Settings,
    About,
    UpdateCheck,
    CreateTask,
    RegisterUser,
}

impl Modal {
    /// RegisterUser cannot be dismissed — the session gate clears it only
    /// after a successful registration.
    pub fn dismissable(self) -> bool {
        !matches!(self, Modal::RegisterUser)
    }
}

/// A view swap that has started but not yet committed
#[derive(Debug, Clone, Copy)]
pub struct PendingTransition {
    pub target: View,
    pub fires_at: Instant,
}

/// Which field of the registration form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Email,
    Role,
}

impl RegisterField {
    pub fn next(self) -> RegisterField {
        match self {
            RegisterField::Name => RegisterField::Email,
            RegisterField::Email => RegisterField::Role,
            RegisterField::Role => RegisterField::Name,
        }
    }
}

/// Input state for the registration modal
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub focus: Option<RegisterField>,
    pub error: Option<String>,
}

impl RegisterForm {
    pub fn new() -> Self {
        RegisterForm {
            focus: Some(RegisterField::Name),
            ..Default::default()
        }
    }

    pub fn field_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::Name => &mut self.name,
            RegisterField::Email => &mut self.email,
            RegisterField::Role => &mut self.role,
        }
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Which field of the new-task modal has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskField {
    #[default]
    Title,
    Assignee,
}

impl TaskField {
    pub fn next(self) -> TaskField {
        match self {
            TaskField::Title => TaskField::Assignee,
            TaskField::Assignee => TaskField::Title,
        }
    }
}

/// Input state for the new-task modal
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub assignee: String,
    pub focus: TaskField,
    pub error: Option<String>,
}

impl TaskForm {
    pub fn field_mut(&mut self, field: TaskField) -> &mut String {
        match field {
            TaskField::Title => &mut self.title,
            TaskField::Assignee => &mut self.assignee,
        }
    }
}

/// What a menu row does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open(View),
    CheckUpdates,
    About,
    Settings,
    Quit,
}

pub struct MenuItem {
    pub action: MenuAction,
    pub label: &'static str,
    pub shortcut: char,
    /// Draw a divider above this row
    pub section_start: bool,
}

/// The main menu, in display order. Sections mirror the tray menu layout:
/// destinations, app actions, then settings/quit.
pub const MENU_ITEMS: [MenuItem; 10] = [
    MenuItem { action: MenuAction::Open(View::SelectBranch), label: "Select Branch", shortcut: 'o', section_start: false },
    MenuItem { action: MenuAction::Open(View::Inbox), label: "Inbox", shortcut: 'i', section_start: false },
    MenuItem { action: MenuAction::Open(View::Notifications), label: "Notifications", shortcut: 'n', section_start: false },
    MenuItem { action: MenuAction::Open(View::Metrics), label: "View metrics", shortcut: 'm', section_start: false },
    MenuItem { action: MenuAction::Open(View::Productivity), label: "Your productivity", shortcut: 'p', section_start: false },
    MenuItem { action: MenuAction::Open(View::Workload), label: "View workload", shortcut: 'w', section_start: false },
    MenuItem { action: MenuAction::CheckUpdates, label: "Check for updates", shortcut: 'u', section_start: true },
    MenuItem { action: MenuAction::About, label: "About Evolux", shortcut: 'a', section_start: false },
    MenuItem { action: MenuAction::Settings, label: "Settings", shortcut: 's', section_start: true },
    MenuItem { action: MenuAction::Quit, label: "Quit", shortcut: 'q', section_start: false },
];

/// Main application state. One instance owns the whole shell: navigation,
/// modal orchestration, session gate, theme, and the per-view data caches.
/// Input handlers and render functions receive it by reference.
pub struct App {
    pub bridge: Box<dyn CommandBridge>,
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub should_quit: bool,

    // navigation
    pub view: View,
    pub transition: Option<PendingTransition>,

    // modal orchestration
    pub modal: Option<Modal>,
    pub register_form: RegisterForm,
    pub task_form: TaskForm,
    pub settings_cursor: usize,

    // session gate
    pub profile: Option<SessionProfile>,

    // theme context
    pub theme: Palette,

    // per-view data and cursors
    pub selected_branch: Option<String>,
    pub tasks: Vec<Task>,
    pub inbox_cursor: usize,
    pub branches: Vec<Branch>,
    pub branch_cursor: usize,
    pub notifications: Option<NotificationListResponse>,
    pub notif_cursor: usize,
    pub metrics: Option<MetricsSummary>,
    pub breakdown: Vec<StatusBreakdown>,
    pub productivity: Option<ProductivityReport>,
    pub workload: Option<WorkloadSnapshot>,
    /// Last bridge failure for the current view, shown inline
    pub view_error: Option<String>,

    // menu
    pub menu_cursor: usize,
    /// Transient line for the status row (e.g. "marked 2 read")
    pub status_message: Option<String>,
}

impl App {
    pub fn new(bridge: Box<dyn CommandBridge>, data_dir: PathBuf) -> Self {
        let config = config_io::read_config(&data_dir);
        let profile = profile_io::load_profile(&data_dir);

        let mut app = App {
            bridge,
            data_dir,
            config,
            should_quit: false,
            view: View::Menu,
            transition: None,
            modal: None,
            register_form: RegisterForm::default(),
            task_form: TaskForm::default(),
            settings_cursor: 0,
            profile,
            theme: Palette::default(),
            selected_branch: None,
            tasks: Vec::new(),
            inbox_cursor: 0,
            branches: Vec::new(),
            branch_cursor: 0,
            notifications: None,
            notif_cursor: 0,
            metrics: None,
            breakdown: Vec::new(),
            productivity: None,
            workload: None,
            view_error: None,
            menu_cursor: 0,
            status_message: None,
        };

        if let Some(name) = app.config.ui.theme.clone() {
            app.set_theme(&name);
        }

        // Session gate: no profile forces the registration modal; the main
        // content area stays unrendered until registration succeeds.
        if app.profile.is_none() {
            app.modal = Some(Modal::RegisterUser);
            app.register_form = RegisterForm::new();
        }

        app
    }

    // -----------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------

    /// Start a two-phase view swap. No-op when already on `target`. A call
    /// while another swap is pending replaces it — last call wins, the
    /// earlier timer result is never observed.
    pub fn navigate(&mut self, target: View) {
        if target == self.view {
            // Heading back to where we already are cancels any pending swap
            self.transition = None;
            return;
        }
        self.transition = Some(PendingTransition {
            target,
            fires_at: Instant::now() + TRANSITION,
        });
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Commit a pending transition whose deadline has passed. Called between
    /// event polls; `now` is passed in so tests drive time explicitly.
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.transition else {
            return;
        };
        if now < pending.fires_at {
            return;
        }
        self.transition = None;
        self.view = pending.target;
        self.view_error = None;
        self.status_message = None;
        self.refresh_current_view();
    }

    // -----------------------------------------------------------------
    // Modal orchestration
    // -----------------------------------------------------------------

    /// Open a modal, replacing any other open one.
    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
        match modal {
            Modal::Settings => self.settings_cursor = 0,
            Modal::CreateTask => self.task_form = TaskForm::default(),
            _ => {}
        }
    }

    /// Close the active modal. No-op while RegisterUser is forced open.
    pub fn close_modal(&mut self) {
        match self.modal {
            Some(Modal::RegisterUser) => {}
            _ => self.modal = None,
        }
    }

    /// Clicking the dimmed overlay outside the modal content.
    pub fn overlay_click(&mut self) {
        self.close_modal();
    }

    /// Global Escape arbitration — a strict priority chain, evaluated fresh
    /// on every press:
    /// 1. dismissable modal open → close it
    /// 2. current view is not Menu → head back to Menu
    /// 3. nothing to do
    pub fn handle_escape(&mut self) {
        if let Some(modal) = self.modal {
            if modal.dismissable() {
                self.close_modal();
            }
            return;
        }
        if self.view != View::Menu {
            self.navigate(View::Menu);
        }
    }

    /// Run a main-menu entry.
    pub fn activate_menu_item(&mut self, action: MenuAction) {
        match action {
            MenuAction::Open(view) => self.navigate(view),
            MenuAction::CheckUpdates => self.open_modal(Modal::UpdateCheck),
            MenuAction::About => self.open_modal(Modal::About),
            MenuAction::Settings => self.open_modal(Modal::Settings),
            MenuAction::Quit => self.should_quit = true,
        }
    }

    // -----------------------------------------------------------------
    // Session gate
    // -----------------------------------------------------------------

    /// Whether the main content area may render at all.
    pub fn content_unlocked(&self) -> bool {
        self.profile.is_some()
    }

    /// Submit the registration form. On success the profile is set and
    /// persisted and the forced modal clears; on failure the modal stays
    /// open with the error surfaced and nothing else changes.
    pub fn submit_registration(&mut self) {
        let request = self.register_form.to_request();
        if let Some(problem) = request.validate() {
            self.register_form.error = Some(problem.to_string());
            return;
        }
        match self.bridge.register_user(&request) {
            Ok(profile) => {
                if let Err(e) = profile_io::save_profile(&self.data_dir, &profile) {
                    // Keep the session usable; the gate will re-ask next start
                    self.status_message = Some(format!("profile not saved: {e}"));
                }
                self.profile = Some(profile);
                self.register_form.error = None;
                self.modal = None;
            }
            Err(e) => {
                self.register_form.error = Some(e.to_string());
            }
        }
    }

    // -----------------------------------------------------------------
    // Theme context
    // -----------------------------------------------------------------

    /// Switch palettes by name. Unknown names are ignored and the previous
    /// palette stays current.
    pub fn set_theme(&mut self, name: &str) {
        if let Some(palette) = Palette::named(name) {
            self.theme = palette;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    // -----------------------------------------------------------------
    // View data
    // -----------------------------------------------------------------

    /// The branch the data views are scoped to, defaulting to the first
    /// known branch when none was ever selected.
    pub fn current_branch_id(&self) -> Option<String> {
        self.selected_branch
            .clone()
            .or_else(|| self.branches.first().map(|b| b.id.clone()))
    }

    pub fn profile_name(&self) -> &str {
        self.profile.as_ref().map(|p| p.name.as_str()).unwrap_or("—")
    }

    /// Re-fetch the data backing the current view from the bridge. Failures
    /// land in `view_error` and leave the previous data in place.
    pub fn refresh_current_view(&mut self) {
        self.view_error = None;
        match self.view {
            View::Menu => {}
            View::SelectBranch => match self.bridge.list_branches() {
                Ok(branches) => {
                    self.branches = branches;
                    self.branch_cursor = self.branch_cursor.min(self.branches.len().saturating_sub(1));
                }
                Err(e) => self.view_error = Some(e.to_string()),
            },
            View::Inbox => {
                if self.branches.is_empty()
                    && let Ok(branches) = self.bridge.list_branches()
                {
                    self.branches = branches;
                }
                let filter = TaskFilter {
                    branch_id: self.current_branch_id(),
                    ..Default::default()
                };
                match self.bridge.list_tasks(&filter) {
                    Ok(tasks) => {
                        self.tasks = tasks;
                        self.inbox_cursor = self.inbox_cursor.min(self.tasks.len().saturating_sub(1));
                    }
                    Err(e) => self.view_error = Some(e.to_string()),
                }
            }
            View::Notifications => {
                let user = self
                    .profile
                    .as_ref()
                    .map(|p| p.name.to_lowercase())
                    .unwrap_or_default();
                match self.bridge.list_notifications(&user) {
                    Ok(list) => {
                        self.notif_cursor = self.notif_cursor.min(list.notifications.len().saturating_sub(1));
                        self.notifications = Some(list);
                    }
                    Err(e) => self.view_error = Some(e.to_string()),
                }
            }
            View::Metrics => {
                if self.branches.is_empty()
                    && let Ok(branches) = self.bridge.list_branches()
                {
                    self.branches = branches;
                }
                let Some(branch_id) = self.current_branch_id() else {
                    self.view_error = Some("no branch selected".into());
                    return;
                };
                match self.bridge.branch_metrics(&branch_id) {
                    Ok(summary) => self.metrics = Some(summary),
                    Err(e) => {
                        self.view_error = Some(e.to_string());
                        return;
                    }
                }
                match self.bridge.status_breakdown(&branch_id) {
                    Ok(breakdown) => self.breakdown = breakdown,
                    Err(e) => self.view_error = Some(e.to_string()),
                }
            }
            View::Productivity => {
                let user = self
                    .profile
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                match self.bridge.productivity(&user) {
                    Ok(report) => self.productivity = Some(report),
                    Err(e) => self.view_error = Some(e.to_string()),
                }
            }
            View::Workload => {
                if self.branches.is_empty()
                    && let Ok(branches) = self.bridge.list_branches()
                {
                    self.branches = branches;
                }
                let Some(branch_id) = self.current_branch_id() else {
                    self.view_error = Some("no branch selected".into());
                    return;
                };
                match self.bridge.workload(&branch_id) {
                    Ok(snapshot) => self.workload = Some(snapshot),
                    Err(e) => self.view_error = Some(e.to_string()),
                }
            }
        }
    }

    /// Select the branch under the cursor in the SelectBranch view.
    pub fn select_branch_at_cursor(&mut self) {
        let Some(branch) = self.branches.get(self.branch_cursor) else {
            return;
        };
        let selection = BranchSelection {
            user_id: self
                .profile
                .as_ref()
                .map(|p| p.id.clone())
                .unwrap_or_default(),
            branch_id: branch.id.clone(),
            selected_at: Utc::now(),
        };
        match self.bridge.select_branch(&selection) {
            Ok(()) => {
                self.status_message = Some(format!("working on {}", branch.name));
                self.selected_branch = Some(branch.id.clone());
            }
            Err(e) => self.view_error = Some(e.to_string()),
        }
    }

    /// Cycle the status of the task under the inbox cursor.
    pub fn cycle_task_status_at_cursor(&mut self) {
        let Some(task) = self.tasks.get(self.inbox_cursor) else {
            return;
        };
        let req = UpdateTaskRequest {
            id: task.id.clone(),
            title: None,
            description: None,
            status: Some(task.status.next()),
            priority: None,
            assigned_to: None,
        };
        match self.bridge.update_task(&req) {
            Ok(updated) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(e) => self.view_error = Some(e.to_string()),
        }
    }

    /// Submit the new-task form. On success the task lands at the top of the
    /// inbox and the modal closes; on failure the modal stays open with the
    /// error surfaced.
    pub fn submit_new_task(&mut self) {
        let Some(branch_id) = self.current_branch_id() else {
            self.task_form.error = Some("no branch selected".into());
            return;
        };
        if self.task_form.title.trim().is_empty() {
            self.task_form.error = Some("title is required".into());
            return;
        }
        let assignee = self.task_form.assignee.trim();
        let req = CreateTaskRequest {
            branch_id,
            title: self.task_form.title.trim().to_string(),
            description: None,
            priority: None,
            assigned_to: (!assignee.is_empty()).then(|| assignee.to_string()),
            due_date: None,
            tags: Vec::new(),
        };
        match self.bridge.create_task(&req) {
            Ok(task) => {
                self.status_message = Some(format!("created {}", task.id));
                self.tasks.insert(0, task);
                self.inbox_cursor = 0;
                self.task_form.error = None;
                self.modal = None;
            }
            Err(e) => {
                self.task_form.error = Some(e.to_string());
            }
        }
    }

    /// Delete the task under the inbox cursor.
    pub fn delete_task_at_cursor(&mut self) {
        let Some(task) = self.tasks.get(self.inbox_cursor) else {
            return;
        };
        let id = task.id.clone();
        match self.bridge.delete_task(&id) {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                self.inbox_cursor = self.inbox_cursor.min(self.tasks.len().saturating_sub(1));
                self.status_message = Some(format!("deleted {id}"));
            }
            Err(e) => self.view_error = Some(e.to_string()),
        }
    }

    /// Mark the notification under the cursor read.
    pub fn mark_notification_read(&mut self) {
        let Some(ref list) = self.notifications else {
            return;
        };
        let Some(n) = list.notifications.get(self.notif_cursor) else {
            return;
        };
        let req = MarkReadRequest {
            notification_ids: vec![n.id.clone()],
        };
        match self.bridge.mark_read(&req) {
            Ok(_) => self.refresh_current_view(),
            Err(e) => self.view_error = Some(e.to_string()),
        }
    }

    /// Mark every listed notification read.
    pub fn mark_all_notifications_read(&mut self) {
        let Some(ref list) = self.notifications else {
            return;
        };
        let req = MarkReadRequest {
            notification_ids: list.notifications.iter().map(|n| n.id.clone()).collect(),
        };
        match self.bridge.mark_read(&req) {
            Ok(marked) => {
                self.status_message = Some(format!("marked {marked} read"));
                self.refresh_current_view();
            }
            Err(e) => self.view_error = Some(e.to_string()),
        }
    }
}

/// Restore UI state from state.json. The view is only restored once the
/// session gate is open — a gated session always starts at Menu.
pub fn restore_ui_state(app: &mut App) {
    let Some(ui_state) = state::read_ui_state(&app.data_dir) else {
        return;
    };
    if let Some(ref name) = ui_state.theme {
        app.set_theme(name);
    }
    app.selected_branch = ui_state.selected_branch;
    if app.content_unlocked()
        && let Some(view) = View::from_key(&ui_state.view)
    {
        app.view = view;
        app.refresh_current_view();
    }
}

/// Save UI state to state.json
pub fn save_ui_state(app: &App) {
    let ui_state = state::UiState {
        view: app.view.key().to_string(),
        selected_branch: app.selected_branch.clone(),
        theme: Some(app.theme.name.to_string()),
    };
    let _ = state::write_ui_state(&app.data_dir, &ui_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeError, MemoryBridge};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn registered_app(dir: &TempDir) -> App {
        profile_io::save_profile(
            dir.path(),
            &SessionProfile {
                id: "u-1".into(),
                name: "Ana".into(),
                role: "Dev".into(),
                email: "ana@x.com".into(),
            },
        )
        .unwrap();
        App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf())
    }

    fn settle(app: &mut App) {
        app.tick(Instant::now() + TRANSITION + Duration::from_millis(10));
    }

    #[test]
    fn navigate_commits_after_the_delay() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        assert_eq!(app.view, View::Menu);

        app.navigate(View::Inbox);
        assert!(app.is_transitioning());
        assert_eq!(app.view, View::Menu);

        // Before the deadline nothing commits
        app.tick(Instant::now());
        assert_eq!(app.view, View::Menu);

        settle(&mut app);
        assert_eq!(app.view, View::Inbox);
        assert!(!app.is_transitioning());
    }

    #[test]
    fn navigate_to_current_view_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.navigate(View::Menu);
        assert!(!app.is_transitioning());
    }

    #[test]
    fn second_navigate_wins_over_pending_one() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.navigate(View::Inbox);
        app.navigate(View::Metrics);
        settle(&mut app);
        assert_eq!(app.view, View::Metrics);
        assert!(!app.is_transitioning());
        // Only one commit happened; ticking again changes nothing
        settle(&mut app);
        assert_eq!(app.view, View::Metrics);
    }

    #[test]
    fn navigating_back_to_current_cancels_pending_swap() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.navigate(View::Workload);
        app.navigate(View::Menu);
        assert!(!app.is_transitioning());
        settle(&mut app);
        assert_eq!(app.view, View::Menu);
    }

    #[test]
    fn close_modal_is_idempotent_at_none() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.close_modal();
        app.close_modal();
        assert_eq!(app.modal, None);
    }

    #[test]
    fn open_modal_overwrites_any_other() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.open_modal(Modal::About);
        app.open_modal(Modal::Settings);
        assert_eq!(app.modal, Some(Modal::Settings));
    }

    #[test]
    fn register_user_modal_is_uncloseable() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        assert_eq!(app.modal, Some(Modal::RegisterUser));
        app.close_modal();
        assert_eq!(app.modal, Some(Modal::RegisterUser));
        app.overlay_click();
        assert_eq!(app.modal, Some(Modal::RegisterUser));
        app.handle_escape();
        assert_eq!(app.modal, Some(Modal::RegisterUser));
    }

    #[test]
    fn escape_closes_modal_without_navigating() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.navigate(View::Metrics);
        settle(&mut app);
        app.open_modal(Modal::Settings);

        app.handle_escape();
        assert_eq!(app.modal, None);
        // View navigation must NOT also fire
        assert_eq!(app.view, View::Metrics);
        assert!(!app.is_transitioning());
    }

    #[test]
    fn escape_without_modal_heads_back_to_menu() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.navigate(View::Workload);
        settle(&mut app);

        app.handle_escape();
        settle(&mut app);
        assert_eq!(app.view, View::Menu);
    }

    #[test]
    fn escape_on_menu_with_no_modal_does_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.handle_escape();
        assert_eq!(app.view, View::Menu);
        assert!(!app.is_transitioning());
        assert_eq!(app.modal, None);
    }

    #[test]
    fn startup_without_profile_forces_registration_and_gates_content() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        assert_eq!(app.modal, Some(Modal::RegisterUser));
        assert!(!app.content_unlocked());

        app.register_form.name = "Ana".into();
        app.register_form.email = "ana@x.com".into();
        app.register_form.role = "Dev".into();
        app.submit_registration();

        assert_eq!(app.modal, None);
        assert!(app.content_unlocked());
        assert_eq!(app.view, View::Menu);
        let profile = app.profile.as_ref().unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.email, "ana@x.com");
        assert_eq!(profile.role, "Dev");
        // Profile was persisted for the next start
        assert!(profile_io::load_profile(dir.path()).is_some());
    }

    #[test]
    fn failed_registration_keeps_the_modal_and_the_error() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        app.register_form.name = "Ana".into();
        app.register_form.email = "nope".into();
        app.register_form.role = "Dev".into();
        app.submit_registration();
        assert_eq!(app.modal, Some(Modal::RegisterUser));
        assert!(app.register_form.error.is_some());
        assert!(!app.content_unlocked());
    }

    struct FailingBridge;

    impl CommandBridge for FailingBridge {
        fn list_tasks(&self, _: &TaskFilter) -> Result<Vec<Task>, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn create_task(
            &self,
            _: &crate::model::CreateTaskRequest,
        ) -> Result<Task, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn update_task(
            &self,
            _: &crate::model::UpdateTaskRequest,
        ) -> Result<Task, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn delete_task(&self, _: &str) -> Result<(), BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn list_branches(&self) -> Result<Vec<Branch>, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn select_branch(&self, _: &BranchSelection) -> Result<(), BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn list_notifications(
            &self,
            _: &str,
        ) -> Result<NotificationListResponse, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn mark_read(&self, _: &MarkReadRequest) -> Result<usize, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn branch_metrics(&self, _: &str) -> Result<MetricsSummary, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn status_breakdown(&self, _: &str) -> Result<Vec<StatusBreakdown>, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn productivity(&self, _: &str) -> Result<ProductivityReport, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn workload(&self, _: &str) -> Result<WorkloadSnapshot, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
        fn register_user(
            &self,
            _: &RegisterRequest,
        ) -> Result<SessionProfile, BridgeError> {
            Err(BridgeError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn backend_registration_failure_surfaces_without_corrupting_state() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(FailingBridge), dir.path().to_path_buf());
        app.register_form.name = "Ana".into();
        app.register_form.email = "ana@x.com".into();
        app.register_form.role = "Dev".into();
        app.submit_registration();
        assert_eq!(app.modal, Some(Modal::RegisterUser));
        assert_eq!(
            app.register_form.error.as_deref(),
            Some("backend unavailable: offline")
        );
        assert!(app.profile.is_none());
    }

    #[test]
    fn bridge_failure_in_a_view_stays_local() {
        let dir = TempDir::new().unwrap();
        profile_io::save_profile(
            dir.path(),
            &SessionProfile {
                id: "u-1".into(),
                name: "Ana".into(),
                role: "Dev".into(),
                email: "ana@x.com".into(),
            },
        )
        .unwrap();
        let mut app = App::new(Box::new(FailingBridge), dir.path().to_path_buf());
        app.navigate(View::Inbox);
        settle(&mut app);
        assert_eq!(app.view, View::Inbox);
        assert!(app.view_error.is_some());
    }

    #[test]
    fn set_theme_switches_and_fails_closed() {
        let dir = TempDir::new().unwrap();
        let mut app = registered_app(&dir);
        app.set_theme("darkPurple");
        assert_eq!(app.theme.name, "darkPurple");
        app.set_theme("darkBlue");
        assert_eq!(app.theme, super::super::theme::DARK_BLUE);
        // Unknown names keep the previous palette
        app.set_theme("hotdog-stand");
        assert_eq!(app.theme.name, "darkBlue");
    }

    #[test]
    fn theme_and_branch_survive_a_restart() {
        let dir = TempDir::new().unwrap();
        {
            let mut app = registered_app(&dir);
            app.set_theme("darkBlue");
            app.selected_branch = Some("south".into());
            app.navigate(View::Inbox);
            settle(&mut app);
            save_ui_state(&app);
        }
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        restore_ui_state(&mut app);
        assert_eq!(app.theme.name, "darkBlue");
        assert_eq!(app.selected_branch.as_deref(), Some("south"));
        assert_eq!(app.view, View::Inbox);
    }

    #[test]
    fn gated_session_never_restores_a_view() {
        let dir = TempDir::new().unwrap();
        state::write_ui_state(
            dir.path(),
            &state::UiState {
                view: "metrics".into(),
                selected_branch: None,
                theme: None,
            },
        )
        .unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        restore_ui_state(&mut app);
        assert_eq!(app.view, View::Menu);
        assert_eq!(app.modal, Some(Modal::RegisterUser));
    }
}
