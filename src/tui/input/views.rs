use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Modal, View};

/// Keys for the non-menu views. Escape (back to menu) never reaches here —
/// it is arbitrated globally.
pub(super) fn handle_view_key(app: &mut App, key: KeyEvent) {
    // Shared across all views
    if key.code == KeyCode::Char('r') {
        app.refresh_current_view();
        return;
    }

    match app.view {
        View::SelectBranch => handle_branch_key(app, key),
        View::Inbox => handle_inbox_key(app, key),
        View::Notifications => handle_notifications_key(app, key),
        // Read-only dashboards
        View::Metrics | View::Productivity | View::Workload => {}
        View::Menu => {}
    }
}

fn handle_branch_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.branch_cursor + 1 < app.branches.len() {
                app.branch_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.branch_cursor = app.branch_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.select_branch_at_cursor();
        }
        _ => {}
    }
}

fn handle_inbox_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.inbox_cursor + 1 < app.tasks.len() {
                app.inbox_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.inbox_cursor = app.inbox_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.cycle_task_status_at_cursor();
        }
        KeyCode::Char('d') => {
            app.delete_task_at_cursor();
        }
        KeyCode::Char('n') => {
            app.open_modal(Modal::CreateTask);
        }
        _ => {}
    }
}

fn handle_notifications_key(app: &mut App, key: KeyEvent) {
    let count = app
        .notifications
        .as_ref()
        .map_or(0, |l| l.notifications.len());
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.notif_cursor + 1 < count {
                app.notif_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.notif_cursor = app.notif_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.mark_notification_read();
        }
        KeyCode::Char('a') => {
            app.mark_all_notifications_read();
        }
        _ => {}
    }
}
