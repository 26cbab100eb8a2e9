pub mod branch_view;
pub mod header;
pub mod helpers;
pub mod inbox_view;
pub mod menu_view;
pub mod metrics_view;
pub mod modal;
pub mod notifications_view;
pub mod productivity_view;
pub mod status_row;
pub mod workload_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows incl. divider) | content | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    // The main content area is gated on a session profile; while gated only
    // the registration modal shows. It is also blanked mid-transition (the
    // two-phase swap renders the old view at opacity zero, as it were).
    if app.content_unlocked() && !app.is_transitioning() {
        match app.view {
            View::Menu => menu_view::render_menu(frame, app, chunks[1]),
            View::SelectBranch => branch_view::render_branch_view(frame, app, chunks[1]),
            View::Inbox => inbox_view::render_inbox_view(frame, app, chunks[1]),
            View::Notifications => {
                notifications_view::render_notifications_view(frame, app, chunks[1])
            }
            View::Metrics => metrics_view::render_metrics_view(frame, app, chunks[1]),
            View::Productivity => {
                productivity_view::render_productivity_view(frame, app, chunks[1])
            }
            View::Workload => workload_view::render_workload_view(frame, app, chunks[1]),
        }
    }

    status_row::render_status_row(frame, app, chunks[2]);

    // Modal overlay on top of everything
    if let Some(m) = app.modal {
        modal::render_modal(frame, app, m, frame.area());
    }
}
