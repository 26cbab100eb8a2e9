use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::NotificationKind;
use crate::tui::app::App;

use super::branch_view::title_line;
use super::helpers::truncate_to_width;

/// Render the notifications view with unread markers and counts.
pub fn render_notifications_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![title_line(app, "Notifications")];

    if let Some(ref list) = app.notifications {
        lines.push(Line::from(Span::styled(
            format!("  {} total, {} unread", list.total, list.unread),
            Style::default().fg(app.theme.text_secondary).bg(bg),
        )));
    }
    lines.push(Line::default());

    if let Some(ref err) = app.view_error {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(app.theme.error).bg(bg),
        )));
    }

    let Some(ref list) = app.notifications else {
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    for (idx, n) in list.notifications.iter().enumerate() {
        let selected = idx == app.notif_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let kind_color = match n.kind {
            NotificationKind::TaskAssigned => app.theme.accent,
            NotificationKind::TaskCompleted => app.theme.success,
            NotificationKind::Reminder => app.theme.warning,
            NotificationKind::Info => app.theme.info,
        };
        let marker = if n.read { "  " } else { "● " };
        let title_style = if n.read {
            Style::default().fg(app.theme.text_secondary).bg(row_bg)
        } else {
            Style::default()
                .fg(app.theme.text)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {marker}"),
                Style::default().fg(kind_color).bg(row_bg),
            ),
            Span::styled(n.title.clone(), title_style),
            Span::styled(
                format!(
                    "  {}",
                    truncate_to_width(&n.message, area.width.saturating_sub(30) as usize)
                ),
                Style::default().fg(app.theme.text_secondary).bg(row_bg),
            ),
        ]));
    }

    if list.notifications.is_empty() {
        lines.push(Line::from(Span::styled(
            "  nothing new",
            Style::default().fg(app.theme.text_secondary).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
