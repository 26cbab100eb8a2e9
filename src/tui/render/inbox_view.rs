use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{TaskPriority, TaskStatus};
use crate::tui::app::App;

use super::branch_view::title_line;
use super::helpers::truncate_to_width;

/// Checkbox-style symbol for a task status
pub(super) fn status_symbol(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "[ ]",
        TaskStatus::InProgress => "[>]",
        TaskStatus::Done => "[x]",
    }
}

/// Render the inbox: the task list for the current branch.
pub fn render_inbox_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let branch = app.current_branch_id().unwrap_or_default();
    let mut lines: Vec<Line> = vec![
        title_line(app, "Inbox"),
        Line::from(Span::styled(
            format!("  branch: {branch}"),
            Style::default().fg(app.theme.text_secondary).bg(bg),
        )),
        Line::default(),
    ];

    if let Some(ref err) = app.view_error {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(app.theme.error).bg(bg),
        )));
    }

    for (idx, task) in app.tasks.iter().enumerate() {
        let selected = idx == app.inbox_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let status_color = match task.status {
            TaskStatus::Pending => app.theme.text,
            TaskStatus::InProgress => app.theme.accent,
            TaskStatus::Done => app.theme.success,
        };

        let mut spans = vec![
            Span::styled(
                format!("  {} ", status_symbol(task.status)),
                Style::default().fg(status_color).bg(row_bg),
            ),
            Span::styled(
                truncate_to_width(&task.title, area.width.saturating_sub(20) as usize),
                if selected {
                    Style::default()
                        .fg(app.theme.text)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text).bg(row_bg)
                },
            ),
        ];
        if let Some(priority) = task.priority {
            let color = match priority {
                TaskPriority::High => app.theme.error,
                TaskPriority::Medium => app.theme.warning,
                TaskPriority::Low => app.theme.info,
            };
            spans.push(Span::styled(
                format!("  {priority:?}"),
                Style::default().fg(color).bg(row_bg),
            ));
        }
        if let Some(ref who) = task.assigned_to {
            spans.push(Span::styled(
                format!("  @{who}"),
                Style::default().fg(app.theme.text_secondary).bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    if app.tasks.is_empty() && app.view_error.is_none() {
        lines.push(Line::from(Span::styled(
            "  inbox zero ✓",
            Style::default().fg(app.theme.success).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
