use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::truncate_to_width;

/// Render the branch picker: one row per branch with manager and hours,
/// a marker on the currently selected branch.
pub fn render_branch_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![title_line(app, "Select Branch"), Line::default()];

    if let Some(ref err) = app.view_error {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(app.theme.error).bg(bg),
        )));
    }

    for (idx, branch) in app.branches.iter().enumerate() {
        let selected = idx == app.branch_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let marker = if app.selected_branch.as_deref() == Some(branch.id.as_str()) {
            "●"
        } else {
            " "
        };
        let hours = branch
            .working_hours
            .as_ref()
            .map(|h| format!("{}–{}", h.start, h.end))
            .unwrap_or_default();
        let text = truncate_to_width(
            &format!(
                " {marker} {}  manager: {}  {hours}",
                branch.name, branch.manager
            ),
            area.width as usize,
        );
        let style = if selected {
            Style::default()
                .fg(app.theme.text)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    if app.branches.is_empty() && app.view_error.is_none() {
        lines.push(Line::from(Span::styled(
            "  no branches",
            Style::default().fg(app.theme.text_secondary).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

pub(super) fn title_line<'a>(app: &App, title: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(app.theme.accent)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}
