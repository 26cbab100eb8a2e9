use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::branch_view::title_line;

/// Render the workload view: open work per member on the current branch.
pub fn render_workload_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![title_line(app, "Workload"), Line::default()];

    if let Some(ref err) = app.view_error {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(app.theme.error).bg(bg),
        )));
    }

    let Some(ref snapshot) = app.workload else {
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    for member in &snapshot.members {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", member.user_name),
                Style::default().fg(app.theme.text).bg(bg),
            ),
            Span::styled(
                "▮".repeat(member.open_tasks.min(30)),
                Style::default().fg(app.theme.accent).bg(bg),
            ),
            Span::styled(
                format!(
                    " {} open ({} active) · {:.1}h est",
                    member.open_tasks, member.in_progress, member.estimated_hours
                ),
                Style::default().fg(app.theme.text_secondary).bg(bg),
            ),
        ]));
    }

    lines.push(Line::default());
    let unassigned_style = if snapshot.unassigned_tasks > 0 {
        Style::default().fg(app.theme.warning).bg(bg)
    } else {
        Style::default().fg(app.theme.text_secondary).bg(bg)
    };
    lines.push(Line::from(Span::styled(
        format!("  {} unassigned task(s)", snapshot.unassigned_tasks),
        unassigned_style,
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
