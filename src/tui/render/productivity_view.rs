use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::branch_view::title_line;

/// Render the personal productivity view: the user's summary plus a
/// per-day completion log.
pub fn render_productivity_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![title_line(app, "Your Productivity"), Line::default()];

    if let Some(ref err) = app.view_error {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(app.theme.error).bg(bg),
        )));
    }

    let Some(ref report) = app.productivity else {
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    lines.push(Line::from(vec![
        Span::styled(
            "  score ",
            Style::default().fg(app.theme.text_secondary).bg(bg),
        ),
        Span::styled(
            format!("{:.0}%", report.summary.productivity_score),
            Style::default().fg(app.theme.accent).bg(bg),
        ),
        Span::styled(
            format!(
                "   {} done · {} open · {:.1}h logged",
                report.summary.completed_tasks,
                report.summary.pending_tasks + report.summary.in_progress_tasks,
                report.summary.total_hours
            ),
            Style::default().fg(app.theme.text).bg(bg),
        ),
    ]));

    if !report.daily.is_empty() {
        lines.push(Line::default());
        for day in &report.daily {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}  ", day.date),
                    Style::default().fg(app.theme.text_secondary).bg(bg),
                ),
                Span::styled(
                    "▪".repeat(day.tasks_completed.min(20)),
                    Style::default().fg(app.theme.success).bg(bg),
                ),
                Span::styled(
                    format!(" {} task(s), {:.1}h", day.tasks_completed, day.hours),
                    Style::default().fg(app.theme.text).bg(bg),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
