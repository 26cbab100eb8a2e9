use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::branch_view::title_line;

/// Render the metrics dashboard for the current branch.
pub fn render_metrics_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![title_line(app, "Metrics"), Line::default()];

    if let Some(ref err) = app.view_error {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(app.theme.error).bg(bg),
        )));
    }

    if let Some(ref summary) = app.metrics {
        let rows = [
            ("total hours", format!("{:.1}", summary.total_hours)),
            ("completed", summary.completed_tasks.to_string()),
            ("in progress", summary.in_progress_tasks.to_string()),
            ("pending", summary.pending_tasks.to_string()),
            (
                "avg completion",
                format!("{:.1}h", summary.avg_completion_hours),
            ),
            (
                "productivity",
                format!("{:.0}%", summary.productivity_score),
            ),
        ];
        for (label, value) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {label:<16}"),
                    Style::default().fg(app.theme.text_secondary).bg(bg),
                ),
                Span::styled(value, Style::default().fg(app.theme.text).bg(bg)),
            ]));
        }
    }

    if !app.breakdown.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  by status",
            Style::default().fg(app.theme.text_secondary).bg(bg),
        )));
        for entry in &app.breakdown {
            // Simple horizontal bar, 30 cells at 100%
            let filled = (entry.percentage / 100.0 * 30.0).round() as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12}", entry.status),
                    Style::default().fg(app.theme.text).bg(bg),
                ),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(app.theme.accent).bg(bg),
                ),
                Span::styled(
                    format!(" {} ({:.0}%)", entry.count, entry.percentage),
                    Style::default().fg(app.theme.text_secondary).bg(bg),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
