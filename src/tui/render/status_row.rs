use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Modal, View};

/// Render the status row: a transient message on the left, contextual key
/// hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let message = app
        .status_message
        .clone()
        .unwrap_or_default();

    let hint = match app.modal {
        Some(Modal::RegisterUser) => "tab field · enter submit",
        Some(Modal::CreateTask) => "tab field · enter create · esc cancel",
        Some(Modal::Settings) => "j/k · space toggle · esc close",
        Some(_) => "esc close",
        None => match app.view {
            View::Menu => "j/k · enter · q quit",
            View::SelectBranch => "j/k · enter select · esc back",
            View::Inbox => "n new · space status · d delete · r refresh · esc back",
            View::Notifications => "enter read · a all read · esc back",
            View::Metrics | View::Productivity | View::Workload => "r refresh · esc back",
        },
    };

    let mut spans = vec![Span::styled(
        format!(" {message}"),
        Style::default().fg(app.theme.text_secondary).bg(bg),
    )];
    let used = message.chars().count() + 1 + hint.chars().count() + 1;
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(
        format!("{hint} "),
        Style::default().fg(app.theme.text_disabled).bg(bg),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
