use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the window-chrome header: app title on the left, account
/// name · role on the right, with a divider row underneath.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title = " Evolux Productivity";
    let account = match app.profile {
        Some(ref p) => format!("{} · {} ", p.name, p.role),
        None => "not signed in ".to_string(),
    };

    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(app.theme.text)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = title.chars().count() + account.chars().count();
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(
        account,
        Style::default().fg(app.theme.text_secondary).bg(bg),
    ));

    let divider = Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(app.theme.divider).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), divider]);
    frame.render_widget(paragraph, area);
}
