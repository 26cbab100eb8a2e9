use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, MENU_ITEMS};

/// Render the main menu: one row per entry, dividers between sections,
/// shortcut hints right-aligned like the tray menu's ⌘-hints.
pub fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (idx, item) in MENU_ITEMS.iter().enumerate() {
        if item.section_start {
            lines.push(Line::from(Span::styled(
                format!("  {}", "─".repeat(width.saturating_sub(4))),
                Style::default().fg(app.theme.divider).bg(bg),
            )));
        }

        let selected = idx == app.menu_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let label_style = if selected {
            Style::default()
                .fg(app.theme.text)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let label = format!("  {}", item.label);
        let hint = format!("{}  ", item.shortcut);
        let mut spans = vec![Span::styled(label.clone(), label_style)];
        let used = label.chars().count() + hint.chars().count();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.text_disabled).bg(row_bg),
        ));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
