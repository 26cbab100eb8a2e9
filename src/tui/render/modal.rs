use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Modal, RegisterField, TaskField};

use super::helpers::centered_rect;

fn chrome(modal: Modal) -> (&'static str, u16) {
    match modal {
        Modal::Settings => ("Settings", 8),
        Modal::About => ("About Evolux", 8),
        Modal::UpdateCheck => ("Check for updates", 6),
        Modal::CreateTask => ("New Task", 10),
        Modal::RegisterUser => ("Welcome — create your profile", 10),
    }
}

/// Where a modal's content sits inside `area`. Clicks landing outside this
/// rect count as overlay clicks; clicks inside never dismiss.
pub fn modal_rect(modal: Modal, area: Rect) -> Rect {
    let (_, height) = chrome(modal);
    centered_rect(46, height, area)
}

/// Render the active modal centered over the dimmed content.
pub fn render_modal(frame: &mut Frame, app: &App, modal: Modal, area: Rect) {
    let (title, _) = chrome(modal);
    let rect = modal_rect(modal, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.focus).bg(app.theme.surface))
        .style(Style::default().bg(app.theme.surface));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = match modal {
        Modal::Settings => settings_lines(app),
        Modal::About => about_lines(app),
        Modal::UpdateCheck => update_lines(app),
        Modal::CreateTask => create_task_lines(app),
        Modal::RegisterUser => register_lines(app),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn settings_lines(app: &App) -> Vec<Line<'static>> {
    let rows = [
        (
            "Show notifications",
            if app.config.settings.show_notifications {
                "[on]"
            } else {
                "[off]"
            }
            .to_string(),
        ),
        (
            "Start at login",
            if app.config.settings.start_at_login {
                "[on]"
            } else {
                "[off]"
            }
            .to_string(),
        ),
        ("Theme", app.theme.name.to_string()),
    ];

    let mut lines = Vec::new();
    for (idx, (label, value)) in rows.into_iter().enumerate() {
        let selected = idx == app.settings_cursor;
        let bg = if selected {
            app.theme.selection_bg
        } else {
            app.theme.surface
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {label:<22}"),
                Style::default().fg(app.theme.text).bg(bg),
            ),
            Span::styled(value, Style::default().fg(app.theme.accent).bg(bg)),
        ]));
    }
    lines.push(Line::default());
    lines.push(hint_line(app, "space toggle · t theme · esc close"));
    lines
}

fn about_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            " Evolux Productivity",
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" Version {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(app.theme.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            " A tray-style productivity shell for your terminal.",
            Style::default().fg(app.theme.text),
        )),
        Line::default(),
        hint_line(app, "enter close"),
    ]
}

fn update_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" Evolux v{} is up to date.", env!("CARGO_PKG_VERSION")),
            Style::default().fg(app.theme.success),
        )),
        Line::default(),
        hint_line(app, "enter close"),
    ]
}

fn create_task_lines(app: &App) -> Vec<Line<'static>> {
    let form = &app.task_form;
    let branch = app.current_branch_id().unwrap_or_default();
    let mut lines = vec![Line::from(Span::styled(
        format!(" branch: {branch}"),
        Style::default().fg(app.theme.text_secondary),
    ))];
    lines.push(Line::default());

    for (field, label, value) in [
        (TaskField::Title, "Title", &form.title),
        (TaskField::Assignee, "Assignee", &form.assignee),
    ] {
        let focused = form.focus == field;
        let cursor = if focused { "▌" } else { "" };
        let label_style = if focused {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_secondary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {label:<9}"), label_style),
            Span::styled(format!("{value}{cursor}"), Style::default().fg(app.theme.text)),
        ]));
    }

    lines.push(Line::default());
    if let Some(ref err) = form.error {
        lines.push(Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(app.theme.error),
        )));
    } else {
        lines.push(hint_line(app, "tab field · enter create · esc cancel"));
    }
    lines
}

fn register_lines(app: &App) -> Vec<Line<'static>> {
    let form = &app.register_form;
    let mut lines = vec![Line::from(Span::styled(
        " A profile is required to continue.",
        Style::default().fg(app.theme.text_secondary),
    ))];
    lines.push(Line::default());

    for (field, label, value) in [
        (RegisterField::Name, "Name", &form.name),
        (RegisterField::Email, "Email", &form.email),
        (RegisterField::Role, "Role", &form.role),
    ] {
        let focused = form.focus == Some(field);
        let cursor = if focused { "▌" } else { "" };
        let label_style = if focused {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_secondary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {label:<7}"), label_style),
            Span::styled(format!("{value}{cursor}"), Style::default().fg(app.theme.text)),
        ]));
    }

    lines.push(Line::default());
    if let Some(ref err) = form.error {
        lines.push(Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(app.theme.error),
        )));
    } else {
        lines.push(hint_line(app, "tab next field · enter submit"));
    }
    lines
}

fn hint_line(app: &App, hint: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {hint}"),
        Style::default().fg(app.theme.text_disabled),
    ))
}
