use crossterm::event::{KeyCode, KeyEvent};

use crate::io::config_io;
use crate::tui::app::{App, Modal};

/// Rows of the settings modal, top to bottom
pub const SETTINGS_ROWS: usize = 3;

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match app.modal {
        Some(Modal::RegisterUser) => handle_register_key(app, key),
        Some(Modal::CreateTask) => handle_create_task_key(app, key),
        Some(Modal::Settings) => handle_settings_key(app, key),
        Some(Modal::About) | Some(Modal::UpdateCheck) => {
            // Any confirm-ish key closes; Escape is handled upstream
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('q')) {
                app.close_modal();
            }
        }
        None => {}
    }
}

fn handle_register_key(app: &mut App, key: KeyEvent) {
    let Some(focus) = app.register_form.focus else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.register_form.focus = Some(focus.next());
        }
        KeyCode::BackTab | KeyCode::Up => {
            // Three fields, so two steps forward is one step back
            app.register_form.focus = Some(focus.next().next());
        }
        KeyCode::Enter => {
            app.submit_registration();
        }
        KeyCode::Backspace => {
            app.register_form.field_mut(focus).pop();
        }
        KeyCode::Char(c) => {
            app.register_form.field_mut(focus).push(c);
        }
        _ => {}
    }
}

fn handle_create_task_key(app: &mut App, key: KeyEvent) {
    let focus = app.task_form.focus;
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            // Two fields, so forward and backward are the same hop
            app.task_form.focus = focus.next();
        }
        KeyCode::Enter => {
            app.submit_new_task();
        }
        KeyCode::Backspace => {
            app.task_form.field_mut(focus).pop();
        }
        KeyCode::Char(c) => {
            app.task_form.field_mut(focus).push(c);
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.settings_cursor + 1 < SETTINGS_ROWS {
                app.settings_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            toggle_settings_row(app);
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
            persist_settings(app);
        }
        _ => {}
    }
}

fn toggle_settings_row(app: &mut App) {
    match app.settings_cursor {
        0 => {
            app.config.settings.show_notifications = !app.config.settings.show_notifications;
        }
        1 => {
            app.config.settings.start_at_login = !app.config.settings.start_at_login;
        }
        2 => {
            app.cycle_theme();
        }
        _ => return,
    }
    persist_settings(app);
}

fn persist_settings(app: &mut App) {
    app.config.ui.theme = Some(app.theme.name.to_string());
    if let Err(e) = config_io::write_config(&app.data_dir, &app.config) {
        app.status_message = Some(format!("settings not saved: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::MemoryBridge;
    use crate::tui::app::Modal;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_modal_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn registration_by_keystrokes() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        assert_eq!(app.modal, Some(Modal::RegisterUser));

        type_str(&mut app, "Ana");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "ana@x.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Dev");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modal, None);
        assert_eq!(app.profile.as_ref().unwrap().name, "Ana");
    }

    #[test]
    fn submitting_an_empty_form_shows_the_problem() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::RegisterUser));
        assert_eq!(app.register_form.error.as_deref(), Some("name is required"));
    }

    #[test]
    fn backspace_edits_the_focused_field() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        type_str(&mut app, "Anx");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "a");
        assert_eq!(app.register_form.name, "Ana");
    }

    fn inbox_app(dir: &TempDir) -> App {
        use crate::tui::app::{TRANSITION, View};
        crate::io::profile_io::save_profile(
            dir.path(),
            &crate::model::SessionProfile {
                id: "u-1".into(),
                name: "Ana".into(),
                role: "Dev".into(),
                email: "ana@x.com".into(),
            },
        )
        .unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        app.navigate(View::Inbox);
        app.tick(std::time::Instant::now() + TRANSITION);
        app
    }

    #[test]
    fn creating_a_task_by_keystrokes() {
        let dir = TempDir::new().unwrap();
        let mut app = inbox_app(&dir);
        app.open_modal(Modal::CreateTask);

        type_str(&mut app, "Restock bags");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Bea");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modal, None);
        assert_eq!(app.tasks[0].title, "Restock bags");
        assert_eq!(app.tasks[0].assigned_to.as_deref(), Some("Bea"));
        assert_eq!(app.inbox_cursor, 0);
    }

    #[test]
    fn creating_a_task_without_a_title_shows_the_problem() {
        let dir = TempDir::new().unwrap();
        let mut app = inbox_app(&dir);
        app.open_modal(Modal::CreateTask);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::CreateTask));
        assert_eq!(app.task_form.error.as_deref(), Some("title is required"));
    }

    #[test]
    fn reopening_the_task_form_starts_blank() {
        let dir = TempDir::new().unwrap();
        let mut app = inbox_app(&dir);
        app.open_modal(Modal::CreateTask);
        type_str(&mut app, "half-typed");
        app.close_modal();
        app.open_modal(Modal::CreateTask);
        assert_eq!(app.task_form.title, "");
    }

    #[test]
    fn settings_toggles_persist_to_config() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        app.profile = Some(crate::model::SessionProfile {
            id: "u-1".into(),
            name: "Ana".into(),
            role: "Dev".into(),
            email: "ana@x.com".into(),
        });
        app.modal = Some(Modal::Settings);

        assert!(app.config.settings.show_notifications);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.config.settings.show_notifications);

        let reread = config_io::read_config(dir.path());
        assert!(!reread.settings.show_notifications);
    }

    #[test]
    fn theme_row_cycles_palettes() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        app.profile = Some(crate::model::SessionProfile {
            id: "u-1".into(),
            name: "Ana".into(),
            role: "Dev".into(),
            email: "ana@x.com".into(),
        });
        app.modal = Some(Modal::Settings);
        let before = app.theme.name;
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_ne!(app.theme.name, before);
        // Choice is persisted for the next start
        let reread = config_io::read_config(dir.path());
        assert_eq!(reread.ui.theme.as_deref(), Some(app.theme.name));
    }

    #[test]
    fn about_closes_on_enter() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Box::new(MemoryBridge::seeded()), dir.path().to_path_buf());
        app.profile = Some(crate::model::SessionProfile {
            id: "u-1".into(),
            name: "Ana".into(),
            role: "Dev".into(),
            email: "ana@x.com".into(),
        });
        app.modal = Some(Modal::About);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, None);
    }
}
