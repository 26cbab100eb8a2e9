use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, MENU_ITEMS};

pub(super) fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.menu_cursor + 1 < MENU_ITEMS.len() {
                app.menu_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.menu_cursor = app.menu_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let action = MENU_ITEMS[app.menu_cursor].action;
            app.activate_menu_item(action);
        }
        KeyCode::Char(c) => {
            if let Some(item) = MENU_ITEMS.iter().find(|i| i.shortcut == c) {
                app.activate_menu_item(item.action);
            }
        }
        _ => {}
    }
}
