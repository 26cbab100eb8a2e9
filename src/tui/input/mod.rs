mod menu;
mod modals;
mod views;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, View};

/// Handle a key event. Priority mirrors the render stack: Escape
/// arbitration first, then the open modal, then the current view. View
/// input is suppressed while a transition is in flight.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.code == KeyCode::Esc {
        app.handle_escape();
        return;
    }

    if app.modal.is_some() {
        modals::handle_modal_key(app, key);
        return;
    }

    // The content area is inert during the swap window
    if app.is_transitioning() {
        return;
    }

    match app.view {
        View::Menu => menu::handle_menu_key(app, key),
        _ => views::handle_view_key(app, key),
    }
}
