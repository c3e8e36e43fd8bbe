//! Keyboard and mouse input.
//!
//! ## Key Bindings
//!
//! - `1` / `2` / `3` - Show dog / cat / cow
//! - `←` / `h`, `→` / `l`, `Tab` / `Shift+Tab` - Move button focus
//! - `Enter` / `Space` - Press the focused button
//! - `↑` / `k`, `↓` / `j` - Scroll the fact text
//! - `t` - Next colour theme
//! - `q` / `Q` / `Esc` - Quit
//!
//! ## Mouse
//!
//! - Left click on a button - Show that animal
//! - Pointer over a button - Hover highlight
//! - Wheel over the fact text - Scroll

use crate::catalog::AnimalKind;
use crate::ui::app::App;
use crate::ui::layout::AppLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// Apply one terminal event to the app.
pub fn handle_event(app: &mut App, event: &Event, layout: &AppLayout) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse, layout),
        _ => {}
    }
}

pub fn handle_key(app: &mut App, key: &KeyEvent) {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            if let Some(animal) = AnimalKind::from_index(index) {
                app.show_animal(animal);
            }
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            app.focus_next();
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            app.focus_previous();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.press_focused();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_text_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_text_up();
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: &MouseEvent, layout: &AppLayout) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(animal) = layout.button_at(mouse.column, mouse.row) {
                app.show_animal(animal);
            }
        }
        MouseEventKind::Moved => {
            app.hovered = layout.button_at(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown if layout.in_text_viewport(mouse.column, mouse.row) => {
            app.scroll_text_down();
        }
        MouseEventKind::ScrollUp if layout.in_text_viewport(mouse.column, mouse.row) => {
            app.scroll_text_up();
        }
        _ => {}
    }
}
