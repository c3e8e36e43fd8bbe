//! Keyboard and mouse event handling tests
//!
//! Tests for quit keys, picking animals by number, button focus, text
//! scrolling, theme cycling and mouse clicks / hover on the buttons.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use read_their_sounds::assets::ImageResolver;
use read_their_sounds::catalog::AnimalKind;
use read_their_sounds::ui::theme::Theme;
use read_their_sounds::ui::{handle_event, App, AppLayout};
use tempfile::TempDir;

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// Helper to create a test app with no pictures available
fn create_test_app() -> (TempDir, App) {
    let temp_dir = TempDir::new().expect("temp dir");
    let app = App::new(ImageResolver::new(temp_dir.path()), Theme::default_theme());
    (temp_dir, app)
}

fn test_layout() -> AppLayout {
    AppLayout::new(Rect::new(0, 0, 90, 40))
}

/// Layout narrow enough that every fact card wraps past the text viewport.
fn narrow_layout() -> AppLayout {
    AppLayout::new(Rect::new(0, 0, 16, 40))
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
        let (_dir, mut app) = create_test_app();
        assert!(!app.should_quit);
        handle_event(&mut app, &key_event(code), &test_layout());
        assert!(app.should_quit, "{code:?} should quit");
    }
}

#[test]
fn test_number_keys_pick_animals() {
    let (_dir, mut app) = create_test_app();
    let layout = test_layout();

    handle_event(&mut app, &key_event(KeyCode::Char('2')), &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Cat));

    handle_event(&mut app, &key_event(KeyCode::Char('3')), &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Cow));

    handle_event(&mut app, &key_event(KeyCode::Char('1')), &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Dog));
    assert_eq!(app.info_text(), AnimalKind::Dog.info());

    // Out of range digit is ignored
    handle_event(&mut app, &key_event(KeyCode::Char('4')), &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Dog));
}

#[test]
fn test_key_release_is_ignored() {
    let (_dir, mut app) = create_test_app();
    let release = Event::Key(KeyEvent {
        code: KeyCode::Char('2'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    });

    handle_event(&mut app, &release, &test_layout());
    assert_eq!(app.current_animal(), None);
}

#[test]
fn test_focus_and_press() {
    let (_dir, mut app) = create_test_app();
    let layout = test_layout();
    assert_eq!(app.focused, AnimalKind::Dog);

    handle_event(&mut app, &key_event(KeyCode::Right), &layout);
    handle_event(&mut app, &key_event(KeyCode::Tab), &layout);
    assert_eq!(app.focused, AnimalKind::Cow);
    // Focus alone does not change what is shown
    assert_eq!(app.current_animal(), None);

    handle_event(&mut app, &key_event(KeyCode::Enter), &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Cow));

    handle_event(&mut app, &key_event(KeyCode::Char('h')), &layout);
    handle_event(&mut app, &key_event(KeyCode::Char(' ')), &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Cat));

    handle_event(&mut app, &key_event(KeyCode::BackTab), &layout);
    assert_eq!(app.focused, AnimalKind::Dog);
}

#[test]
fn test_picking_by_number_moves_focus() {
    let (_dir, mut app) = create_test_app();
    handle_event(&mut app, &key_event(KeyCode::Char('3')), &test_layout());
    assert_eq!(app.focused, AnimalKind::Cow);
}

#[test]
fn test_text_scroll_keys() {
    let (_dir, mut app) = create_test_app();
    let layout = narrow_layout();
    handle_event(&mut app, &key_event(KeyCode::Char('1')), &layout);
    app.set_text_viewport(layout.text_inner());

    handle_event(&mut app, &key_event(KeyCode::Down), &layout);
    handle_event(&mut app, &key_event(KeyCode::Char('j')), &layout);
    assert_eq!(app.text_scroll, 2);

    handle_event(&mut app, &key_event(KeyCode::Up), &layout);
    assert_eq!(app.text_scroll, 1);
    handle_event(&mut app, &key_event(KeyCode::Char('k')), &layout);
    handle_event(&mut app, &key_event(KeyCode::Char('k')), &layout);
    assert_eq!(app.text_scroll, 0);
}

#[test]
fn test_theme_key_cycles() {
    let (_dir, mut app) = create_test_app();
    handle_event(&mut app, &key_event(KeyCode::Char('t')), &test_layout());
    assert_eq!(app.theme.name, Theme::default_theme().next().name);
}

#[test]
fn test_mouse_click_on_each_button() {
    let (_dir, mut app) = create_test_app();
    let layout = test_layout();

    for animal in [AnimalKind::Cow, AnimalKind::Dog, AnimalKind::Cat] {
        let rect = layout.button_rect(animal);
        let click = mouse_event(
            MouseEventKind::Down(MouseButton::Left),
            rect.x + rect.width / 2,
            rect.y + 1,
        );
        handle_event(&mut app, &click, &layout);
        assert_eq!(app.current_animal(), Some(animal));
        assert_eq!(app.info_text(), animal.info());
    }
}

#[test]
fn test_click_outside_buttons_keeps_state() {
    let (_dir, mut app) = create_test_app();
    let layout = test_layout();
    handle_event(&mut app, &key_event(KeyCode::Char('2')), &layout);

    let click = mouse_event(
        MouseEventKind::Down(MouseButton::Left),
        4,
        layout.image.y + 3,
    );
    handle_event(&mut app, &click, &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Cat));

    // Right click on a button does nothing
    let rect = layout.button_rect(AnimalKind::Dog);
    let right_click = mouse_event(MouseEventKind::Down(MouseButton::Right), rect.x + 1, rect.y + 1);
    handle_event(&mut app, &right_click, &layout);
    assert_eq!(app.current_animal(), Some(AnimalKind::Cat));
}

#[test]
fn test_mouse_hover_tracks_button() {
    let (_dir, mut app) = create_test_app();
    let layout = test_layout();
    let rect = layout.button_rect(AnimalKind::Cat);

    handle_event(
        &mut app,
        &mouse_event(MouseEventKind::Moved, rect.x + 2, rect.y + 1),
        &layout,
    );
    assert_eq!(app.hovered, Some(AnimalKind::Cat));

    handle_event(
        &mut app,
        &mouse_event(MouseEventKind::Moved, 1, layout.text.y + 1),
        &layout,
    );
    assert_eq!(app.hovered, None);
}

#[test]
fn test_mouse_wheel_scrolls_only_over_text() {
    let (_dir, mut app) = create_test_app();
    let layout = narrow_layout();
    handle_event(&mut app, &key_event(KeyCode::Char('1')), &layout);
    app.set_text_viewport(layout.text_inner());

    handle_event(
        &mut app,
        &mouse_event(MouseEventKind::ScrollDown, 2, layout.image.y + 1),
        &layout,
    );
    assert_eq!(app.text_scroll, 0);

    handle_event(
        &mut app,
        &mouse_event(MouseEventKind::ScrollDown, 2, layout.text.y + 1),
        &layout,
    );
    assert_eq!(app.text_scroll, 1);

    handle_event(
        &mut app,
        &mouse_event(MouseEventKind::ScrollUp, 2, layout.text.y + 1),
        &layout,
    );
    assert_eq!(app.text_scroll, 0);
}
