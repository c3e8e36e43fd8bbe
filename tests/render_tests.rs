//! Rendering tests
//!
//! Draw the whole screen into ratatui's `TestBackend` and check what ends
//! up in the image and text viewports.

use image::{Rgba, RgbaImage};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::border;
use ratatui::Terminal;
use read_their_sounds::assets::ImageResolver;
use read_their_sounds::catalog::AnimalKind;
use read_their_sounds::ui::{self, theme::Theme, App, AppLayout};
use std::fs;
use tempfile::TempDir;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 36;

/// Concatenate the symbols of a rectangular region, one string per row.
fn region_text(buffer: &Buffer, area: Rect) -> String {
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Lay out, update the viewport sizes and draw, the same way the main loop does.
fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> AppLayout {
    let size = terminal.size().expect("size");
    let layout = AppLayout::new(Rect::new(0, 0, size.width, size.height));
    app.set_viewport(layout.image_pixels());
    app.set_text_viewport(layout.text_inner());
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    layout
}

fn setup(dir: &TempDir) -> (Terminal<TestBackend>, App) {
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    let app = App::new(ImageResolver::new(dir.path()), Theme::default_theme());
    (terminal, app)
}

#[test]
fn test_idle_screen_shows_title_buttons_and_placeholders() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (mut terminal, mut app) = setup(&temp_dir);
    let layout = draw(&mut terminal, &mut app);
    let buffer = terminal.backend().buffer();

    assert!(region_text(buffer, layout.title).contains("Read Their Sound"));
    assert!(region_text(buffer, layout.button_rect(AnimalKind::Dog)).contains("Dog"));
    assert!(region_text(buffer, layout.button_rect(AnimalKind::Cat)).contains("Cat"));
    assert!(region_text(buffer, layout.button_rect(AnimalKind::Cow)).contains("Cow"));
    assert!(region_text(buffer, layout.image).contains("Select an animal!"));
    assert!(region_text(buffer, layout.text).contains("Click an animal button"));
}

#[test]
fn test_missing_image_message_is_drawn() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (mut terminal, mut app) = setup(&temp_dir);
    draw(&mut terminal, &mut app);

    app.show_animal(AnimalKind::Cat);
    let layout = draw(&mut terminal, &mut app);
    let buffer = terminal.backend().buffer();

    let image_text = region_text(buffer, layout.image);
    assert!(image_text.contains("Image not found: cat.png"));
    assert!(!image_text.contains('▀'));

    let text = region_text(buffer, layout.text);
    assert!(text.contains("FUN FACT: Cats are graceful"));
    assert!(text.contains("MEOW~ MEOW~!!!"));
}

#[test]
fn test_picture_fills_image_viewport() {
    let temp_dir = TempDir::new().expect("temp dir");
    let icons = temp_dir.path().join("icons");
    fs::create_dir_all(&icons).expect("create icons");
    RgbaImage::from_pixel(5, 5, Rgba([10, 200, 30, 255]))
        .save(icons.join("dog.png"))
        .expect("save png");

    let (mut terminal, mut app) = setup(&temp_dir);
    draw(&mut terminal, &mut app);
    app.show_animal(AnimalKind::Dog);
    let layout = draw(&mut terminal, &mut app);
    let buffer = terminal.backend().buffer();

    let inner = layout.image_inner();
    for (x, y) in [
        (inner.left(), inner.top()),
        (inner.right() - 1, inner.bottom() - 1),
        (inner.left() + inner.width / 2, inner.top() + inner.height / 2),
    ] {
        let cell = &buffer[(x, y)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(10, 200, 30));
        assert_eq!(cell.bg, Color::Rgb(10, 200, 30));
    }
    assert!(!region_text(buffer, layout.image).contains("Select an animal"));
}

#[test]
fn test_switching_animals_replaces_text() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (mut terminal, mut app) = setup(&temp_dir);

    app.show_animal(AnimalKind::Dog);
    draw(&mut terminal, &mut app);
    app.show_animal(AnimalKind::Cow);
    let layout = draw(&mut terminal, &mut app);
    let text = region_text(terminal.backend().buffer(), layout.text);

    assert!(text.contains("COW"));
    assert!(text.contains("Cows are gentle"));
    assert!(!text.contains("Dogs are loyal"));
}

#[test]
fn test_footer_names_theme() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (mut terminal, mut app) = setup(&temp_dir);
    app.cycle_theme();
    let layout = draw(&mut terminal, &mut app);

    let footer = region_text(terminal.backend().buffer(), layout.footer);
    assert!(footer.contains("Theme: Catppuccin Mocha"));
}

#[test]
fn test_narrow_terminal_scrolls_to_end_of_wrapped_card() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut terminal = Terminal::new(TestBackend::new(14, 30)).expect("terminal");
    let mut app = App::new(ImageResolver::new(temp_dir.path()), Theme::default_theme());
    draw(&mut terminal, &mut app);

    app.show_animal(AnimalKind::Dog);
    for _ in 0..50 {
        app.scroll_text_down();
    }
    let layout = draw(&mut terminal, &mut app);
    let text = region_text(terminal.backend().buffer(), layout.text);

    assert!(app.text_scroll > 4, "wrapped card scrolls past its logical lines");
    assert!(text.contains("!!!"), "sound line reachable:\n{text}");
}

#[test]
fn test_card_that_fits_keeps_its_first_line() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (mut terminal, mut app) = setup(&temp_dir);
    draw(&mut terminal, &mut app);

    app.show_animal(AnimalKind::Dog);
    for _ in 0..10 {
        app.scroll_text_down();
    }
    let layout = draw(&mut terminal, &mut app);
    let text = region_text(terminal.backend().buffer(), layout.text);

    assert_eq!(app.text_scroll, 0);
    assert!(text.contains("DOG"));
    assert!(text.contains("!!!"));
}

#[test]
fn test_hovered_button_uses_hover_background() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (mut terminal, mut app) = setup(&temp_dir);
    app.hovered = Some(AnimalKind::Cat);
    let layout = draw(&mut terminal, &mut app);
    let buffer = terminal.backend().buffer();
    let theme = Theme::default_theme();

    let cat = layout.button_rect(AnimalKind::Cat);
    assert_eq!(buffer[(cat.x + 1, cat.y + 1)].bg, theme.button_hover);

    let dog = layout.button_rect(AnimalKind::Dog);
    assert_eq!(buffer[(dog.x + 1, dog.y + 1)].bg, theme.button_bg);
}

#[test]
fn test_focused_button_border_uses_accent() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (mut terminal, mut app) = setup(&temp_dir);
    app.focused = AnimalKind::Cow;
    let layout = draw(&mut terminal, &mut app);
    let buffer = terminal.backend().buffer();
    let theme = Theme::default_theme();

    let cow = layout.button_rect(AnimalKind::Cow);
    let corner = &buffer[(cow.x, cow.y)];
    assert_eq!(corner.fg, theme.accent);
    assert_eq!(corner.symbol(), border::THICK.top_left);

    for animal in [AnimalKind::Dog, AnimalKind::Cat] {
        let rect = layout.button_rect(animal);
        let corner = &buffer[(rect.x, rect.y)];
        assert_eq!(corner.fg, theme.button_border, "{animal}");
        assert_eq!(corner.symbol(), border::ROUNDED.top_left, "{animal}");
    }
}
