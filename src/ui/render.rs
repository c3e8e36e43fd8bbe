use crate::catalog::AnimalKind;
use crate::ui::app::App;
use crate::ui::image_view::PictureView;
use crate::ui::layout::AppLayout;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub const WINDOW_TITLE: &str = "🐾 Read Their Sound 🔊";

const FOOTER_HELP: &str = "[1-3] Pick  [←→] Focus  [Enter] Press  [↑↓] Scroll  [t] Theme  [q] Quit";

pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    // Window background
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg)),
        frame.area(),
    );

    render_title(frame, app, layout.title);
    for animal in AnimalKind::ALL {
        render_button(frame, app, animal, layout.button_rect(animal));
    }
    render_image(frame, app, layout.image);
    render_text(frame, app, layout.text);
    render_footer(frame, app, layout.footer);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let title = Paragraph::new(Line::from(Span::styled(
        WINDOW_TITLE,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.fg_dim)),
    )
    .style(Style::default().bg(theme.bg));

    frame.render_widget(title, area);
}

fn render_button(frame: &mut Frame, app: &App, animal: AnimalKind, area: Rect) {
    let theme = app.theme;
    let is_hovered = app.hovered == Some(animal);
    let is_focused = app.focused == animal;
    let is_current = app.current_animal() == Some(animal);

    let bg = if is_hovered {
        theme.button_hover
    } else {
        theme.button_bg
    };
    let border_color = if is_focused {
        theme.accent
    } else {
        theme.button_border
    };
    let mut label_style = Style::default()
        .fg(theme.fg)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    if is_current {
        label_style = label_style.add_modifier(Modifier::UNDERLINED);
    }

    let button = Paragraph::new(Line::from(Span::styled(animal.button_label(), label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if is_focused {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(border_color)),
        )
        .style(Style::default().bg(bg));

    frame.render_widget(button, area);
}

fn render_image(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let title = match app.current_animal() {
        Some(animal) => format!(" {} ", animal.name()),
        None => " Picture ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme.fg_dim))
        .style(Style::default().bg(theme.image_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(message) = app.image_message() {
        let is_error = app.image_view().is_some();
        let style = if is_error {
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::BOLD)
        };

        // Vertically centre the single message line
        let offset = inner.height.saturating_sub(1) / 2;
        let line_area = Rect {
            y: inner.y + offset,
            height: inner.height.min(1),
            ..inner
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(message, style)))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, line_area);
        return;
    }

    if let Some(scaled) = app.image_view().and_then(|view| view.scaled()) {
        frame.render_widget(PictureView::new(scaled).background(theme.image_bg), inner);
    }
}

/// Fact card lines, styled and wrapped the way the text viewport shows them.
///
/// Carries no block, so [`Paragraph::line_count`] is the wrapped height of the
/// text alone.
pub fn fact_paragraph(app: &App) -> Paragraph<'static> {
    let theme = app.theme;
    let text = app.info_text();

    let lines: Vec<Line<'static>> = text
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 && app.current_animal().is_some() {
                Line::from(Span::styled(
                    line.to_string(),
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(line.to_string())
            }
        })
        .collect();

    Paragraph::new(lines)
        .style(Style::default().fg(theme.fg).bg(theme.text_bg))
        .wrap(Wrap { trim: false })
}

fn render_text(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = fact_paragraph(app)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Fun Fact ")
                .border_style(Style::default().fg(app.theme.fg_dim)),
        )
        .scroll((app.text_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::raw(FOOTER_HELP),
        Span::styled(
            format!("  Theme: {}", app.theme.name),
            Style::default().fg(app.theme.accent),
        ),
    ]))
    .style(Style::default().fg(app.theme.fg_dim).bg(app.theme.bg));

    frame.render_widget(footer, area);
}
