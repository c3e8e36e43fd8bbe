use crate::assets::{self, ImageResolver, PixelSize};
use crate::catalog::AnimalKind;
use crate::ui::render::fact_paragraph;
use crate::ui::theme::Theme;
use image::{DynamicImage, RgbaImage};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// Text viewport content before any animal is picked.
pub const TEXT_PLACEHOLDER: &str = "Click an animal button to view its picture and sound!";

/// Image viewport content before any animal is picked.
pub const IMAGE_PLACEHOLDER: &str = "🐾 Select an animal!";

/// What the image viewport holds for the animal being shown.
#[derive(Debug, Clone)]
pub enum ImageView {
    /// Decoded picture. `scaled` is `None` until the viewport has a usable size.
    Loaded {
        path: PathBuf,
        source: DynamicImage,
        scaled: Option<RgbaImage>,
    },
    /// The file was not found in any search location.
    Missing { file_name: &'static str },
    /// The file was found but could not be decoded.
    Unreadable { file_name: &'static str },
}

impl ImageView {
    /// Message drawn in place of a picture, if there is no picture to draw.
    pub fn message(&self) -> Option<String> {
        match self {
            ImageView::Loaded { .. } => None,
            ImageView::Missing { file_name } => Some(format!("Image not found: {file_name}")),
            ImageView::Unreadable { file_name } => {
                Some(format!("Image could not be loaded: {file_name}"))
            }
        }
    }

    pub fn scaled(&self) -> Option<&RgbaImage> {
        match self {
            ImageView::Loaded { scaled, .. } => scaled.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DisplayState {
    Idle,
    Showing { animal: AnimalKind, image: ImageView },
}

pub struct App {
    pub state: DisplayState,
    pub theme: &'static Theme,
    pub resolver: ImageResolver,
    /// Button with keyboard focus.
    pub focused: AnimalKind,
    /// Button under the mouse pointer.
    pub hovered: Option<AnimalKind>,
    /// First visible line of the text viewport.
    pub text_scroll: u16,
    /// Last known text viewport area, without its border.
    pub text_area: Rect,
    /// Last known pixel size of the image viewport.
    pub viewport: PixelSize,
    pub should_quit: bool,
}

impl App {
    pub fn new(resolver: ImageResolver, theme: &'static Theme) -> Self {
        Self {
            state: DisplayState::Idle,
            theme,
            resolver,
            focused: AnimalKind::Dog,
            hovered: None,
            text_scroll: 0,
            text_area: Rect::default(),
            viewport: PixelSize::default(),
            should_quit: false,
        }
    }

    /// Switch to showing `animal`, reloading and rescaling its picture.
    pub fn show_animal(&mut self, animal: AnimalKind) {
        let file_name = animal.image_file_name();
        let image = match self.resolver.resolve(file_name) {
            None => {
                tracing::warn!(animal = %animal, file = file_name, "Image not found");
                ImageView::Missing { file_name }
            }
            Some(resolved) => match assets::decode(&resolved.path) {
                Ok(source) => {
                    let scaled = self.scale_for_viewport(&source);
                    if scaled.is_none() {
                        tracing::debug!(file = file_name, "Viewport has no size yet");
                    }
                    ImageView::Loaded {
                        path: resolved.path,
                        source,
                        scaled,
                    }
                }
                Err(e) => {
                    tracing::warn!(animal = %animal, "{:#}", e);
                    ImageView::Unreadable { file_name }
                }
            },
        };

        tracing::info!(animal = %animal, "Showing animal");
        self.focused = animal;
        self.text_scroll = 0;
        self.state = DisplayState::Showing { animal, image };
    }

    /// Record the image viewport's current size, rescaling the shown picture
    /// when the size changed or scaling was deferred.
    pub fn set_viewport(&mut self, size: PixelSize) {
        let changed = size != self.viewport;
        self.viewport = size;

        if let DisplayState::Showing {
            image: ImageView::Loaded { source, scaled, .. },
            ..
        } = &mut self.state
        {
            if size.is_empty() {
                return;
            }
            if changed || scaled.is_none() {
                *scaled = Some(assets::scale(source, size));
            }
        }
    }

    /// Record the text viewport's inner area, pulling the scroll offset back
    /// if the wrapped card got shorter.
    pub fn set_text_viewport(&mut self, area: Rect) {
        self.text_area = area;
        self.text_scroll = self.text_scroll.min(self.max_text_scroll());
    }

    /// Largest scroll offset that still keeps the viewport filled: wrapped
    /// line count at the viewport width minus the visible rows.
    pub fn max_text_scroll(&self) -> u16 {
        let wrapped = fact_paragraph(self).line_count(self.text_area.width);
        let wrapped = u16::try_from(wrapped).unwrap_or(u16::MAX);
        wrapped.saturating_sub(self.text_area.height)
    }

    fn scale_for_viewport(&self, source: &DynamicImage) -> Option<RgbaImage> {
        if self.viewport.is_empty() {
            None
        } else {
            Some(assets::scale(source, self.viewport))
        }
    }

    pub fn current_animal(&self) -> Option<AnimalKind> {
        match &self.state {
            DisplayState::Idle => None,
            DisplayState::Showing { animal, .. } => Some(*animal),
        }
    }

    pub fn image_view(&self) -> Option<&ImageView> {
        match &self.state {
            DisplayState::Idle => None,
            DisplayState::Showing { image, .. } => Some(image),
        }
    }

    /// Current content of the text viewport.
    pub fn info_text(&self) -> String {
        match &self.state {
            DisplayState::Idle => TEXT_PLACEHOLDER.to_string(),
            DisplayState::Showing { animal, .. } => animal.info(),
        }
    }

    /// Current message of the image viewport, `None` when a picture is shown.
    pub fn image_message(&self) -> Option<String> {
        match &self.state {
            DisplayState::Idle => Some(IMAGE_PLACEHOLDER.to_string()),
            DisplayState::Showing { image, .. } => image.message(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn press_focused(&mut self) {
        self.show_animal(self.focused);
    }

    pub fn scroll_text_up(&mut self) {
        self.text_scroll = self.text_scroll.saturating_sub(1);
    }

    pub fn scroll_text_down(&mut self) {
        if self.text_scroll < self.max_text_scroll() {
            self.text_scroll += 1;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        tracing::info!(theme = self.theme.name, "Theme changed");
    }
}
