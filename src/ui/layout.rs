//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! ```text
//! ┌────────────── 🐾 Read Their Sound 🔊 ──────────────┐  title
//! │ [ 🐶 Dog ]      [ 🐱 Cat ]      [ 🐄 Cow ]          │  buttons
//! │                                                    │
//! │                  image viewport                    │
//! │                                                    │
//! │                  fact text viewport                │
//! └────────────────────────────────────────────────────┘
//!   key help                                              footer
//! ```

use crate::assets::PixelSize;
use crate::catalog::AnimalKind;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

const TITLE_HEIGHT: u16 = 3;
const BUTTON_ROW_HEIGHT: u16 = 3;
const TEXT_VIEWPORT_HEIGHT: u16 = 9;
const FOOTER_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    /// One button per animal, in [`AnimalKind::ALL`] order.
    pub buttons: [Rect; 3],
    /// Image viewport including its border.
    pub image: Rect,
    /// Text viewport including its border.
    pub text: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(BUTTON_ROW_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(TEXT_VIEWPORT_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .spacing(2)
            .split(rows[1]);

        Self {
            title: rows[0],
            buttons: [columns[0], columns[1], columns[2]],
            image: rows[2],
            text: rows[3],
            footer: rows[4],
        }
    }

    /// Image viewport without its border.
    pub fn image_inner(&self) -> Rect {
        self.image.inner(Margin::new(1, 1))
    }

    /// Pixel size the current image should be scaled to.
    pub fn image_pixels(&self) -> PixelSize {
        PixelSize::of_cells(self.image_inner())
    }

    /// Text viewport without its border.
    pub fn text_inner(&self) -> Rect {
        self.text.inner(Margin::new(1, 1))
    }

    /// Visible rows of the text viewport.
    pub fn text_rows(&self) -> u16 {
        self.text_inner().height
    }

    pub fn button_rect(&self, kind: AnimalKind) -> Rect {
        self.buttons[kind.index()]
    }

    /// The animal button under a screen position, if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<AnimalKind> {
        let position = Position::new(column, row);
        AnimalKind::ALL
            .into_iter()
            .find(|kind| self.button_rect(*kind).contains(position))
    }

    pub fn in_text_viewport(&self, column: u16, row: u16) -> bool {
        self.text.contains(Position::new(column, row))
    }
}
