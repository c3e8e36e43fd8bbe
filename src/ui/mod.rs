//! # UI Module
//!
//! This module provides the terminal user interface for the picture book.
//!
//! ## Components
//!
//! - [`App`] - Display state (idle or showing an animal), focus, scroll
//! - [`mod@render`] - Drawing the whole screen from an [`App`]
//! - [`events`] - Mapping key and mouse events onto [`App`] transitions
//! - [`layout`] - Screen geometry shared by drawing and hit-testing
//! - [`image_view`] - Half-block picture widget
//! - [`theme`] / [`config`] - Colour themes and their persistence
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              🐾 Read Their Sound 🔊              │
//! ├───────────────┬───────────────┬─────────────────┤
//! │    🐶 Dog     │    🐱 Cat     │    🐄 Cow       │
//! ├───────────────┴───────────────┴─────────────────┤
//! │                                                 │
//! │                 Image Viewport                  │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │              Fact Text Viewport                 │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## States
//!
//! - **Idle**: placeholder text, no picture
//! - **Showing(animal)**: that animal's fact card and picture, entered from
//!   any state by pressing the animal's button

pub mod app;
pub mod config;
pub mod events;
pub mod image_view;
pub mod layout;
pub mod render;
pub mod theme;

pub use app::App;
pub use events::handle_event;
pub use layout::AppLayout;
pub use render::render;
