//! Read Their Sounds - a tiny terminal picture book
//!
//! Pick a dog, a cat or a cow and the app shows its picture next to a fun
//! fact and the sound it makes.
//!
//! - [`catalog`] - the fixed animal records
//! - [`assets`] - finding, decoding and scaling the pictures
//! - [`ui`] - display state, input handling and drawing

pub mod assets;
pub mod catalog;
pub mod ui;
