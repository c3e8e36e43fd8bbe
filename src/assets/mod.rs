//! # Assets Module
//!
//! Finding and preparing the animal pictures.
//!
//! ## Components
//!
//! - [`resolver`] - ordered search for an image file by bare name
//! - [`raster`] - decoding and scaling to the image viewport
//!
//! ## Search Order
//!
//! ```text
//! ./<file>
//! ./icons/<file>
//! ./src/icons/<file>
//! <executable dir>/resources/<file>
//! ```

pub mod raster;
pub mod resolver;

pub use raster::{decode, scale, PixelSize};
pub use resolver::{bundled_resource_dir, ImageOrigin, ImageResolver, ResolvedImage};
