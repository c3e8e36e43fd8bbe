//! # Catalog Module
//!
//! The fixed set of animals the app can show.
//!
//! Each animal differs only in data, so the catalog is a closed enum
//! ([`AnimalKind`]) plus a static table of [`AnimalRecord`]s. Records are
//! `'static` and never change while the program runs.
//!
//! | Kind | Image | Sound |
//! |------|-------|-------|
//! | Dog | `dog.png` | Woof! Woof! |
//! | Cat | `cat.png` | Meow~ Meow~ |
//! | Cow | `cow.png` | Moo~ Moo~ |

pub mod animal;

pub use animal::{AnimalKind, AnimalRecord};
