//! Palette construction and lookup.
//!
//! [`build_palette`] turns a trained network into a [`Palette`]: channels
//! are shifted back to byte range, entries are sorted by green and a
//! green-keyed bucket index is built for faster nearest-color search.

mod builder;
mod palette;

pub use builder::build_palette;
pub use palette::{Palette, PALETTE_BYTES};
