//! High-level API: the [`Recolorer`] builder.

mod builder;

pub use builder::{Recolorer, ValidRecolorer};
