//! atlas-recolor - key-color masks for texture atlases
//!
//! Command-line front end for the `atlas-mask` crate: PNG I/O, config
//! loading, and the generate/apply run modes.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
