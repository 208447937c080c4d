//! Buffer module: The cell grid and its depth store.
//!
//! This module contains:
//! - [`Cell`]: One glyph plus a palette colour pair
//! - [`Brush`]: The subset of a cell a write touches
//! - [`Buffer`]: The grid, its setter families, projection and frame encoding
//! - [`BufferConfig`]: Dimensions, colour mode and validation policy

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
mod config;
mod scroll;

pub use buffer::{Buffer, DEPTH_FAR};
pub use cell::{Brush, Cell, Channels, COLOUR_CELL_WIDTH, DEFAULT_BG, DEFAULT_FG, MONO_CELL_WIDTH};
pub use config::{BufferConfig, ValidationMode};
