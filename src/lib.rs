//! # Glyphgrid
//!
//! A z-buffered character-cell graphics buffer for terminals.
//!
//! Glyphgrid keeps an in-memory grid of styled cells (a glyph plus a 256-colour
//! palette pair and a depth value), rasterizes lines and triangles into it,
//! and flushes the grid to a terminal as one positioned write.
//!
//! ## Core Concepts
//!
//! - **Brushes**: Every write carries some subset of glyph, foreground and background
//! - **Depth test**: `_z` writes land only when their depth is not behind the stored one
//! - **Validation**: Out-of-bounds writes panic, drop per cell, or reject the whole shape
//! - **Slope glyphs**: Lines pick `_ | / \ +` from their direction
//! - **Fixed-width encoding**: A colour cell is always 23 bytes on the wire
//!
//! ## Example
//!
//! ```rust
//! use glyphgrid::{Brush, Buffer, BufferConfig};
//!
//! let mut buffer = Buffer::with_config(
//!     BufferConfig::default().with_size(10, 5).with_colour(true),
//! );
//! buffer.alloc()?;
//!
//! buffer.line_draw((0, 0), (9, 4), Brush::colour(196, 0));
//! buffer.triangle_set((0, 4), (9, 4), (5, 0), Brush::bg(21));
//!
//! let mut out = Vec::new();
//! buffer.render(&mut out, 1)?;
//! # Ok::<(), glyphgrid::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod layout;
pub mod math;
pub mod raster;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Brush, Buffer, BufferConfig, Cell, Channels, ValidationMode, DEPTH_FAR};
pub use error::{AllocError, Error, Result};
pub use layout::Rect;
pub use math::Vec3;
pub use raster::{Point, Vertex};
pub use terminal::{Geometry, OutputBuffer, TerminalGeometry};
