//! Buffer configuration.

use super::cell::Cell;
use crate::terminal::Geometry;
use std::io;

/// How the line and triangle rasterizers treat out-of-bounds coordinates.
///
/// Single-cell setters ignore the mode and carry their policy in their name:
/// `set_glyph` and `set_glyph_z` panic outside the grid, while `set_glyph_v`
/// and `set_glyph_zv` drop the write. The same holds for the other setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// No checks. A shape that reaches outside the grid panics at its first
    /// out-of-bounds cell.
    #[default]
    None,
    /// Cut each shape down to the grid and draw the part that is left.
    ClampOrDrop,
    /// Draw nothing if any vertex of the line or triangle is out of bounds.
    /// Shapes inside the grid are drawn as with [`ValidationMode::ClampOrDrop`].
    RejectWholeShape,
}

/// Configuration for a [`Buffer`](super::Buffer).
///
/// Fixed once the buffer is allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferConfig {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// Whether cells carry colour codes.
    pub colour: bool,
    /// Out-of-bounds policy.
    pub validation: ValidationMode,
    /// Distance from the camera to the screen plane, used by perspective projection.
    pub screen: f64,
    /// Cell used to fill the grid on allocation, clear and scroll.
    pub blank: Cell,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 23,
            colour: false,
            validation: ValidationMode::None,
            screen: 1.0,
            blank: Cell::BLANK,
        }
    }
}

impl BufferConfig {
    /// Set the dimensions (builder pattern).
    #[must_use]
    pub const fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable colour (builder pattern).
    #[must_use]
    pub const fn with_colour(mut self, colour: bool) -> Self {
        self.colour = colour;
        self
    }

    /// Set the validation mode (builder pattern).
    #[must_use]
    pub const fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Set the screen distance (builder pattern).
    #[must_use]
    pub const fn with_screen(mut self, screen: f64) -> Self {
        self.screen = screen;
        self
    }

    /// Set the blank cell (builder pattern).
    #[must_use]
    pub const fn with_blank(mut self, blank: Cell) -> Self {
        self.blank = blank;
        self
    }

    /// Size the grid to the terminal reported by `geometry`.
    pub fn fit<G: Geometry + ?Sized>(mut self, geometry: &G) -> io::Result<Self> {
        let (height, width) = geometry.size()?;
        self.height = height;
        self.width = width;
        Ok(self)
    }
}
