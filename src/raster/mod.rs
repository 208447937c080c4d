//! Raster module: Scan conversion of lines and triangles into a [`Buffer`].
//!
//! This module contains:
//! - [`Point`] and [`Vertex`]: Grid coordinates, without and with depth
//! - [`LineWalk`]: Bresenham walk that picks a glyph per step from the slope
//! - Triangle fill by edge functions over the bounding box
//!
//! The rasterizers are methods on [`Buffer`] (`line_set`, `line_draw`,
//! `triangle_set`, ...). Each call picks its write strategy once from the
//! buffer's [`ValidationMode`] and then writes every pixel through it.

mod line;
mod triangle;

pub use line::{LinePixel, LineWalk};

use crate::buffer::{Brush, Buffer, ValidationMode};
use crate::layout::Rect;

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (usize, usize) {
    #[inline]
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// A grid coordinate with a depth value.
///
/// Depths follow the camera convention of the depth store: the camera looks
/// down negative z, so nearer points have larger (less negative) values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Depth.
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex.
    #[inline]
    pub const fn new(x: usize, y: usize, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The grid position, without depth.
    #[inline]
    pub const fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<(usize, usize, f64)> for Vertex {
    #[inline]
    fn from((x, y, z): (usize, usize, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point> for Vertex {
    #[inline]
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0)
    }
}

/// Per-call write strategy.
///
/// Unvalidated buffers write through the panicking setters; validated ones
/// cut shapes down to the grid and drop any out-of-bounds pixel left. Under [`ValidationMode::RejectWholeShape`] a
/// shape with any vertex outside the grid never gets a plotter at all.
pub(crate) struct Plotter<'a> {
    buffer: &'a mut Buffer,
    dropping: bool,
}

impl<'a> Plotter<'a> {
    /// Pick the strategy for a shape with the given vertices.
    ///
    /// Returns `None` when the whole shape is rejected.
    pub(crate) fn new(buffer: &'a mut Buffer, vertices: &[Point]) -> Option<Self> {
        let dropping = match buffer.validation() {
            ValidationMode::None => false,
            ValidationMode::ClampOrDrop => true,
            ValidationMode::RejectWholeShape => {
                let bounds = buffer.bounds();
                if !vertices.iter().all(|v| bounds.contains(v.x, v.y)) {
                    log::trace!("rejected shape {vertices:?} outside {bounds:?}");
                    return None;
                }
                true
            }
        };
        Some(Self { buffer, dropping })
    }

    /// The region shapes are cut down to, when out-of-bounds cells are dropped.
    pub(crate) fn window(&self) -> Option<Rect> {
        self.dropping.then_some(self.buffer.bounds())
    }

    #[inline]
    pub(crate) fn plot(&mut self, x: usize, y: usize, brush: Brush) {
        if self.dropping {
            self.buffer.paint_v(x, y, brush);
        } else {
            self.buffer.paint(x, y, brush);
        }
    }

    #[inline]
    pub(crate) fn plot_z(&mut self, x: usize, y: usize, z: f64, brush: Brush) -> bool {
        if self.dropping {
            self.buffer.paint_zv(x, y, z, brush)
        } else {
            self.buffer.paint_z(x, y, z, brush)
        }
    }
}

/// Widen a grid coordinate for signed walk and edge arithmetic.
#[inline]
pub(crate) const fn wide(v: usize) -> i128 {
    v as i128
}
