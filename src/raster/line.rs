//! Line rasterization with slope-dependent glyphs.
//!
//! A line is walked one cell at a time with Bresenham's integer error term.
//! Each cell gets a glyph that sketches the local slope:
//!
//! | Direction | Glyph |
//! |---|---|
//! | horizontal | `_` |
//! | vertical | `\|` |
//! | single point | `+` |
//! | rising (right end higher on screen) | `/` |
//! | falling (right end lower on screen) | `\` |
//!
//! Shallow and steep lines mix the axis glyph with the slope glyph: a cell
//! gets the slope glyph when the walk stepped along the minor axis to reach
//! it, and the axis glyph otherwise. The first cell always gets the axis glyph.
//!
//! Endpoints are ordered left to right before walking. Some cases walk from
//! the right endpoint back to the left one so the error term steps in the
//! same places whichever way the caller passed the endpoints.
//!
//! Validated buffers clip the walk along its driving axis, so a line with a
//! far-off endpoint jumps straight to its first on-grid cell.

use super::{wide, Plotter, Point, Vertex};
use crate::buffer::{Brush, Buffer};
use crate::layout::Rect;

const FLAT: char = '_';
const UPRIGHT: char = '|';
const DOT: char = '+';
const RISING: char = '/';
const FALLING: char = '\\';

/// One cell visited by a [`LineWalk`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePixel {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Depth, linearly interpolated along the driving axis.
    pub z: f64,
    /// Glyph picked from the slope.
    pub glyph: char,
}

/// Iterator over the cells of a line, endpoints included.
///
/// Every cell lies between the two endpoints, so any pair of grid
/// coordinates can be walked. [`LineWalk::clipped`] cuts a walk down to the
/// cells a grid can show without visiting the rest.
///
/// ```
/// use glyphgrid::raster::LineWalk;
/// use glyphgrid::Vertex;
///
/// let glyphs: String = LineWalk::new(Vertex::new(0, 0, 0.0), Vertex::new(3, 3, 0.0))
///     .map(|pixel| pixel.glyph)
///     .collect();
/// assert_eq!(glyphs, "\\\\\\\\");
/// ```
#[derive(Debug, Clone)]
pub struct LineWalk {
    origin: (i128, i128),
    origin_z: f64,
    dz: f64,
    major: (i128, i128),
    minor: (i128, i128),
    steps: u128,
    /// Minor-axis span of a stepped walk.
    span: Option<u128>,
    base: char,
    turn: char,
    index: u128,
    end: u128,
    x: i128,
    y: i128,
    error: i128,
    glyph: char,
}

impl LineWalk {
    /// Plan the walk between two vertices.
    pub fn new(from: Vertex, to: Vertex) -> Self {
        let (a, b) = if from.x > to.x { (to, from) } else { (from, to) };
        let dx = b.x - a.x;

        if dx == 0 {
            let (low, high) = if a.y > b.y { (b, a) } else { (a, b) };
            let glyph = if a.y == b.y { DOT } else { UPRIGHT };
            return Self::straight(low, high.z, high.y - low.y, (0, 1), glyph);
        }

        if a.y == b.y {
            return Self::straight(a, b.z, dx, (1, 0), FLAT);
        }

        if a.y > b.y {
            let dy = a.y - b.y;
            match dx.cmp(&dy) {
                std::cmp::Ordering::Greater => {
                    Self::stepped(b, a.z, dx, dy, (-1, 0), (0, 1), FLAT, RISING)
                }
                std::cmp::Ordering::Equal => Self::straight(a, b.z, dx, (1, -1), RISING),
                std::cmp::Ordering::Less => {
                    Self::stepped(b, a.z, dy, dx, (0, 1), (-1, 0), UPRIGHT, RISING)
                }
            }
        } else {
            let dy = b.y - a.y;
            match dx.cmp(&dy) {
                std::cmp::Ordering::Greater => {
                    Self::stepped(a, b.z, dx, dy, (1, 0), (0, 1), FLAT, FALLING)
                }
                std::cmp::Ordering::Equal => Self::straight(a, b.z, dx, (1, 1), FALLING),
                std::cmp::Ordering::Less => {
                    Self::stepped(b, a.z, dy, dx, (0, -1), (-1, 0), UPRIGHT, FALLING)
                }
            }
        }
    }

    /// A walk that only ever moves along `major`.
    fn straight(start: Vertex, end_z: f64, steps: usize, major: (i128, i128), glyph: char) -> Self {
        let steps = steps as u128;
        Self {
            origin: (wide(start.x), wide(start.y)),
            origin_z: start.z,
            dz: slope(start.z, end_z, steps),
            major,
            minor: (0, 0),
            steps,
            span: None,
            base: glyph,
            turn: glyph,
            index: 0,
            end: steps + 1,
            x: wide(start.x),
            y: wide(start.y),
            error: 0,
            glyph,
        }
    }

    /// A walk along `major` that also moves along `minor` whenever the
    /// error term goes positive.
    #[allow(clippy::too_many_arguments)]
    fn stepped(
        start: Vertex,
        end_z: f64,
        steps: usize,
        span: usize,
        major: (i128, i128),
        minor: (i128, i128),
        base: char,
        turn: char,
    ) -> Self {
        let mut walk = Self {
            minor,
            span: Some(span as u128),
            turn,
            ..Self::straight(start, end_z, steps, major, base)
        };
        walk.seek(0);
        walk
    }

    /// Restrict the walk to the cells whose driving-axis coordinate lies
    /// inside `bounds`.
    ///
    /// The cells kept are exactly the ones the full walk would visit there.
    /// Cells outside `bounds` on the other axis are still produced.
    #[must_use]
    pub fn clipped(mut self, bounds: Rect) -> Self {
        if bounds.is_empty() {
            self.end = self.index;
            return self;
        }
        let (start, direction, low, high) = if self.major.0 == 0 {
            (self.origin.1, self.major.1, bounds.y, bounds.bottom())
        } else {
            (self.origin.0, self.major.0, bounds.x, bounds.right())
        };
        let (low, high) = (wide(low), wide(high) - 1);
        let (first, last) = if direction > 0 {
            (low - start, high - start)
        } else {
            (start - high, start - low)
        };
        let first = first.max(self.index as i128);
        let last = last.min(self.end as i128 - 1);
        if first > last {
            self.end = self.index;
        } else {
            self.end = last as u128 + 1;
            self.seek(first as u128);
        }
        self
    }

    /// Jump to the `index`-th cell of the full walk.
    fn seek(&mut self, index: u128) {
        let along = index as i128;
        self.index = index;
        self.x = self.origin.0 + self.major.0 * along;
        self.y = self.origin.1 + self.major.1 * along;
        self.glyph = self.base;
        if let Some(span) = self.span {
            let (taken, error) = bresenham(self.steps, span, index);
            self.x += self.minor.0 * taken as i128;
            self.y += self.minor.1 * taken as i128;
            self.error = error;
            if index > 0 && bresenham(self.steps, span, index - 1).0 < taken {
                self.glyph = self.turn;
            }
        }
    }
}

/// Minor-axis steps taken to reach cell `index` of a stepped walk, and the
/// error term tested after emitting that cell.
///
/// Starting from `2 * span - steps` and adding `2 * span` per cell, the error
/// goes positive exactly when `index * span / steps` rounds (half down) past
/// the steps already taken.
fn bresenham(steps: u128, span: u128, index: u128) -> (u128, i128) {
    let product = span * index;
    let (whole, rest) = (product / steps, product % steps);
    let carry = (2 * rest + steps - 1) / (2 * steps);
    let error = 2 * (rest as i128 + span as i128 - (steps * carry) as i128) - steps as i128;
    (whole + carry, error)
}

#[inline]
fn slope(from: f64, to: f64, steps: u128) -> f64 {
    if steps == 0 {
        0.0
    } else {
        (to - from) / steps as f64
    }
}

impl Iterator for LineWalk {
    type Item = LinePixel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }

        let pixel = LinePixel {
            x: usize::try_from(self.x).ok()?,
            y: usize::try_from(self.y).ok()?,
            z: (self.index as f64).mul_add(self.dz, self.origin_z),
            glyph: self.glyph,
        };
        self.index += 1;

        if let Some(span) = self.span {
            if self.error > 0 {
                self.x += self.minor.0;
                self.y += self.minor.1;
                self.error -= 2 * self.steps as i128;
                self.glyph = self.turn;
            } else {
                self.glyph = self.base;
            }
            self.error += 2 * span as i128;
        }

        self.x += self.major.0;
        self.y += self.major.1;
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end.saturating_sub(self.index));
        (remaining.unwrap_or(usize::MAX), remaining.ok())
    }
}

impl Plotter<'_> {
    /// The walk from `from` to `to`, cut down to the grid when this plotter
    /// drops out-of-bounds cells.
    fn walk(&self, from: Vertex, to: Vertex) -> LineWalk {
        let walk = LineWalk::new(from, to);
        match self.window() {
            Some(bounds) => walk.clipped(bounds),
            None => walk,
        }
    }
}

impl Buffer {
    /// Write `brush` to every cell of the line from `from` to `to`.
    ///
    /// ```
    /// use glyphgrid::{Buffer, BufferConfig};
    ///
    /// let mut buffer = Buffer::with_config(BufferConfig::default().with_size(3, 1));
    /// buffer.alloc().unwrap();
    /// buffer.line_set((0, 0), (2, 0), '=');
    /// assert_eq!(buffer.to_text(), "===");
    /// ```
    pub fn line_set(&mut self, from: impl Into<Point>, to: impl Into<Point>, brush: impl Into<Brush>) {
        let (from, to, brush) = (from.into(), to.into(), brush.into());
        let Some(mut plotter) = Plotter::new(self, &[from, to]) else {
            return;
        };
        for pixel in plotter.walk(from.into(), to.into()) {
            plotter.plot(pixel.x, pixel.y, brush);
        }
    }

    /// Draw the line from `from` to `to` with slope glyphs.
    ///
    /// Each cell is first blanked with the colour channels of `paint` (pass
    /// [`Brush::NONE`] to keep existing colours), then stamped with its glyph.
    pub fn line_draw(&mut self, from: impl Into<Point>, to: impl Into<Point>, paint: Brush) {
        let (from, to) = (from.into(), to.into());
        let Some(mut plotter) = Plotter::new(self, &[from, to]) else {
            return;
        };
        let clear = paint.colours_only().with_glyph(' ');
        for pixel in plotter.walk(from.into(), to.into()) {
            plotter.plot(pixel.x, pixel.y, clear);
            plotter.plot(pixel.x, pixel.y, Brush::glyph(pixel.glyph));
        }
    }

    /// Depth-gated [`Buffer::line_set`], with depth interpolated along the line.
    pub fn line_set_z(&mut self, from: impl Into<Vertex>, to: impl Into<Vertex>, brush: impl Into<Brush>) {
        let (from, to, brush) = (from.into(), to.into(), brush.into());
        let Some(mut plotter) = Plotter::new(self, &[from.point(), to.point()]) else {
            return;
        };
        for pixel in plotter.walk(from, to) {
            plotter.plot_z(pixel.x, pixel.y, pixel.z, brush);
        }
    }

    /// Depth-gated [`Buffer::line_draw`]. Both passes are depth tested.
    pub fn line_draw_z(&mut self, from: impl Into<Vertex>, to: impl Into<Vertex>, paint: Brush) {
        let (from, to) = (from.into(), to.into());
        let Some(mut plotter) = Plotter::new(self, &[from.point(), to.point()]) else {
            return;
        };
        let clear = paint.colours_only().with_glyph(' ');
        for pixel in plotter.walk(from, to) {
            plotter.plot_z(pixel.x, pixel.y, pixel.z, clear);
            plotter.plot_z(pixel.x, pixel.y, pixel.z, Brush::glyph(pixel.glyph));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{BufferConfig, ValidationMode, DEPTH_FAR};

    fn walk(from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize, char)> {
        LineWalk::new(Point::from(from).into(), Point::from(to).into())
            .map(|p| (p.x, p.y, p.glyph))
            .collect()
    }

    fn mono(width: usize, height: usize) -> Buffer {
        let mut buffer = Buffer::with_config(BufferConfig::default().with_size(width, height));
        buffer.alloc().unwrap();
        buffer
    }

    fn colour(width: usize, height: usize) -> Buffer {
        let mut buffer = Buffer::with_config(
            BufferConfig::default()
                .with_size(width, height)
                .with_colour(true),
        );
        buffer.alloc().unwrap();
        buffer
    }

    #[test]
    fn test_horizontal_draw() {
        let mut buffer = mono(10, 10);
        buffer.line_draw((0, 0), (4, 0), Brush::NONE);
        for x in 0..=4 {
            assert_eq!(buffer.get(x, 0).unwrap().glyph(), '_');
        }
        let drawn = buffer.cells().iter().filter(|c| c.glyph() != ' ').count();
        assert_eq!(drawn, 5);
    }

    #[test]
    fn test_falling_diagonal_draw() {
        let mut buffer = mono(10, 10);
        buffer.line_draw((0, 0), (3, 3), Brush::NONE);
        for i in 0..=3 {
            assert_eq!(buffer.get(i, i).unwrap().glyph(), '\\');
        }
        assert_eq!(buffer.get(1, 0).unwrap().glyph(), ' ');
    }

    #[test]
    fn test_rising_diagonal() {
        assert_eq!(walk((0, 3), (3, 0)), vec![(0, 3, '/'), (1, 2, '/'), (2, 1, '/'), (3, 0, '/')]);
    }

    #[test]
    fn test_vertical_and_point() {
        assert_eq!(walk((2, 3), (2, 1)), vec![(2, 1, '|'), (2, 2, '|'), (2, 3, '|')]);
        assert_eq!(walk((5, 5), (5, 5)), vec![(5, 5, '+')]);
    }

    #[test]
    fn test_shallow_falling() {
        assert_eq!(
            walk((0, 0), (4, 2)),
            vec![(0, 0, '_'), (1, 0, '_'), (2, 1, '\\'), (3, 1, '_'), (4, 2, '\\')]
        );
    }

    #[test]
    fn test_shallow_rising_walks_from_right() {
        assert_eq!(
            walk((0, 2), (4, 0)),
            vec![(4, 0, '_'), (3, 0, '_'), (2, 1, '/'), (1, 1, '_'), (0, 2, '/')]
        );
    }

    #[test]
    fn test_steep_falling_walks_up_from_bottom() {
        assert_eq!(
            walk((0, 0), (1, 3)),
            vec![(1, 3, '|'), (1, 2, '|'), (0, 1, '\\'), (0, 0, '|')]
        );
    }

    #[test]
    fn test_steep_rising() {
        assert_eq!(
            walk((0, 3), (1, 0)),
            vec![(1, 0, '|'), (1, 1, '|'), (0, 2, '/'), (0, 3, '|')]
        );
    }

    #[test]
    fn test_endpoint_order_does_not_matter() {
        for (a, b) in [((0, 0), (7, 3)), ((1, 6), (3, 0)), ((2, 2), (9, 2)), ((4, 0), (0, 4))] {
            let mut forward = walk(a, b);
            let mut backward = walk(b, a);
            forward.sort_by_key(|&(x, y, _)| (x, y));
            backward.sort_by_key(|&(x, y, _)| (x, y));
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn test_walk_reaches_both_endpoints() {
        for (a, b) in [((0, 0), (9, 4)), ((0, 9), (4, 0)), ((3, 0), (0, 8)), ((0, 0), (2, 9))] {
            let cells = walk(a, b);
            let ends: Vec<_> = cells.iter().map(|&(x, y, _)| (x, y)).collect();
            assert!(ends.contains(&a), "{a:?} missing from {cells:?}");
            assert!(ends.contains(&b), "{b:?} missing from {cells:?}");
            let major = a.0.abs_diff(b.0).max(a.1.abs_diff(b.1));
            assert_eq!(cells.len(), major + 1);
        }
    }

    #[test]
    fn test_depth_interpolation() {
        let depths: Vec<f64> = LineWalk::new(Vertex::new(0, 0, -1.0), Vertex::new(4, 0, -5.0))
            .map(|p| p.z)
            .collect();
        assert_eq!(depths, vec![-1.0, -2.0, -3.0, -4.0, -5.0]);

        // Walks from the right endpoint start at its depth.
        let walk: Vec<_> = LineWalk::new(Vertex::new(0, 4, -1.0), Vertex::new(2, 0, -5.0))
            .map(|p| (p.y, p.z))
            .collect();
        assert_eq!(walk.first(), Some(&(0, -5.0)));
        assert_eq!(walk.last(), Some(&(4, -1.0)));
    }

    #[test]
    fn test_line_set_writes_brush() {
        let mut buffer = colour(5, 1);
        buffer.line_set((1, 0), (3, 0), Brush::all('#', 9, 4));
        assert_eq!(buffer.to_text(), " ### ");
        assert_eq!(buffer.get(2, 0).unwrap().fg(), 9);
        assert_eq!(buffer.get(2, 0).unwrap().bg(), 4);
        assert_eq!(buffer.get(0, 0).unwrap().fg(), 7);
    }

    #[test]
    fn test_line_draw_colours_then_glyph() {
        let mut buffer = colour(4, 1);
        buffer.set_all(1, 0, 'q', 1, 2);
        buffer.line_draw((0, 0), (3, 0), Brush::colour(10, 20));
        let cell = buffer.get(1, 0).unwrap();
        assert_eq!((cell.glyph(), cell.fg(), cell.bg()), ('_', 10, 20));
    }

    #[test]
    fn test_line_draw_without_colours_keeps_them() {
        let mut buffer = colour(4, 1);
        buffer.set_col(2, 0, 3, 4);
        buffer.line_draw((0, 0), (3, 0), Brush::NONE);
        let cell = buffer.get(2, 0).unwrap();
        assert_eq!((cell.glyph(), cell.fg(), cell.bg()), ('_', 3, 4));
    }

    #[test]
    fn test_line_set_z_respects_depth() {
        let mut buffer = mono(5, 1);
        buffer.set_glyph_z(2, 0, -1.0, 'o');
        buffer.line_set_z((0, 0, -3.0), (4, 0, -3.0), '-');
        assert_eq!(buffer.to_text(), "--o--");
        assert_eq!(buffer.depth_at(2, 0), Some(-1.0));
        assert_eq!(buffer.depth_at(0, 0), Some(-3.0));
    }

    #[test]
    fn test_line_draw_z_blocked_cell_untouched() {
        let mut buffer = colour(3, 1);
        buffer.set_all_z(1, 0, -1.0, 'o', 5, 6);
        buffer.line_draw_z((0, 0, -2.0), (2, 0, -2.0), Brush::colour(1, 1));
        let blocked = buffer.get(1, 0).unwrap();
        assert_eq!((blocked.glyph(), blocked.fg(), blocked.bg()), ('o', 5, 6));
        assert_eq!(buffer.get(0, 0).unwrap().glyph(), '_');
        assert_eq!(buffer.get(0, 0).unwrap().fg(), 1);
        assert_eq!(buffer.depth_at(2, 0), Some(-2.0));
    }

    #[test]
    fn test_reject_whole_shape() {
        let mut buffer = Buffer::with_config(
            BufferConfig::default()
                .with_size(10, 10)
                .with_validation(ValidationMode::RejectWholeShape),
        );
        buffer.alloc().unwrap();
        let before = buffer.encode_frame();
        buffer.line_set((0, 0), (12, 3), 'x');
        buffer.line_draw((12, 0), (0, 0), Brush::NONE);
        buffer.line_set_z((0, 0, -1.0), (3, 12, -1.0), 'x');
        buffer.line_draw_z((0, 12, -1.0), (0, 0, -1.0), Brush::NONE);
        assert_eq!(buffer.encode_frame(), before);
        assert!(buffer.depths().iter().all(|&d| d == DEPTH_FAR));
    }

    #[test]
    fn test_clamp_or_drop_keeps_visible_part() {
        let mut buffer = Buffer::with_config(
            BufferConfig::default()
                .with_size(3, 1)
                .with_validation(ValidationMode::ClampOrDrop),
        );
        buffer.alloc().unwrap();
        buffer.line_set((0, 0), (6, 0), '=');
        assert_eq!(buffer.to_text(), "===");
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_unvalidated_out_of_bounds_panics() {
        let mut buffer = mono(3, 1);
        buffer.line_set((0, 0), (6, 0), '=');
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_unvalidated_far_endpoint_panics() {
        let mut buffer = mono(3, 1);
        buffer.line_set((0, 0), (usize::MAX, 0), '=');
    }

    fn dropping(width: usize, height: usize) -> Buffer {
        let mut buffer = Buffer::with_config(
            BufferConfig::default()
                .with_size(width, height)
                .with_validation(ValidationMode::ClampOrDrop),
        );
        buffer.alloc().unwrap();
        buffer
    }

    fn drawn(buffer: &Buffer) -> usize {
        buffer.cells().iter().filter(|c| c.glyph() != ' ').count()
    }

    #[test]
    fn test_clipped_walk_matches_full_walk() {
        let bounds = Rect::new(2, 1, 6, 5);
        let lines = [
            ((0, 0), (37, 13)),
            ((0, 13), (37, 0)),
            ((3, 0), (9, 40)),
            ((9, 0), (3, 40)),
            ((0, 0), (20, 20)),
            ((20, 0), (0, 20)),
            ((4, 0), (4, 30)),
            ((0, 3), (30, 3)),
            ((5, 5), (5, 5)),
            ((30, 30), (40, 35)),
        ];
        for (a, b) in lines {
            let plan = || LineWalk::new(Point::from(a).into(), Point::from(b).into());
            let full: Vec<_> = plan().filter(|p| bounds.contains(p.x, p.y)).collect();
            let clipped: Vec<_> = plan().clipped(bounds).collect();
            assert!(clipped.len() <= 6, "{a:?} to {b:?} kept {} cells", clipped.len());
            let visible: Vec<_> = clipped
                .into_iter()
                .filter(|p| bounds.contains(p.x, p.y))
                .collect();
            assert_eq!(visible, full, "{a:?} to {b:?}");
        }
    }

    #[test]
    fn test_clipped_walk_keeps_depth() {
        let depths: Vec<f64> = LineWalk::new(Vertex::new(0, 0, -1.0), Vertex::new(8, 0, -9.0))
            .clipped(Rect::new(3, 0, 2, 1))
            .map(|p| p.z)
            .collect();
        assert_eq!(depths, vec![-4.0, -5.0]);
    }

    #[test]
    fn test_projected_endpoint_draws_visible_part() {
        let mut buffer = dropping(10, 10);
        let far = buffer.project_x_persp(1.0, -1e-300);
        assert_eq!(far, usize::MAX);
        buffer.line_set((0, 5), (far, 5), '=');
        assert_eq!(buffer.to_text().lines().nth(5), Some("=========="));
        assert_eq!(drawn(&buffer), 10);
    }

    #[test]
    fn test_far_steep_line_keeps_its_column() {
        let mut buffer = dropping(10, 10);
        buffer.line_draw((3, 0), (4, usize::MAX), Brush::NONE);
        for y in 0..10 {
            assert_eq!(buffer.get(3, y).unwrap().glyph(), '|');
        }
        assert_eq!(drawn(&buffer), 10);
    }

    #[test]
    fn test_line_draw_z_to_far_corner() {
        let mut buffer = dropping(10, 10);
        buffer.line_draw_z((0, 0, -1.0), (usize::MAX, usize::MAX, -1.0), Brush::NONE);
        for i in 0..10 {
            assert_eq!(buffer.get(i, i).unwrap().glyph(), '\\');
            assert_eq!(buffer.depth_at(i, i), Some(-1.0));
        }
        assert_eq!(drawn(&buffer), 10);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_far_off_grid_lines() {
        let mut buffer = dropping(10, 10);
        buffer.line_draw((0, 9), (1 << 33, 0), Brush::NONE);
        assert_eq!(buffer.to_text().lines().nth(9), Some("__________"));

        buffer.line_draw_z((4, 1 << 33, -1.0), (4, 0, -1.0), Brush::NONE);
        for y in 0..9 {
            assert_eq!(buffer.get(4, y).unwrap().glyph(), '|');
            assert_eq!(buffer.depth_at(4, y), Some(-1.0));
        }

        buffer.line_set((0, 2), (20_000, 9), 'x');
        assert_eq!(buffer.to_text().lines().nth(2), Some("xxxxxxxxxx"));

        let before = buffer.encode_frame();
        buffer.line_set((20_000, 0), (40_000, 20_000), 'x');
        buffer.line_set_z((0, 1 << 33, -1.0), (1 << 34, 1 << 33, -1.0), 'x');
        assert_eq!(buffer.encode_frame(), before);
    }
}
