//! Triangle fill by edge functions.
//!
//! Every integer cell of the half-open bounding box
//! `[minx, maxx) x [miny, maxy)` is tested against the three edges; a cell is
//! filled when it lies strictly inside all of them. The edge values are
//! stepped incrementally, one subtraction per cell and one addition per row.
//! Validated buffers first cut the box down to the grid and evaluate the edges
//! at the cut corner, so far-off vertices cost nothing extra.
//!
//! Either winding fills the same cells: the edge signs are flipped for
//! triangles whose signed area is positive. Zero-area triangles fill nothing.
//!
//! The depth-tested fill solves the plane through the three vertices for
//! every filled cell.

use super::{wide, Plotter, Point, Vertex};
use crate::buffer::{Brush, Buffer};
use crate::layout::Rect;
use crate::math::Vec3;

/// Largest coordinate the edge arithmetic takes without overflowing `i128`.
const SCAN_LIMIT: usize = i64::MAX as usize;

#[derive(Debug, Clone, Copy)]
struct Edge {
    dx: i128,
    dy: i128,
    row: i128,
}

impl Edge {
    /// Edge from `from` to `to`, evaluated at `origin`.
    fn new(from: (i128, i128), to: (i128, i128), origin: (i128, i128), sign: i128) -> Self {
        let dx = sign * (from.0 - to.0);
        let dy = sign * (from.1 - to.1);
        Self {
            dx,
            dy,
            row: dy * (from.0 - origin.0) - dx * (from.1 - origin.1),
        }
    }
}

/// Call `fill` for every cell inside the triangle, row by row.
///
/// With a `window` only the part of the bounding box inside it is scanned.
/// Triangles with a coordinate past [`SCAN_LIMIT`] fill nothing.
fn scan(a: Point, b: Point, c: Point, window: Option<Rect>, mut fill: impl FnMut(usize, usize)) {
    if [a, b, c].iter().any(|p| p.x > SCAN_LIMIT || p.y > SCAN_LIMIT) {
        log::trace!("triangle {a:?} {b:?} {c:?} is beyond the scan range");
        return;
    }
    let p1 = (wide(a.x), wide(a.y));
    let p2 = (wide(b.x), wide(b.y));
    let p3 = (wide(c.x), wide(c.y));

    let area = (p2.0 - p1.0) * (p3.1 - p1.1) - (p2.1 - p1.1) * (p3.0 - p1.0);
    if area == 0 {
        return;
    }
    let sign = if area > 0 { -1 } else { 1 };

    let (mut minx, mut maxx) = (a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x));
    let (mut miny, mut maxy) = (a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y));
    if let Some(bounds) = window {
        minx = minx.max(bounds.x);
        maxx = maxx.min(bounds.right());
        miny = miny.max(bounds.y);
        maxy = maxy.min(bounds.bottom());
    }
    if minx >= maxx || miny >= maxy {
        return;
    }
    let origin = (wide(minx), wide(miny));

    let mut edges = [
        Edge::new(p1, p2, origin, sign),
        Edge::new(p2, p3, origin, sign),
        Edge::new(p3, p1, origin, sign),
    ];

    for y in miny..maxy {
        let mut values = edges.map(|edge| edge.row);
        for x in minx..maxx {
            if values.iter().all(|&value| value > 0) {
                fill(x, y);
            }
            for (value, edge) in values.iter_mut().zip(&edges) {
                *value -= edge.dy;
            }
        }
        for edge in &mut edges {
            edge.row += edge.dx;
        }
    }
}

/// The plane through three vertices, solved for depth.
#[derive(Debug, Clone, Copy)]
struct Plane {
    normal: Vec3,
    k: f64,
}

impl Plane {
    fn through(a: Vertex, b: Vertex, c: Vertex) -> Self {
        let (v1, v2, v3) = (position(a), position(b), position(c));
        let normal = v2.sub(v1).cross(v3.sub(v1));
        Self {
            normal,
            k: normal.dot(v1),
        }
    }

    /// Depth at (x, y). Non-finite when the plane is edge-on to the camera.
    #[inline]
    fn depth(&self, x: usize, y: usize) -> f64 {
        (self.k - self.normal.x * x as f64 - self.normal.y * y as f64) / self.normal.z
    }
}

#[inline]
fn position(vertex: Vertex) -> Vec3 {
    Vec3::new(vertex.x as f64, vertex.y as f64, vertex.z)
}

impl Buffer {
    /// Fill the triangle `a`, `b`, `c` with `brush`.
    ///
    /// ```
    /// use glyphgrid::{Buffer, BufferConfig};
    ///
    /// let mut buffer = Buffer::with_config(BufferConfig::default().with_size(4, 4));
    /// buffer.alloc().unwrap();
    /// buffer.triangle_set((0, 0), (4, 0), (0, 4), 'X');
    /// assert_eq!(buffer.to_text(), "    \n XX \n X  \n    ");
    /// ```
    pub fn triangle_set(
        &mut self,
        a: impl Into<Point>,
        b: impl Into<Point>,
        c: impl Into<Point>,
        brush: impl Into<Brush>,
    ) {
        let (a, b, c, brush) = (a.into(), b.into(), c.into(), brush.into());
        let Some(mut plotter) = Plotter::new(self, &[a, b, c]) else {
            return;
        };
        let window = plotter.window();
        scan(a, b, c, window, |x, y| plotter.plot(x, y, brush));
    }

    /// Depth-tested [`Buffer::triangle_set`], with depth taken from the
    /// plane through the three vertices.
    pub fn triangle_set_z(
        &mut self,
        a: impl Into<Vertex>,
        b: impl Into<Vertex>,
        c: impl Into<Vertex>,
        brush: impl Into<Brush>,
    ) {
        let (a, b, c, brush) = (a.into(), b.into(), c.into(), brush.into());
        let Some(mut plotter) = Plotter::new(self, &[a.point(), b.point(), c.point()]) else {
            return;
        };
        let plane = Plane::through(a, b, c);
        let window = plotter.window();
        scan(a.point(), b.point(), c.point(), window, |x, y| {
            plotter.plot_z(x, y, plane.depth(x, y), brush);
        });
    }
}
