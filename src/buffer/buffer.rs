//! Buffer: A z-buffered grid of cells.
//!
//! The buffer owns two row-major stores of `width * height` entries: the
//! cells themselves and one depth value per cell. Both are created by
//! [`Buffer::alloc`] and released together by [`Buffer::free`].
//!
//! # Setter families
//!
//! Every write goes through a [`Brush`]. Four entry points decide how the
//! write is gated:
//!
//! | Method | Bounds | Depth |
//! |---|---|---|
//! | [`Buffer::paint`] | must be in bounds (panics otherwise) | ignored |
//! | [`Buffer::paint_z`] | must be in bounds (panics otherwise) | tested and stored |
//! | [`Buffer::paint_v`] | out-of-bounds is a no-op | ignored |
//! | [`Buffer::paint_zv`] | out-of-bounds is a no-op | tested and stored |
//!
//! The named setters (`set_glyph`, `set_fg_z`, `set_all_v`, ...) are thin
//! wrappers over these four.
//!
//! # Depth test
//!
//! A depth-gated write lands when `z >= stored`, so new content wins ties.
//! After it lands the stored depth becomes `z`, for glyph-only writes too.
//! The store starts at [`DEPTH_FAR`], which every finite `z` beats.

use super::cell::{Brush, Cell, Channels, COLOUR_CELL_WIDTH, MONO_CELL_WIDTH};
use super::config::{BufferConfig, ValidationMode};
use crate::error::{AllocError, Error, Result, Store};
use crate::layout::Rect;

/// Depth of a cell nothing has been drawn to.
pub const DEPTH_FAR: f64 = f64::NEG_INFINITY;

/// A grid of styled character cells with a depth value per cell.
///
/// A buffer starts unallocated. Configure it, call [`Buffer::alloc`], draw,
/// then encode or render frames.
///
/// ```
/// use glyphgrid::{Buffer, BufferConfig};
///
/// let mut buffer = Buffer::with_config(BufferConfig::default().with_size(10, 10));
/// buffer.alloc().unwrap();
/// buffer.set_glyph(2, 3, '#');
/// assert_eq!(buffer.get(2, 3).unwrap().glyph(), '#');
/// ```
#[derive(Clone)]
pub struct Buffer {
    config: BufferConfig,
    cells: Vec<Cell>,
    depth: Vec<f64>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Create an unallocated buffer with the default configuration
    /// (80x23, monochrome, no validation).
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Create an unallocated buffer with the given configuration.
    pub const fn with_config(config: BufferConfig) -> Self {
        Self {
            config,
            cells: Vec::new(),
            depth: Vec::new(),
        }
    }

    /// Get the configuration.
    #[inline]
    pub const fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Fails with [`Error::AlreadyAllocated`] while the stores are live.
    pub fn configure(&mut self, config: BufferConfig) -> Result<()> {
        if self.is_allocated() {
            return Err(Error::AlreadyAllocated);
        }
        log::trace!("buffer configured: {config:?}");
        self.config = config;
        Ok(())
    }

    /// Grid width in columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.config.width
    }

    /// Grid height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.config.height
    }

    /// Whether cells carry colour codes.
    #[inline]
    pub const fn colour(&self) -> bool {
        self.config.colour
    }

    /// The out-of-bounds policy.
    #[inline]
    pub const fn validation(&self) -> ValidationMode {
        self.config.validation
    }

    /// Bytes each cell occupies in an encoded frame.
    #[inline]
    pub const fn cell_width(&self) -> usize {
        if self.config.colour {
            COLOUR_CELL_WIDTH
        } else {
            MONO_CELL_WIDTH
        }
    }

    /// The whole grid as a rectangle.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.config.width, self.config.height)
    }

    /// Whether [`Buffer::alloc`] has succeeded and [`Buffer::free`] has not been called since.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Number of cells (zero while unallocated).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Allocate both stores and fill them with the blank cell and [`DEPTH_FAR`].
    ///
    /// If the depth store cannot be allocated the cell store is released
    /// before the error is returned.
    pub fn alloc(&mut self) -> Result<()> {
        if self.is_allocated() {
            return Err(Error::AlreadyAllocated);
        }

        let (width, height) = (self.config.width, self.config.height);
        let count = match width.checked_mul(height) {
            Some(count) if count > 0 => count,
            _ => return Err(Error::InvalidDimensions { width, height }),
        };

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| AllocError {
            store: Store::Cells,
            cells: count,
        })?;

        let mut depth = Vec::new();
        depth.try_reserve_exact(count).map_err(|_| AllocError {
            store: Store::Depth,
            cells: count,
        })?;

        cells.resize(count, self.config.blank);
        depth.resize(count, DEPTH_FAR);
        self.cells = cells;
        self.depth = depth;

        log::debug!(
            "buffer allocated: {width}x{height}, colour={}, cell_width={}",
            self.config.colour,
            self.cell_width()
        );
        Ok(())
    }

    /// Reset every cell to the blank cell and every depth to [`DEPTH_FAR`].
    pub fn clear(&mut self) {
        self.cells.fill(self.config.blank);
        self.depth.fill(DEPTH_FAR);
    }

    /// Release both stores. The buffer can be reconfigured and allocated again.
    pub fn free(&mut self) {
        if self.is_allocated() {
            log::debug!("buffer freed: {}x{}", self.config.width, self.config.height);
        }
        self.cells = Vec::new();
        self.depth = Vec::new();
    }

    /// The cell store, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The depth store, row-major.
    #[inline]
    pub fn depths(&self) -> &[f64] {
        &self.depth
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.config.width.max(1))
    }

    /// Convert (x, y) to a store index.
    ///
    /// Returns `None` if out of bounds or unallocated.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.config.width && y < self.config.height && self.is_allocated() {
            Some(x + y * self.config.width)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Get the stored depth at (x, y).
    #[inline]
    pub fn depth_at(&self, x: usize, y: usize) -> Option<f64> {
        self.index_of(x, y).map(|i| self.depth[i])
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(self.is_allocated(), "buffer is not allocated");
        assert!(
            x < self.config.width && y < self.config.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.config.width,
            self.config.height
        );
        x + y * self.config.width
    }

    /// Channels a write may change. Monochrome cells keep their colours.
    #[inline]
    const fn writable(&self) -> Channels {
        if self.config.colour {
            Channels::all()
        } else {
            Channels::GLYPH
        }
    }

    /// Write `brush` at (x, y).
    ///
    /// # Panics
    /// Panics if the buffer is unallocated or (x, y) is out of bounds.
    #[inline]
    pub fn paint(&mut self, x: usize, y: usize, brush: Brush) {
        let idx = self.index(x, y);
        brush.masked(self.writable()).apply(&mut self.cells[idx]);
    }

    /// Write `brush` at (x, y) if `z` is not behind the stored depth.
    ///
    /// Returns whether the write landed.
    ///
    /// # Panics
    /// Panics if the buffer is unallocated or (x, y) is out of bounds.
    #[inline]
    pub fn paint_z(&mut self, x: usize, y: usize, z: f64, brush: Brush) -> bool {
        let idx = self.index(x, y);
        self.depth_write(idx, z, brush)
    }

    /// Write `brush` at (x, y), ignoring out-of-bounds coordinates.
    #[inline]
    pub fn paint_v(&mut self, x: usize, y: usize, brush: Brush) {
        if let Some(idx) = self.index_of(x, y) {
            brush.masked(self.writable()).apply(&mut self.cells[idx]);
        }
    }

    /// Depth-gated write that ignores out-of-bounds coordinates.
    ///
    /// Returns whether the write landed.
    #[inline]
    pub fn paint_zv(&mut self, x: usize, y: usize, z: f64, brush: Brush) -> bool {
        self.index_of(x, y)
            .is_some_and(|idx| self.depth_write(idx, z, brush))
    }

    #[inline]
    fn depth_write(&mut self, idx: usize, z: f64, brush: Brush) -> bool {
        if z >= self.depth[idx] {
            brush.masked(self.writable()).apply(&mut self.cells[idx]);
            self.depth[idx] = z;
            true
        } else {
            false
        }
    }

    /// Set the glyph at (x, y), keeping its colours.
    pub fn set_glyph(&mut self, x: usize, y: usize, glyph: char) {
        self.paint(x, y, Brush::glyph(glyph));
    }

    /// Set the foreground at (x, y). No effect on a monochrome buffer.
    pub fn set_fg(&mut self, x: usize, y: usize, fg: u8) {
        self.paint(x, y, Brush::fg(fg));
    }

    /// Set the background at (x, y). No effect on a monochrome buffer.
    pub fn set_bg(&mut self, x: usize, y: usize, bg: u8) {
        self.paint(x, y, Brush::bg(bg));
    }

    /// Set both colours at (x, y). No effect on a monochrome buffer.
    pub fn set_col(&mut self, x: usize, y: usize, fg: u8, bg: u8) {
        self.paint(x, y, Brush::colour(fg, bg));
    }

    /// Set glyph and colours at (x, y).
    pub fn set_all(&mut self, x: usize, y: usize, glyph: char, fg: u8, bg: u8) {
        self.paint(x, y, Brush::all(glyph, fg, bg));
    }

    /// Depth-gated [`Buffer::set_glyph`].
    pub fn set_glyph_z(&mut self, x: usize, y: usize, z: f64, glyph: char) -> bool {
        self.paint_z(x, y, z, Brush::glyph(glyph))
    }

    /// Depth-gated [`Buffer::set_fg`].
    pub fn set_fg_z(&mut self, x: usize, y: usize, z: f64, fg: u8) -> bool {
        self.paint_z(x, y, z, Brush::fg(fg))
    }

    /// Depth-gated [`Buffer::set_bg`].
    pub fn set_bg_z(&mut self, x: usize, y: usize, z: f64, bg: u8) -> bool {
        self.paint_z(x, y, z, Brush::bg(bg))
    }

    /// Depth-gated [`Buffer::set_col`].
    pub fn set_col_z(&mut self, x: usize, y: usize, z: f64, fg: u8, bg: u8) -> bool {
        self.paint_z(x, y, z, Brush::colour(fg, bg))
    }

    /// Depth-gated [`Buffer::set_all`].
    pub fn set_all_z(&mut self, x: usize, y: usize, z: f64, glyph: char, fg: u8, bg: u8) -> bool {
        self.paint_z(x, y, z, Brush::all(glyph, fg, bg))
    }

    /// Bounds-checked [`Buffer::set_glyph`].
    pub fn set_glyph_v(&mut self, x: usize, y: usize, glyph: char) {
        self.paint_v(x, y, Brush::glyph(glyph));
    }

    /// Bounds-checked [`Buffer::set_fg`].
    pub fn set_fg_v(&mut self, x: usize, y: usize, fg: u8) {
        self.paint_v(x, y, Brush::fg(fg));
    }

    /// Bounds-checked [`Buffer::set_bg`].
    pub fn set_bg_v(&mut self, x: usize, y: usize, bg: u8) {
        self.paint_v(x, y, Brush::bg(bg));
    }

    /// Bounds-checked [`Buffer::set_col`].
    pub fn set_col_v(&mut self, x: usize, y: usize, fg: u8, bg: u8) {
        self.paint_v(x, y, Brush::colour(fg, bg));
    }

    /// Bounds-checked [`Buffer::set_all`].
    pub fn set_all_v(&mut self, x: usize, y: usize, glyph: char, fg: u8, bg: u8) {
        self.paint_v(x, y, Brush::all(glyph, fg, bg));
    }

    /// Bounds-checked [`Buffer::set_glyph_z`].
    pub fn set_glyph_zv(&mut self, x: usize, y: usize, z: f64, glyph: char) -> bool {
        self.paint_zv(x, y, z, Brush::glyph(glyph))
    }

    /// Bounds-checked [`Buffer::set_fg_z`].
    pub fn set_fg_zv(&mut self, x: usize, y: usize, z: f64, fg: u8) -> bool {
        self.paint_zv(x, y, z, Brush::fg(fg))
    }

    /// Bounds-checked [`Buffer::set_bg_z`].
    pub fn set_bg_zv(&mut self, x: usize, y: usize, z: f64, bg: u8) -> bool {
        self.paint_zv(x, y, z, Brush::bg(bg))
    }

    /// Bounds-checked [`Buffer::set_col_z`].
    pub fn set_col_zv(&mut self, x: usize, y: usize, z: f64, fg: u8, bg: u8) -> bool {
        self.paint_zv(x, y, z, Brush::colour(fg, bg))
    }

    /// Bounds-checked [`Buffer::set_all_z`].
    pub fn set_all_zv(
        &mut self,
        x: usize,
        y: usize,
        z: f64,
        glyph: char,
        fg: u8,
        bg: u8,
    ) -> bool {
        self.paint_zv(x, y, z, Brush::all(glyph, fg, bg))
    }

    /// Map a normalized x in `[-1, 1]` to a column.
    ///
    /// Negative results saturate to column 0; results past the right edge
    /// are returned as is for the validated setters to drop.
    #[inline]
    pub fn project_x(&self, x: f64) -> usize {
        project(self.config.width, x)
    }

    /// Map a normalized y in `[-1, 1]` to a row.
    #[inline]
    pub fn project_y(&self, y: f64) -> usize {
        project(self.config.height, y)
    }

    /// Perspective [`Buffer::project_x`] for a camera at the origin looking
    /// down -z, with the screen plane at `z = -screen`.
    #[inline]
    pub fn project_x_persp(&self, x: f64, z: f64) -> usize {
        project(self.config.width, x / (z / -self.config.screen))
    }

    /// Perspective [`Buffer::project_y`].
    #[inline]
    pub fn project_y_persp(&self, y: f64, z: f64) -> usize {
        project(self.config.height, y / (z / -self.config.screen))
    }

    /// Append the wire form of the whole grid to `out`.
    ///
    /// Cells are written row-major with no line terminators; the frame relies
    /// on the terminal wrapping at `width` columns. Each cell is
    /// [`Buffer::cell_width`] bytes as long as its glyph is ASCII.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        let colour = self.config.colour;
        for cell in &self.cells {
            cell.encode_into(out, colour);
        }
    }

    /// Encode the whole grid. See [`Buffer::encode_into`] for the layout.
    pub fn encode_frame(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    /// Length of the encoded frame in bytes.
    ///
    /// Equals `len() * cell_width()` while every glyph is a single byte.
    pub fn encoded_len(&self) -> usize {
        let colour = self.config.colour;
        self.cells.iter().map(|cell| cell.encoded_len(colour)).sum()
    }

    /// Glyphs only, one line per row.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.cells.len() + self.config.height);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.extend(row.iter().map(Cell::glyph));
        }
        text
    }
}

/// `(eff / 2) + coord * (eff / 2)` where `eff` is the dimension rounded down to odd,
/// so an even-sized axis still has a centre cell.
#[inline]
fn project(dim: usize, coord: f64) -> usize {
    let effective = if dim % 2 == 1 { dim } else { dim.saturating_sub(1) };
    let half = (effective / 2) as f64;
    coord.mul_add(half, half) as usize
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.config.width)
            .field("height", &self.config.height)
            .field("colour", &self.config.colour)
            .field("validation", &self.config.validation)
            .field("allocated", &self.is_allocated())
            .finish_non_exhaustive()
    }
}
