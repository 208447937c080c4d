//! Vertical scrolling of buffer contents.
//!
//! Scrolling moves whole rows of cells (glyph and colours together) and
//! refills the vacated rows with the blank cell. The depth store is not
//! touched; callers that refill scrolled-in rows with depth-gated writes
//! should reset depth themselves.

use super::Buffer;

impl Buffer {
    /// Shift the grid by `lines` rows.
    ///
    /// Negative values scroll up: row `i` takes the contents of row
    /// `i + |lines|` and the bottom rows are blanked. Positive values scroll
    /// down: row `i` takes row `i - lines` and the top rows are blanked.
    /// Shifting by the height or more blanks every row. Does nothing while
    /// unallocated.
    pub fn scroll(&mut self, lines: isize) {
        if lines == 0 || !self.is_allocated() {
            return;
        }

        let width = self.width();
        let height = self.height();
        let blank = self.config().blank;
        let shift = lines.unsigned_abs();
        let cells = self.cells_mut();

        if shift >= height {
            log::trace!("scroll by {lines} clears all {height} rows");
            cells.fill(blank);
            return;
        }

        let kept = (height - shift) * width;
        let moved = shift * width;

        if lines < 0 {
            cells.copy_within(moved.., 0);
            cells[kept..].fill(blank);
        } else {
            cells.copy_within(..kept, moved);
            cells[..moved].fill(blank);
        }
    }
}
