//! Terminal geometry providers.

use std::io;

/// Something that knows the size of the render target.
pub trait Geometry {
    /// `(height, width)` in cells.
    fn size(&self) -> io::Result<(usize, usize)>;
}

/// The controlling terminal, as reported by crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGeometry;

impl Geometry for TerminalGeometry {
    fn size(&self) -> io::Result<(usize, usize)> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok((usize::from(rows), usize::from(columns)))
    }
}
