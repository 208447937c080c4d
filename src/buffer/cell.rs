//! Cell: The atomic unit of the character grid.
//!
//! # Wire Layout
//!
//! Cells are stored typed and only turned into bytes when a frame is encoded.
//! A colour cell always encodes to the same 23-byte run, with `ESC` bytes at
//! offsets 0 and 11 and the glyph at offset 22:
//!
//! ```text
//! ┌───────────────────────────────┬───────────────────────────────┬───────┐
//! │  background (11 bytes)        │  foreground (11 bytes)        │ glyph │
//! │  ESC [ 4 8 ; 5 ; b b b m      │  ESC [ 3 8 ; 5 ; f f f m      │  1 b  │
//! └───────────────────────────────┴───────────────────────────────┴───────┘
//! ```
//!
//! Palette indices are zero-padded to three digits so every cell has the same
//! width. A monochrome cell encodes to the glyph byte alone.
//!
//! The fixed widths assume ASCII glyphs. Any other glyph is written as UTF-8
//! and widens its cell by the extra bytes; [`Cell::encoded_len`] counts them.

use bitflags::bitflags;

/// Encoded width of a colour cell, in bytes.
pub const COLOUR_CELL_WIDTH: usize = 23;

/// Encoded width of a monochrome cell, in bytes.
pub const MONO_CELL_WIDTH: usize = 1;

/// Colour prefix with zeroed palette digits at offsets 7 and 18.
const COLOUR_PREFIX: [u8; COLOUR_CELL_WIDTH - 1] = *b"\x1b[48;5;000m\x1b[38;5;000m";

/// Default foreground palette index (white).
pub const DEFAULT_FG: u8 = 7;

/// Default background palette index (black).
pub const DEFAULT_BG: u8 = 0;

bitflags! {
    /// The parts of a cell a write may touch.
    ///
    /// # Example
    /// ```
    /// use glyphgrid::Channels;
    /// let colour = Channels::FG | Channels::BG;
    /// assert_eq!(colour, Channels::COLOUR);
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Channels: u8 {
        /// The glyph.
        const GLYPH = 0b0000_0001;
        /// The foreground palette index.
        const FG = 0b0000_0010;
        /// The background palette index.
        const BG = 0b0000_0100;
        /// Both colours.
        const COLOUR = Self::FG.bits() | Self::BG.bits();
    }
}

impl std::fmt::Debug for Channels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single grid cell: one glyph plus a 256-colour palette pair.
///
/// Glyphs are meant to be ASCII. A wider glyph still encodes, but breaks the
/// fixed cell width a renderer may count on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    glyph: char,
    fg: u8,
    bg: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// A blank cell (space, white on black).
    pub const BLANK: Self = Self {
        glyph: ' ',
        fg: DEFAULT_FG,
        bg: DEFAULT_BG,
    };

    /// Create a cell with the default colours.
    #[inline]
    pub const fn new(glyph: char) -> Self {
        Self {
            glyph,
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
        }
    }

    /// Create a cell with every field given.
    #[inline]
    pub const fn styled(glyph: char, fg: u8, bg: u8) -> Self {
        Self { glyph, fg, bg }
    }

    /// Get the glyph.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Get the foreground palette index.
    #[inline]
    pub const fn fg(&self) -> u8 {
        self.fg
    }

    /// Get the background palette index.
    #[inline]
    pub const fn bg(&self) -> u8 {
        self.bg
    }

    /// Set the glyph.
    #[inline]
    pub const fn set_glyph(&mut self, glyph: char) -> &mut Self {
        self.glyph = glyph;
        self
    }

    /// Set the foreground palette index.
    #[inline]
    pub const fn set_fg(&mut self, fg: u8) -> &mut Self {
        self.fg = fg;
        self
    }

    /// Set the background palette index.
    #[inline]
    pub const fn set_bg(&mut self, bg: u8) -> &mut Self {
        self.bg = bg;
        self
    }

    /// Set the foreground palette index (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: u8) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background palette index (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: u8) -> Self {
        self.bg = bg;
        self
    }

    /// Append the wire form of this cell to `out`.
    ///
    /// With `colour` unset only the glyph is written.
    #[inline]
    pub fn encode_into(&self, out: &mut Vec<u8>, colour: bool) {
        if colour {
            let mut prefix = COLOUR_PREFIX;
            put_index(&mut prefix[7..10], self.bg);
            put_index(&mut prefix[18..21], self.fg);
            out.extend_from_slice(&prefix);
        }
        let mut utf8 = [0u8; 4];
        out.extend_from_slice(self.glyph.encode_utf8(&mut utf8).as_bytes());
    }

    /// Number of bytes [`Cell::encode_into`] writes.
    #[inline]
    pub const fn encoded_len(&self, colour: bool) -> usize {
        let glyph = self.glyph.len_utf8();
        if colour {
            COLOUR_CELL_WIDTH - 1 + glyph
        } else {
            glyph
        }
    }
}

/// Three zero-padded decimal digits.
#[inline]
fn put_index(digits: &mut [u8], index: u8) {
    digits[0] = b'0' + index / 100;
    digits[1] = b'0' + index / 10 % 10;
    digits[2] = b'0' + index % 10;
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("glyph", &self.glyph)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .finish()
    }
}

/// What a write puts into a cell.
///
/// A brush carries any subset of glyph, foreground and background. Fields
/// outside its [`Channels`] are left alone, so a foreground-only brush keeps
/// the glyph and background of the cell it lands on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Brush {
    glyph: char,
    fg: u8,
    bg: u8,
    channels: Channels,
}

impl Default for Brush {
    fn default() -> Self {
        Self::NONE
    }
}

impl Brush {
    /// A brush that writes nothing.
    pub const NONE: Self = Self {
        glyph: ' ',
        fg: DEFAULT_FG,
        bg: DEFAULT_BG,
        channels: Channels::empty(),
    };

    /// Write only a glyph.
    #[inline]
    pub const fn glyph(glyph: char) -> Self {
        Self {
            glyph,
            channels: Channels::GLYPH,
            ..Self::NONE
        }
    }

    /// Write only a foreground colour.
    #[inline]
    pub const fn fg(fg: u8) -> Self {
        Self {
            fg,
            channels: Channels::FG,
            ..Self::NONE
        }
    }

    /// Write only a background colour.
    #[inline]
    pub const fn bg(bg: u8) -> Self {
        Self {
            bg,
            channels: Channels::BG,
            ..Self::NONE
        }
    }

    /// Write both colours.
    #[inline]
    pub const fn colour(fg: u8, bg: u8) -> Self {
        Self {
            fg,
            bg,
            channels: Channels::COLOUR,
            ..Self::NONE
        }
    }

    /// Write glyph and both colours.
    #[inline]
    pub const fn all(glyph: char, fg: u8, bg: u8) -> Self {
        Self {
            glyph,
            fg,
            bg,
            channels: Channels::all(),
        }
    }

    /// The channels this brush writes.
    #[inline]
    pub const fn channels(&self) -> Channels {
        self.channels
    }

    /// Replace (or add) the glyph channel.
    #[inline]
    #[must_use]
    pub const fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self.channels = self.channels.union(Channels::GLYPH);
        self
    }

    /// Keep only the colour channels.
    #[inline]
    #[must_use]
    pub const fn colours_only(mut self) -> Self {
        self.channels = self.channels.intersection(Channels::COLOUR);
        self
    }

    /// Keep only the channels in `mask`.
    #[inline]
    #[must_use]
    pub const fn masked(mut self, mask: Channels) -> Self {
        self.channels = self.channels.intersection(mask);
        self
    }

    /// Write the brush into `cell`.
    #[inline]
    pub fn apply(&self, cell: &mut Cell) {
        if self.channels.contains(Channels::GLYPH) {
            cell.glyph = self.glyph;
        }
        if self.channels.contains(Channels::FG) {
            cell.fg = self.fg;
        }
        if self.channels.contains(Channels::BG) {
            cell.bg = self.bg;
        }
    }
}

impl std::fmt::Debug for Brush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Brush")
            .field("glyph", &self.glyph)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("channels", &self.channels)
            .finish()
    }
}

impl From<char> for Brush {
    #[inline]
    fn from(glyph: char) -> Self {
        Self::glyph(glyph)
    }
}

impl From<Cell> for Brush {
    #[inline]
    fn from(cell: Cell) -> Self {
        Self::all(cell.glyph, cell.fg, cell.bg)
    }
}
