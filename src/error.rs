//! Error types.

use thiserror::Error;

/// Which of the buffer's two stores an allocation was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    /// The glyph and colour store.
    Cells,
    /// The per-cell depth store.
    Depth,
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cells => f.write_str("cell"),
            Self::Depth => f.write_str("depth"),
        }
    }
}

/// Memory for a buffer store could not be obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("memory allocation error: {store} store of {cells} cells")]
pub struct AllocError {
    /// The store that failed.
    pub store: Store,
    /// Number of cells requested.
    pub cells: usize,
}

/// Errors raised by buffer lifecycle and output.
#[derive(Error, Debug)]
pub enum Error {
    /// A store could not be allocated. Nothing is left allocated.
    #[error(transparent)]
    Alloc(#[from] AllocError),

    /// The buffer is already allocated; free it before reallocating or reconfiguring.
    #[error("buffer is already allocated")]
    AlreadyAllocated,

    /// The buffer has no stores to render.
    #[error("buffer is not allocated")]
    NotAllocated,

    /// Width or height is zero, or their product overflows.
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Writing an encoded frame to its sink failed.
    #[error("error printing frame: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for buffer operations.
pub type Result<T> = std::result::Result<T, Error>;
