//! Terminal module: Getting frames onto a terminal.
//!
//! The buffer itself never touches the terminal. This module supplies the
//! positioned, single-write output path and the terminal size query used to
//! configure a buffer. Raw mode, input and signals belong to the caller.

mod geometry;
mod output;

pub use geometry::{Geometry, TerminalGeometry};
pub use output::OutputBuffer;
