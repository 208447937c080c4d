//! Layout module: Grid rectangles.
//!
//! A [`Rect`] describes the addressable area of a buffer and answers the
//! bounds questions asked by the validated setters and the rasterizers.

mod rect;

pub use rect::Rect;
