//! Math module: vector arithmetic for depth interpolation.

mod vector;

pub use vector::Vec3;
