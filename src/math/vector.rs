//! Vec3: A 3D vector of `f64` components.
//!
//! Used by the depth-interpolating triangle rasterizer to find the plane
//! through three vertices. Every operation is pure and returns a new vector.
//!
//! Division follows IEEE-754: dividing by zero yields infinities or NaN.
//! [`Vec3::normalize`] is the exception and leaves a zero-length vector as is.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A vector in 3D space.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length. A zero-length vector is returned unchanged.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            self
        } else {
            self.divide(length)
        }
    }

    /// Point the vector the opposite way.
    #[inline]
    #[must_use]
    pub fn reverse(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Component-wise sum.
    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference.
    #[inline]
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiply every component by `k`.
    #[inline]
    #[must_use]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Divide every component by `k`.
    #[inline]
    #[must_use]
    pub fn divide(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y.mul_add(other.y, self.z * other.z))
    }

    /// Cross product (right-handed).
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            other.x * self.z - self.x * other.z,
            self.x * other.y - other.x * self.y,
        )
    }
}

impl std::fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::sub(self, rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}
