//! Vector Math
//!
//! `Vector3` mirrors the host's own three-float vector byte for byte, so it can
//! be passed to and returned from host methods directly. `z` is the vertical
//! axis.

use serde::Serialize;
use std::fmt;

/// Three `f32` components in host layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Copy of `self` moved `dz` along the vertical axis.
    #[inline]
    pub fn raised(self, dz: f32) -> Self {
        Self {
            z: self.z + dz,
            ..self
        }
    }
}

/// Space separated with six fractional digits, the way `%f` prints.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.x, self.y, self.z)
    }
}
