use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra as na;

// ---------------------------------------------------------------------------
// Cartesian vector (East, North, Up)
// ---------------------------------------------------------------------------

/// Three-component vector in the simulation's single Cartesian frame.
/// Frame: East-North-Up (ENU), `z` is altitude.
///
/// Value type: every operator returns a new vector and leaves its operands
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(na::Vector3<f64>);

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(na::Vector3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(na::Vector3::zeros())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.0.dot(&other.0)
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Self(self.0.cross(&other.0))
    }

    /// Horizontal distance from the frame origin (ground track length).
    pub fn horizontal_norm(&self) -> f64 {
        self.0.x.hypot(self.0.y)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3(rhs.0 * self)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Self(-self.0)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}, {:.4}]", self.0.x, self.0.y, self.0.z)
    }
}
