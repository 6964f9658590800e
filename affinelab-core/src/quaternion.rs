//! Axis-angle quaternions and their rotation matrices
//!
//! A quaternion here is the scalar `w` plus the vector part `(x, y, z)`.
//! The axis-angle constructor quantizes the scalar to 2 decimals while the
//! vector part stays at full precision, so the quaternion can drift slightly
//! off unit norm for angles away from multiples of pi/2; the derived rotation
//! matrix is rounded to the same precision. Both quantizations go through
//! [`crate::rounding`].

use crate::error::{Error, Result};
use crate::rounding::{round_dp, round_matrix_dp};
use nalgebra::{Matrix3, Vector3};
use std::fmt;
use std::ops::{Div, Mul};

/// Decimal places kept for the quaternion scalar and rotation-matrix entries.
const QUANTIZE_DP: u32 = 2;

/// A rotation as scalar `w` plus vector `(x, y, z)`, with its 3x3 rotation
/// matrix computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
    rot: Matrix3<f64>,
}

impl Quaternion {
    /// Build a quaternion from a rotation axis and an angle in radians.
    ///
    /// The axis is normalized; the vector part is `axis * sin(angle/2)` and
    /// the scalar is `cos(angle/2)` rounded to 2 decimals. Fails with a
    /// domain error on a zero-norm axis or non-finite input.
    pub fn from_axis_angle(axis: Vector3<f64>, angle: f64) -> Result<Self> {
        if !axis.iter().all(|c| c.is_finite()) || !angle.is_finite() {
            return Err(Error::Domain(
                "rotation axis and angle must be finite".to_string(),
            ));
        }
        let norm = axis.norm();
        if norm == 0.0 {
            return Err(Error::Domain(
                "rotation axis must have nonzero norm".to_string(),
            ));
        }
        let half = angle / 2.0;
        let v = axis / norm * half.sin();
        Ok(Self::assemble(v.x, v.y, v.z, round_dp(half.cos(), QUANTIZE_DP)))
    }

    /// Build a quaternion from raw components, canonicalized to the
    /// hemisphere with a non-negative scalar.
    pub fn from_components(x: f64, y: f64, z: f64, w: f64) -> Self {
        if w < 0.0 {
            Self::assemble(-x, -y, -z, -w)
        } else {
            Self::assemble(x, y, z, w)
        }
    }

    fn assemble(x: f64, y: f64, z: f64, w: f64) -> Self {
        let rot = round_matrix_dp(
            &Matrix3::new(
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - z * w),
                2.0 * (x * z + y * w),
                2.0 * (x * y + z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (z * y - x * w),
                2.0 * (x * z - y * w),
                2.0 * (z * y + x * w),
                1.0 - 2.0 * (x * x + y * y),
            ),
            QUANTIZE_DP,
        );
        Self { x, y, z, w, rot }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    /// The vector part `(x, y, z)`.
    pub fn vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn conjugate(&self) -> Self {
        Self::assemble(-self.x, -self.y, -self.z, self.w)
    }

    /// The cached 3x3 rotation matrix.
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        self.rot
    }

    /// Rotate a 3-vector by this quaternion's rotation matrix.
    pub fn rotate_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rot * v
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        let v1 = self.vector();
        let v2 = rhs.vector();
        let v = v1.cross(&v2) + self.w * v2 + rhs.w * v1;
        let w = self.w * rhs.w - v1.dot(&v2);
        Quaternion::from_components(v.x, v.y, v.z, w)
    }
}

/// Quotient `q1 * conjugate(q2)`; exact inverse rotation for unit operands.
impl Div for Quaternion {
    type Output = Quaternion;

    fn div(self, rhs: Quaternion) -> Quaternion {
        self * rhs.conjugate()
    }
}

impl Mul<Vector3<f64>> for Quaternion {
    type Output = Vector3<f64>;

    fn mul(self, rhs: Vector3<f64>) -> Vector3<f64> {
        self.rotate_vector(&rhs)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
