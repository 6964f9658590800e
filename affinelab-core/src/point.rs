//! Homogeneous point types for 2D and 3D space
//!
//! A point in n-dimensional space is stored with n+1 components; dividing by
//! the trailing homogeneous coordinate `w` recovers the inhomogeneous
//! position. Components are kept at `f32` precision.

use crate::error::{Error, Result};
use nalgebra::{Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A 2D point in homogeneous coordinates `(x, y, w)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point2h {
    vec: Vector3<f32>,
}

/// A 3D point in homogeneous coordinates `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point3h {
    vec: Vector4<f32>,
}

impl Point2h {
    /// Create a point at `(x, y)` with the homogeneous coordinate set to 1.
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_homogeneous(x, y, 1.0)
    }

    /// Create a point directly from homogeneous components.
    pub fn from_homogeneous(x: f32, y: f32, w: f32) -> Self {
        Self {
            vec: Vector3::new(x, y, w),
        }
    }

    pub fn x(&self) -> f32 {
        self.vec.x
    }

    pub fn y(&self) -> f32 {
        self.vec.y
    }

    /// The homogeneous coordinate.
    pub fn w(&self) -> f32 {
        self.vec.z
    }

    /// The raw homogeneous vector `(x, y, w)`.
    pub fn to_homogeneous(&self) -> Vector3<f32> {
        self.vec
    }

    /// Project to inhomogeneous coordinates `(x/w, y/w)`.
    ///
    /// Fails with a domain error when `w` is zero.
    pub fn to_inhomogeneous(&self) -> Result<Vector2<f32>> {
        if self.vec.z == 0.0 {
            return Err(Error::Domain(
                "cannot project a point with zero homogeneous coordinate".to_string(),
            ));
        }
        Ok(Vector2::new(self.vec.x / self.vec.z, self.vec.y / self.vec.z))
    }

    /// Scale the homogeneous representation by an integer factor: every
    /// component is multiplied by `factor`, then the scaled `w` is divided
    /// back by the same factor. The result is `(kx, ky, w)`.
    ///
    /// A zero factor fails with a domain error.
    pub fn rescaled(&self, factor: i32) -> Result<Self> {
        if factor == 0 {
            return Err(Error::Domain(
                "representation scale factor must be nonzero".to_string(),
            ));
        }
        let mut vec = self.vec * factor as f32;
        vec.z /= factor as f32;
        Ok(Self { vec })
    }
}

impl Point3h {
    /// Create a point at `(x, y, z)` with the homogeneous coordinate set to 1.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_homogeneous(x, y, z, 1.0)
    }

    /// Create a point directly from homogeneous components.
    pub fn from_homogeneous(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            vec: Vector4::new(x, y, z, w),
        }
    }

    pub fn x(&self) -> f32 {
        self.vec.x
    }

    pub fn y(&self) -> f32 {
        self.vec.y
    }

    pub fn z(&self) -> f32 {
        self.vec.z
    }

    /// The homogeneous coordinate.
    pub fn w(&self) -> f32 {
        self.vec.w
    }

    /// The raw homogeneous vector `(x, y, z, w)`.
    pub fn to_homogeneous(&self) -> Vector4<f32> {
        self.vec
    }

    /// Project to inhomogeneous coordinates `(x/w, y/w, z/w)`.
    ///
    /// Fails with a domain error when `w` is zero.
    pub fn to_inhomogeneous(&self) -> Result<Vector3<f32>> {
        if self.vec.w == 0.0 {
            return Err(Error::Domain(
                "cannot project a point with zero homogeneous coordinate".to_string(),
            ));
        }
        Ok(Vector3::new(
            self.vec.x / self.vec.w,
            self.vec.y / self.vec.w,
            self.vec.z / self.vec.w,
        ))
    }

    /// Scale the homogeneous representation by an integer factor; see
    /// [`Point2h::rescaled`].
    pub fn rescaled(&self, factor: i32) -> Result<Self> {
        if factor == 0 {
            return Err(Error::Domain(
                "representation scale factor must be nonzero".to_string(),
            ));
        }
        let mut vec = self.vec * factor as f32;
        vec.w /= factor as f32;
        Ok(Self { vec })
    }
}

/// Same-variant equality compares the inhomogeneous projections exactly,
/// elementwise. A point with `w == 0` has no projection and compares unequal
/// to everything, including itself.
impl PartialEq for Point2h {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_inhomogeneous(), other.to_inhomogeneous()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Point3h {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_inhomogeneous(), other.to_inhomogeneous()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// Cross-variant equality is a partial comparison: only the shared `(x, y)`
/// prefix of the projections is compared, the `z` of the 3D point is
/// ignored.
impl PartialEq<Point3h> for Point2h {
    fn eq(&self, other: &Point3h) -> bool {
        match (self.to_inhomogeneous(), other.to_inhomogeneous()) {
            (Ok(a), Ok(b)) => a.x == b.x && a.y == b.y,
            _ => false,
        }
    }
}

impl PartialEq<Point2h> for Point3h {
    fn eq(&self, other: &Point2h) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_by_normalized_coordinates() {
        assert_eq!(Point2h::from_homogeneous(1.0, 2.0, 2.0), Point2h::new(0.5, 1.0));
        assert_ne!(Point2h::new(1.0, 2.0), Point2h::new(1.0, 3.0));
        assert_eq!(
            Point3h::from_homogeneous(2.0, 4.0, 6.0, 2.0),
            Point3h::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn zero_w_never_compares_equal() {
        let degenerate = Point2h::from_homogeneous(1.0, 2.0, 0.0);
        assert_ne!(degenerate, degenerate);
        assert_ne!(degenerate, Point2h::new(1.0, 2.0));
    }

    #[test]
    fn cross_variant_equality_compares_shared_prefix() {
        // (1, 2, 2, 4) projects to (0.25, 0.5, 0.5); (1, 2, 2) to (0.5, 1).
        let p3 = Point3h::from_homogeneous(1.0, 2.0, 2.0, 4.0);
        let p2 = Point2h::from_homogeneous(1.0, 2.0, 2.0);
        assert!(p2 != p3);

        // Same (x, y) projection, z ignored.
        let p3 = Point3h::new(0.5, 1.0, 9.0);
        let p2 = Point2h::from_homogeneous(1.0, 2.0, 2.0);
        assert!(p2 == p3);
        assert!(p3 == p2);
    }

    #[test]
    fn projection_round_trip() {
        let p = Point2h::from_homogeneous(3.0, 6.0, 2.0);
        let h = p.to_homogeneous();
        let rebuilt = Point2h::from_homogeneous(h.x, h.y, h.z);
        assert_eq!(rebuilt.to_inhomogeneous().unwrap(), Vector2::new(1.5, 3.0));

        let p = Point3h::from_homogeneous(2.0, 4.0, 8.0, 4.0);
        let h = p.to_homogeneous();
        let rebuilt = Point3h::from_homogeneous(h.x, h.y, h.z, h.w);
        assert_eq!(
            rebuilt.to_inhomogeneous().unwrap(),
            Vector3::new(0.5, 1.0, 2.0)
        );
    }

    #[test]
    fn projection_fails_on_zero_w() {
        let p = Point2h::from_homogeneous(1.0, 1.0, 0.0);
        assert!(matches!(p.to_inhomogeneous(), Err(Error::Domain(_))));
        let p = Point3h::from_homogeneous(1.0, 1.0, 1.0, 0.0);
        assert!(matches!(p.to_inhomogeneous(), Err(Error::Domain(_))));
    }

    #[test]
    fn rescaled_scales_components_and_restores_w() {
        let p = Point2h::from_homogeneous(1.0, 2.0, 2.0).rescaled(3).unwrap();
        assert_eq!(p.to_homogeneous(), Vector3::new(3.0, 6.0, 2.0));

        let p = Point3h::new(1.0, 2.0, 3.0).rescaled(2).unwrap();
        assert_eq!(p.to_homogeneous(), Vector4::new(2.0, 4.0, 6.0, 1.0));
    }

    #[test]
    fn rescaled_rejects_zero_factor() {
        assert!(matches!(
            Point2h::new(1.0, 1.0).rescaled(0),
            Err(Error::Domain(_))
        ));
    }
}
