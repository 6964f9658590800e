//! The transform engine
//!
//! Owns the session's two point collections (2D and 3D, never synchronized
//! with each other), builds composed affine matrices, packs stored points
//! into a coordinate matrix one column per point, and applies the transform.
//! All operations are synchronous in-memory computations; a failed call
//! leaves the stored points unchanged.

use crate::blocks::{LinearBlock, TranslationBlock};
use affinelab_core::{
    round_matrix_dp, Error, Matrix3, Matrix3xX, Matrix4, Matrix4xX, Point2h, Point3h, PointSet,
    Quaternion, Result, Vector3,
};
use serde::{Deserialize, Serialize};

/// Decimal places kept in transformed coordinates.
const RESULT_DP: u32 = 3;

/// Session state and transform pipeline for 2D and 3D point sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformEngine {
    points_2d: PointSet<Point2h>,
    points_3d: PointSet<Point3h>,
}

fn ensure_finite(values: &[f64], what: &str) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::Domain(format!("{what} must be finite")))
    }
}

impl TransformEngine {
    /// Create an engine with empty 2D and 3D point sets.
    pub fn new() -> Self {
        Self {
            points_2d: PointSet::new(),
            points_3d: PointSet::new(),
        }
    }

    /// Append a 2D point with homogeneous coordinate 1.
    ///
    /// Fails with a domain error on non-finite coordinates.
    pub fn add_point_2d(&mut self, x: f32, y: f32) -> Result<()> {
        ensure_finite(&[f64::from(x), f64::from(y)], "point coordinates")?;
        self.points_2d.push(Point2h::new(x, y));
        Ok(())
    }

    /// Append a 3D point with homogeneous coordinate 1.
    pub fn add_point_3d(&mut self, x: f32, y: f32, z: f32) -> Result<()> {
        ensure_finite(&[f64::from(x), f64::from(y), f64::from(z)], "point coordinates")?;
        self.points_3d.push(Point3h::new(x, y, z));
        Ok(())
    }

    /// Empty both point sets.
    pub fn clear_all(&mut self) {
        self.points_2d.clear();
        self.points_3d.clear();
    }

    /// The stored 2D points, in insertion order.
    pub fn points_2d(&self) -> &PointSet<Point2h> {
        &self.points_2d
    }

    /// The stored 3D points, in insertion order.
    pub fn points_3d(&self) -> &PointSet<Point3h> {
        &self.points_3d
    }

    /// Read-only snapshot of the stored 2D points as `[x, y]` pairs.
    pub fn list_points_2d(&self) -> Vec<[f32; 2]> {
        self.points_2d.iter().map(|p| [p.x(), p.y()]).collect()
    }

    /// Read-only snapshot of the stored 3D points as `[x, y, z]` triples.
    pub fn list_points_3d(&self) -> Vec<[f32; 3]> {
        self.points_3d.iter().map(|p| [p.x(), p.y(), p.z()]).collect()
    }

    /// Compose the 2D affine matrix: scale times planar rotation, plus the
    /// translation block. The angle is given in degrees.
    pub fn affine_matrix_2d(scale: f64, angle_degrees: f64, tx: f64, ty: f64) -> Result<Matrix3<f64>> {
        ensure_finite(&[scale, angle_degrees, tx, ty], "transform parameters")?;
        let rotation = LinearBlock::planar_rotation(angle_degrees.to_radians());
        Ok(rotation.scaled(scale) + TranslationBlock::planar(tx, ty))
    }

    /// Compose the 3D affine matrix. The rotation block comes from the
    /// axis-angle quaternion; a zero-norm or non-finite axis is a domain
    /// error.
    pub fn affine_matrix_3d(
        axis: Vector3<f64>,
        scale: f64,
        angle_degrees: f64,
        tx: f64,
        ty: f64,
        tz: f64,
    ) -> Result<Matrix4<f64>> {
        ensure_finite(&[scale, angle_degrees, tx, ty, tz], "transform parameters")?;
        let quaternion = Quaternion::from_axis_angle(axis, angle_degrees.to_radians())?;
        let rotation = LinearBlock::embed_rotation(&quaternion.rotation_matrix());
        Ok(rotation.scaled(scale) + TranslationBlock::spatial(tx, ty, tz))
    }

    /// Pack the stored 2D points into a 3xN matrix, one homogeneous column
    /// per point in insertion order.
    ///
    /// Fails with an empty-input error when no 2D points are stored.
    pub fn pack_points_2d(&self) -> Result<Matrix3xX<f64>> {
        if self.points_2d.is_empty() {
            return Err(Error::EmptyInput("no 2D points to pack".to_string()));
        }
        let columns: Vec<Vector3<f64>> = self
            .points_2d
            .iter()
            .map(|p| p.to_homogeneous().cast::<f64>())
            .collect();
        Ok(Matrix3xX::from_columns(&columns))
    }

    /// Pack the stored 3D points into a 4xN matrix, one homogeneous column
    /// per point in insertion order.
    pub fn pack_points_3d(&self) -> Result<Matrix4xX<f64>> {
        if self.points_3d.is_empty() {
            return Err(Error::EmptyInput("no 3D points to pack".to_string()));
        }
        let columns: Vec<_> = self
            .points_3d
            .iter()
            .map(|p| p.to_homogeneous().cast::<f64>())
            .collect();
        Ok(Matrix4xX::from_columns(&columns))
    }

    /// Apply the composed 2D transform to every stored 2D point. Column i of
    /// the result is the homogeneous image of input point i, rounded to 3
    /// decimals and not renormalized; the affine last row `(0, 0, 1)`
    /// preserves each input's `w`.
    pub fn transform_2d(
        &self,
        scale: f64,
        angle_degrees: f64,
        tx: f64,
        ty: f64,
    ) -> Result<Matrix3xX<f64>> {
        let matrix = Self::affine_matrix_2d(scale, angle_degrees, tx, ty)?;
        let packed = self.pack_points_2d()?;
        Ok(round_matrix_dp(&(matrix * packed), RESULT_DP))
    }

    /// Apply the composed 3D transform to every stored 3D point; see
    /// [`TransformEngine::transform_2d`].
    pub fn transform_3d(
        &self,
        axis: Vector3<f64>,
        scale: f64,
        angle_degrees: f64,
        tx: f64,
        ty: f64,
        tz: f64,
    ) -> Result<Matrix4xX<f64>> {
        let matrix = Self::affine_matrix_3d(axis, scale, angle_degrees, tx, ty, tz)?;
        let packed = self.pack_points_3d()?;
        Ok(round_matrix_dp(&(matrix * packed), RESULT_DP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine_with_2d(points: &[(f32, f32)]) -> TransformEngine {
        let mut engine = TransformEngine::new();
        for &(x, y) in points {
            engine.add_point_2d(x, y).unwrap();
        }
        engine
    }

    #[test]
    fn identity_transform_is_a_no_op() {
        let engine = engine_with_2d(&[(1.5, -2.25), (0.0, 0.0), (3.0, 4.0)]);
        let result = engine.transform_2d(1.0, 0.0, 0.0, 0.0).unwrap();
        let expected = engine.pack_points_2d().unwrap();
        assert_relative_eq!(result, expected, epsilon = 1e-9);
    }

    #[test]
    fn uniform_scale_scales_coordinates() {
        let engine = engine_with_2d(&[(1.0, 0.0)]);
        let result = engine.transform_2d(2.5, 0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(result[(0, 0)], 2.5, epsilon = 1e-9);
        assert_relative_eq!(result[(1, 0)], 0.0, epsilon = 1e-9);
        assert_relative_eq!(result[(2, 0)], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn quarter_turn_rotates_x_to_y() {
        let engine = engine_with_2d(&[(1.0, 0.0)]);
        let result = engine.transform_2d(1.0, 90.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(result[(0, 0)], 0.0, epsilon = 1e-9);
        assert_relative_eq!(result[(1, 0)], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rotation_results_are_rounded_to_three_decimals() {
        let engine = engine_with_2d(&[(1.0, 0.0)]);
        let result = engine.transform_2d(1.0, 30.0, 0.0, 0.0).unwrap();
        assert_eq!(result[(0, 0)], 0.866);
        assert_eq!(result[(1, 0)], 0.5);
    }

    #[test]
    fn translation_offsets_coordinates() {
        let engine = engine_with_2d(&[(1.0, 2.0), (-3.0, 0.5)]);
        let result = engine.transform_2d(1.0, 0.0, 10.0, -4.0).unwrap();
        assert_relative_eq!(result[(0, 0)], 11.0, epsilon = 1e-9);
        assert_relative_eq!(result[(1, 0)], -2.0, epsilon = 1e-9);
        assert_relative_eq!(result[(0, 1)], 7.0, epsilon = 1e-9);
        assert_relative_eq!(result[(1, 1)], -3.5, epsilon = 1e-9);
    }

    #[test]
    fn affine_matrix_keeps_homogeneous_last_row() {
        let m = TransformEngine::affine_matrix_2d(3.0, 42.0, 7.0, -1.0).unwrap();
        assert_eq!(m[(2, 0)], 0.0);
        assert_eq!(m[(2, 1)], 0.0);
        assert_eq!(m[(2, 2)], 1.0);

        let m = TransformEngine::affine_matrix_3d(Vector3::new(1.0, 1.0, 0.0), 2.0, 33.0, 1.0, 2.0, 3.0)
            .unwrap();
        assert_eq!(m.row(3).iter().copied().collect::<Vec<_>>(), vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(1, 3)], 2.0);
        assert_eq!(m[(2, 3)], 3.0);
    }

    #[test]
    fn spatial_quarter_turn_about_z() {
        let mut engine = TransformEngine::new();
        engine.add_point_3d(1.0, 0.0, 0.0).unwrap();
        let result = engine
            .transform_3d(Vector3::new(0.0, 0.0, 1.0), 1.0, 90.0, 0.0, 0.0, 0.0)
            .unwrap();
        assert_relative_eq!(result[(0, 0)], 0.0, epsilon = 1e-9);
        assert_relative_eq!(result[(1, 0)], 1.0, epsilon = 1e-9);
        assert_relative_eq!(result[(2, 0)], 0.0, epsilon = 1e-9);
        assert_relative_eq!(result[(3, 0)], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn packing_preserves_insertion_order() {
        let engine = engine_with_2d(&[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0)]);
        let packed = engine.pack_points_2d().unwrap();
        assert_eq!(packed.ncols(), 3);
        for (i, x) in [1.0, 2.0, 3.0].into_iter().enumerate() {
            assert_eq!(packed[(0, i)], x);
            assert_eq!(packed[(1, i)], 1.0);
            assert_eq!(packed[(2, i)], 1.0);
        }
    }

    #[test]
    fn transform_on_empty_set_fails() {
        let engine = TransformEngine::new();
        assert!(matches!(
            engine.transform_2d(1.0, 0.0, 0.0, 0.0),
            Err(Error::EmptyInput(_))
        ));
        assert!(matches!(
            engine.transform_3d(Vector3::z(), 1.0, 0.0, 0.0, 0.0, 0.0),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn clear_all_empties_both_sets() {
        let mut engine = engine_with_2d(&[(1.0, 1.0)]);
        engine.add_point_3d(1.0, 2.0, 3.0).unwrap();
        engine.clear_all();
        assert!(engine.points_2d().is_empty());
        assert!(engine.points_3d().is_empty());
        assert!(matches!(
            engine.transform_2d(1.0, 0.0, 0.0, 0.0),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn point_sets_are_independent() {
        let engine = engine_with_2d(&[(1.0, 1.0)]);
        // 2D points present, 3D set still empty.
        assert!(matches!(
            engine.transform_3d(Vector3::z(), 1.0, 0.0, 0.0, 0.0, 0.0),
            Err(Error::EmptyInput(_))
        ));
        assert_eq!(engine.list_points_2d(), vec![[1.0, 1.0]]);
        assert!(engine.list_points_3d().is_empty());
    }

    #[test]
    fn non_finite_input_is_rejected_and_state_unchanged() {
        let mut engine = TransformEngine::new();
        assert!(matches!(
            engine.add_point_2d(f32::NAN, 0.0),
            Err(Error::Domain(_))
        ));
        assert!(matches!(
            engine.add_point_3d(0.0, f32::INFINITY, 0.0),
            Err(Error::Domain(_))
        ));
        assert!(engine.points_2d().is_empty());
        assert!(engine.points_3d().is_empty());

        let engine = engine_with_2d(&[(1.0, 1.0)]);
        assert!(matches!(
            engine.transform_2d(f64::NAN, 0.0, 0.0, 0.0),
            Err(Error::Domain(_))
        ));
        assert_eq!(engine.points_2d().len(), 1);
    }

    #[test]
    fn zero_axis_is_a_domain_error() {
        let mut engine = TransformEngine::new();
        engine.add_point_3d(1.0, 0.0, 0.0).unwrap();
        assert!(matches!(
            engine.transform_3d(Vector3::zeros(), 1.0, 45.0, 0.0, 0.0, 0.0),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn scaled_rotation_and_translation_compose() {
        // 2 * R(90) * (1, 0) + (10, 20) = (10, 22)
        let engine = engine_with_2d(&[(1.0, 0.0)]);
        let result = engine.transform_2d(2.0, 90.0, 10.0, 20.0).unwrap();
        assert_relative_eq!(result[(0, 0)], 10.0, epsilon = 1e-9);
        assert_relative_eq!(result[(1, 0)], 22.0, epsilon = 1e-9);
        assert_relative_eq!(result[(2, 0)], 1.0, epsilon = 1e-9);
    }
}
