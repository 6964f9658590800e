//! Zero-padded matrix blocks for additive affine composition
//!
//! The engine builds its affine matrices by *adding* two blocks rather than
//! multiplying a homogeneous chain:
//!
//! - a [`LinearBlock`] holding scale-times-rotation, with the last row and
//!   last column forced to zero (it is deliberately not homogeneous);
//! - a [`TranslationBlock`] that is zero except for its last column
//!   `(t..., 1)`.
//!
//! The sum is a valid homogeneous affine matrix precisely because the two
//! blocks occupy disjoint entries. The types exist to keep that zero-padding
//! invariant explicit: blocks can only be built through constructors that
//! enforce it, so a future extension (shear, say) cannot silently break the
//! additive scheme.

use nalgebra::{Matrix3, Matrix4, SMatrix};
use std::ops::Add;

/// A scale/rotation block with zero last row and column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBlock<const N: usize> {
    matrix: SMatrix<f64, N, N>,
}

/// A block that is zero except for the last column `(t..., 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationBlock<const N: usize> {
    matrix: SMatrix<f64, N, N>,
}

impl<const N: usize> LinearBlock<N> {
    /// Multiply by the uniform scale matrix `scale * I` on the left. The
    /// zero padding survives because scaling maps zero entries to zero.
    pub fn scaled(&self, scale: f64) -> Self {
        let scaling = SMatrix::<f64, N, N>::identity() * scale;
        Self {
            matrix: scaling * self.matrix,
        }
    }

    pub fn as_matrix(&self) -> &SMatrix<f64, N, N> {
        &self.matrix
    }
}

impl<const N: usize> TranslationBlock<N> {
    pub fn as_matrix(&self) -> &SMatrix<f64, N, N> {
        &self.matrix
    }
}

impl LinearBlock<3> {
    /// Planar rotation by `angle` radians. The trigonometry is evaluated at
    /// reduced (`f32`) precision and promoted, matching the narrowed 2D
    /// rotation construction of the rest of the pipeline.
    pub fn planar_rotation(angle: f64) -> Self {
        let (sin, cos) = (angle as f32).sin_cos();
        let (sin, cos) = (f64::from(sin), f64::from(cos));
        Self {
            matrix: Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 0.0),
        }
    }
}

impl LinearBlock<4> {
    /// Embed a 3x3 rotation into the top-left corner of an otherwise zero
    /// 4x4 block.
    pub fn embed_rotation(rotation: &Matrix3<f64>) -> Self {
        let mut matrix = Matrix4::zeros();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
        Self { matrix }
    }
}

impl TranslationBlock<3> {
    pub fn planar(tx: f64, ty: f64) -> Self {
        let mut matrix = Matrix3::zeros();
        matrix[(0, 2)] = tx;
        matrix[(1, 2)] = ty;
        matrix[(2, 2)] = 1.0;
        Self { matrix }
    }
}

impl TranslationBlock<4> {
    pub fn spatial(tx: f64, ty: f64, tz: f64) -> Self {
        let mut matrix = Matrix4::zeros();
        matrix[(0, 3)] = tx;
        matrix[(1, 3)] = ty;
        matrix[(2, 3)] = tz;
        matrix[(3, 3)] = 1.0;
        Self { matrix }
    }
}

/// The additive composition: disjoint entries, so the sum is affine.
impl<const N: usize> Add<TranslationBlock<N>> for LinearBlock<N> {
    type Output = SMatrix<f64, N, N>;

    fn add(self, rhs: TranslationBlock<N>) -> Self::Output {
        self.matrix + rhs.matrix
    }
}
