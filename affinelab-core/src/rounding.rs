//! Fixed-decimal rounding
//!
//! Every decimal quantization in the pipeline goes through this module: the
//! quaternion scalar and rotation-matrix entries (2 decimals) and the final
//! transformed coordinates (3 decimals). Keeping a single call site makes the
//! quantization easy to audit or toggle.

use nalgebra::allocator::Allocator;
use nalgebra::storage::Storage;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix};

/// Round a value to `decimals` decimal places, half away from zero.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round every entry of a matrix to `decimals` decimal places.
pub fn round_matrix_dp<R, C, S>(matrix: &Matrix<f64, R, C, S>, decimals: u32) -> OMatrix<f64, R, C>
where
    R: Dim,
    C: Dim,
    S: Storage<f64, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    matrix.map(|v| round_dp(v, decimals))
}
