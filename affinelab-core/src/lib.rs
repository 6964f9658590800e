//! Core data structures for affinelab
//!
//! This crate provides the fundamental types for homogeneous-coordinate
//! geometry: 2D and 3D points in homogeneous form, ordered point sets,
//! axis-angle quaternions, and the fixed-decimal rounding used throughout
//! the transform pipeline.

pub mod error;
pub mod point;
pub mod point_set;
pub mod quaternion;
pub mod rounding;

pub use error::*;
pub use point::*;
pub use point_set::*;
pub use quaternion::*;
pub use rounding::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Matrix3xX, Matrix4, Matrix4xX, Vector2, Vector3, Vector4};

/// Common result type for affinelab operations
pub type Result<T> = std::result::Result<T, Error>;
