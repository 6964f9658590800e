//! Affine transform construction and application
//!
//! This crate builds composed affine matrices (uniform scale, rotation,
//! translation) for 2D and 3D homogeneous point sets and applies them. The
//! composition is additive: a zero-padded linear block plus a translation
//! block, see [`blocks`].

pub mod blocks;
pub mod engine;

pub use blocks::*;
pub use engine::*;
