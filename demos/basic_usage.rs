//! Basic usage demo for affinelab
//!
//! Builds a small 2D point set and a 3D point set, applies a composed
//! scale/rotate/translate transform to each, and prints the resulting
//! homogeneous coordinate matrices.

use affinelab_core::Vector3;
use affinelab_engine::TransformEngine;

fn main() -> anyhow::Result<()> {
    let mut engine = TransformEngine::new();

    engine.add_point_2d(1.0, 1.0)?;
    engine.add_point_2d(2.0, 1.0)?;
    engine.add_point_2d(3.0, 1.0)?;
    engine.add_point_2d(4.0, 1.0)?;

    println!("2D points: {:?}", engine.list_points_2d());
    println!("Packed columns:\n{}", engine.pack_points_2d()?);

    // Identity parameters leave the points unchanged.
    let unchanged = engine.transform_2d(1.0, 0.0, 0.0, 0.0)?;
    println!("Identity transform:\n{unchanged}");

    // Scale by 2, rotate 90 degrees, translate by (10, -5).
    let transformed = engine.transform_2d(2.0, 90.0, 10.0, -5.0)?;
    println!("Scaled, rotated, translated:\n{transformed}");

    engine.add_point_3d(1.0, 0.0, 0.0)?;
    engine.add_point_3d(0.0, 1.0, 0.0)?;
    println!("3D points: {:?}", engine.list_points_3d());

    // Quarter turn about the z axis.
    let rotated = engine.transform_3d(Vector3::new(0.0, 0.0, 1.0), 1.0, 90.0, 0.0, 0.0, 0.0)?;
    println!("Quarter turn about z:\n{rotated}");

    engine.clear_all();
    println!(
        "After clear_all: {} 2D points, {} 3D points",
        engine.points_2d().len(),
        engine.points_3d().len()
    );

    Ok(())
}
