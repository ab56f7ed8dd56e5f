//! Golden spiral points on the XY plane, plus a decorative line strip built from them.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use std::f64::consts::TAU;

use crate::engine::assets::scene_config::SpiralConfig;

#[derive(Component)]
pub struct SpiralPath;

/// Point `index` of a `count`-point spiral: `t = index / count`, radius `scale * sqrt(t)`.
/// Computed in f64 so large counts still give distinct points.
pub fn spiral_point(index: usize, count: usize, scale: f32) -> Vec3 {
    let t = index as f64 / count as f64;
    let angle = TAU * t;
    let radius = f64::from(scale) * t.sqrt();
    Vec3::new((radius * angle.cos()) as f32, (radius * angle.sin()) as f32, 0.0)
}

/// Lazy spiral. Cloning the iterator restarts it from the centre.
pub fn spiral_points(count: usize, scale: f32) -> impl Iterator<Item = Vec3> + Clone {
    (0..count).map(move |i| spiral_point(i, count, scale))
}

pub fn generate_spiral_points(count: usize, scale: f32) -> Vec<Vec3> {
    spiral_points(count, scale).collect()
}

/// Line strip through the points in order.
pub fn spiral_mesh(points: Vec<Vec3>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, points);
    mesh
}

/// Spawn the spiral as an unlit strip when the config asks for it.
pub fn spawn_spiral(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SpiralConfig,
) {
    if !config.visible || config.count < 2 {
        return;
    }

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.85, 0.4),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(spiral_mesh(generate_spiral_points(config.count, config.scale)))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        SpiralPath,
    ));
    info!("Spiral spawned with {} points", config.count);
}
