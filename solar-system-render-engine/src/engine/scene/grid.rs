//! Flat reference grid on the orbital plane
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::view::NoFrustumCulling;

use crate::engine::assets::scene_config::GridConfig;

#[derive(Component)]
pub struct GroundGrid;

/// Create the grid centred on the origin at y = 0
pub fn create_ground_grid(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &GridConfig,
) {
    if config.divisions == 0 || !(config.size > 0.0) {
        warn!(
            "Grid skipped: size {} with {} divisions",
            config.size, config.divisions
        );
        return;
    }

    let grid_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.5, 0.5, 0.5, 0.5),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(grid_mesh(config.size, config.divisions))),
        MeshMaterial3d(grid_material),
        Visibility::Visible,
        NoFrustumCulling,
        Transform::IDENTITY,
        GroundGrid,
    ));
}

/// Line list with `divisions + 1` lines along each axis
pub fn grid_mesh(size: f32, divisions: u32) -> Mesh {
    let half = size * 0.5;
    let step = size / divisions as f32;

    let mut vertices = Vec::with_capacity(4 * (divisions as usize + 1));
    let mut indices = Vec::with_capacity(4 * (divisions as usize + 1));

    for i in 0..=divisions {
        let offset = -half + i as f32 * step;

        // Line running along Z, fixed X
        vertices.push([offset, 0.0, -half]);
        vertices.push([offset, 0.0, half]);

        // Line running along X, fixed Z
        vertices.push([-half, 0.0, offset]);
        vertices.push([half, 0.0, offset]);
    }

    for i in 0..vertices.len() as u32 {
        indices.push(i);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}
