use bevy::prelude::*;
use bevy::render::render_resource::Face;

use crate::constants::render_settings::BACKDROP_FAR_FRACTION;
use crate::engine::camera::orbit_camera::SceneCamera;

#[derive(Component)]
pub struct StarBackdrop;

/// Inside-out textured sphere just short of the far plane.
pub fn spawn_star_backdrop(
    commands: &mut Commands,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Option<&str>,
    camera_far: f32,
) {
    let Some(texture) = texture else {
        return;
    };

    let radius = camera_far * BACKDROP_FAR_FRACTION;
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(texture.to_string())),
            unlit: true,
            cull_mode: Some(Face::Front),
            ..default()
        })),
        Transform::IDENTITY,
        StarBackdrop,
    ));
}

/// Keep the backdrop centred on the camera so it never clips.
pub fn follow_camera_backdrop(
    camera_query: Query<&Transform, (With<SceneCamera>, Without<StarBackdrop>)>,
    mut backdrop_query: Query<&mut Transform, With<StarBackdrop>>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };
    for mut transform in &mut backdrop_query {
        transform.translation = camera_transform.translation;
    }
}
