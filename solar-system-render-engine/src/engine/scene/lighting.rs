use bevy::prelude::*;

use crate::engine::assets::scene_config::LightingConfig;

#[derive(Component)]
pub struct SunLight;

/// White point light at the sun's centre. The sun mesh is attached as a child by the caller.
pub fn spawn_sun_light(commands: &mut Commands, position: Vec3, config: &LightingConfig) -> Entity {
    commands
        .spawn((
            PointLight {
                color: Color::WHITE,
                intensity: config.sun_intensity,
                range: config.sun_range,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(position),
            Visibility::Visible,
            SunLight,
        ))
        .id()
}

pub fn ambient_light(config: &LightingConfig) -> AmbientLight {
    AmbientLight {
        color: Color::WHITE,
        brightness: config.ambient_brightness,
        ..default()
    }
}
