use bevy::prelude::*;

use crate::engine::scene::bodies::CelestialBody;

/// Spin every body about its own Y axis.
pub fn spin_celestial_bodies(
    mut bodies: Query<(&mut CelestialBody, &mut Transform)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (mut body, mut transform) in &mut bodies {
        let delta = body.advance(dt);
        transform.rotate_y(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn spin_rotates_transform_by_advanced_angle() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        let entity = app
            .world_mut()
            .spawn((
                CelestialBody::new("Mercury", Vec3::ZERO, 0.05),
                Transform::IDENTITY,
            ))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(1.0 / 60.0));
        app.world_mut()
            .run_system_once(spin_celestial_bodies)
            .unwrap();

        let body = app.world().get::<CelestialBody>(entity).unwrap();
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert!((body.rotation - 0.05).abs() < 1e-5);
        let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.05).abs() < 1e-5);
    }
}
