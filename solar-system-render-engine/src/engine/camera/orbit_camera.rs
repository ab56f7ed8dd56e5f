use bevy::core_pipeline::bloom::{Bloom, BloomPrefilter};
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::camera_path::{
    ORBIT_AUTO_ROTATE_SPEED, ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
    ORBIT_ROTATE_SENSITIVITY, ORBIT_ZOOM_SENSITIVITY,
};
use std::f32::consts::{PI, TAU};

use crate::constants::render_settings::BLOOM_SETTINGS;
use crate::engine::assets::scene_config::{BloomConfig, SceneConfig};

/// Keeps the polar angle off the poles so `looking_at` never sees a degenerate up vector.
const POLAR_EPSILON: f32 = 1e-3;

/// Marks the camera driven by the scroll path and the orbit controller.
#[derive(Component, Debug, Default)]
pub struct SceneCamera;

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    /// 2.0 is one revolution every 30 seconds.
    pub auto_rotate_speed: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
    // Pending user input, bled off by the damping factor each step
    pub azimuth_velocity: f32,
    pub polar_velocity: f32,
    pub zoom_velocity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            damping_factor: ORBIT_DAMPING_FACTOR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_sensitivity: ORBIT_ROTATE_SENSITIVITY,
            zoom_sensitivity: ORBIT_ZOOM_SENSITIVITY,
            azimuth_velocity: 0.0,
            polar_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }
}

impl OrbitCamera {
    /// Queue a drag in screen pixels.
    pub fn rotate(&mut self, mouse_delta: Vec2) {
        self.azimuth_velocity -= mouse_delta.x * self.rotate_sensitivity;
        self.polar_velocity -= mouse_delta.y * self.rotate_sensitivity;
    }

    /// Queue a dolly; positive steps move towards the target.
    pub fn zoom(&mut self, steps: f32) {
        self.zoom_velocity += steps * self.zoom_sensitivity;
    }

    /// Azimuth added per second of auto-rotation.
    pub fn auto_rotate_rate(&self) -> f32 {
        TAU / 60.0 * self.auto_rotate_speed
    }

    /// Advance the orbit by `dt` seconds from `camera_position` and return the new position.
    pub fn step(&mut self, camera_position: Vec3, dt: f32) -> Vec3 {
        let offset = camera_position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON || !radius.is_finite() {
            return camera_position;
        }

        // Azimuth around +Y measured from +Z, polar angle measured from +Y.
        let mut azimuth = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let mut radius = radius;

        if self.auto_rotate && dt.is_finite() && dt > 0.0 {
            azimuth += self.auto_rotate_rate() * dt;
        }

        let damping = self.damping_factor.clamp(0.0, 1.0);
        azimuth += self.azimuth_velocity * damping;
        polar += self.polar_velocity * damping;
        radius *= 1.0 - self.zoom_velocity * damping;

        self.azimuth_velocity *= 1.0 - damping;
        self.polar_velocity *= 1.0 - damping;
        self.zoom_velocity *= 1.0 - damping;

        polar = polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        radius = radius.clamp(self.min_distance, self.max_distance);

        let sin_polar = polar.sin();
        self.target
            + Vec3::new(
                radius * sin_polar * azimuth.sin(),
                radius * polar.cos(),
                radius * sin_polar * azimuth.cos(),
            )
    }
}

pub fn bloom_from_config(config: &BloomConfig) -> Bloom {
    Bloom {
        intensity: config.intensity,
        prefilter: BloomPrefilter {
            threshold: config.threshold,
            threshold_softness: config.threshold_softness,
        },
        ..BLOOM_SETTINGS
    }
}

/// HDR perspective camera with bloom, starting at the configured position and looking at the origin.
pub fn spawn_scene_camera(commands: &mut Commands, config: &SceneConfig) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            near: config.camera.near,
            far: config.camera.far,
            ..default()
        }),
        Tonemapping::TonyMcMapface,
        bloom_from_config(&config.bloom),
        Transform::from_translation(config.start_position()).looking_at(Vec3::ZERO, Vec3::Y),
        SceneCamera,
    ));
}

/// Right drag orbits, Ctrl + wheel dollies, and the camera always looks at the target.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        orbit.rotate(mouse_delta);
    }

    let scroll_accum: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        })
        .sum();
    if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight])
        && scroll_accum.abs() > f32::EPSILON
    {
        orbit.zoom(scroll_accum);
    }

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let position = orbit.step(camera_transform.translation, time.delta_secs());
    *camera_transform = Transform::from_translation(position).looking_at(orbit.target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_orbit() -> OrbitCamera {
        OrbitCamera {
            auto_rotate: false,
            ..default()
        }
    }

    #[test]
    fn idle_orbit_keeps_position() {
        let mut orbit = still_orbit();
        let start = Vec3::new(10.0, 20.0, 30.0);
        let next = orbit.step(start, 1.0 / 60.0);
        assert!(next.abs_diff_eq(start, 1e-3), "{next:?}");
    }

    #[test]
    fn auto_rotate_circles_at_constant_radius() {
        let mut orbit = OrbitCamera::default();
        let start = Vec3::new(0.0, 0.0, 50.0);
        let next = orbit.step(start, 1.0);
        assert!((next.length() - 50.0).abs() < 1e-3);
        assert!((next.y).abs() < 1e-3);

        let expected = orbit.auto_rotate_rate();
        let azimuth = next.x.atan2(next.z);
        assert!((azimuth - expected).abs() < 1e-4);
    }

    #[test]
    fn thirty_seconds_is_one_revolution_at_default_speed() {
        let orbit = OrbitCamera::default();
        assert!((orbit.auto_rotate_rate() * 30.0 - TAU).abs() < 1e-4);
    }

    #[test]
    fn distance_is_clamped() {
        let mut orbit = still_orbit();
        let too_close = orbit.step(Vec3::new(0.0, 0.0, 2.0), 0.016);
        assert!((too_close.length() - orbit.min_distance).abs() < 1e-3);

        let too_far = orbit.step(Vec3::new(0.0, 0.0, 900.0), 0.016);
        assert!((too_far.length() - orbit.max_distance).abs() < 1e-2);
    }

    #[test]
    fn rotation_input_is_damped_over_frames() {
        let mut orbit = still_orbit();
        orbit.rotate(Vec2::new(-100.0, 0.0));
        let queued = orbit.azimuth_velocity;
        assert!(queued > 0.0);

        let first = orbit.step(Vec3::new(0.0, 0.0, 50.0), 0.016);
        assert!((orbit.azimuth_velocity - queued * (1.0 - orbit.damping_factor)).abs() < 1e-6);
        let turned = first.x.atan2(first.z);
        assert!((turned - queued * orbit.damping_factor).abs() < 1e-4);
    }

    #[test]
    fn orbit_is_relative_to_target() {
        let mut orbit = still_orbit();
        orbit.target = Vec3::new(30.0, 0.0, 0.0);
        let next = orbit.step(Vec3::new(0.0, 0.0, 50.0), 0.016);
        assert!(((next - orbit.target).length() - Vec3::new(-30.0, 0.0, 50.0).length()).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_never_reaches_the_pole() {
        let mut orbit = still_orbit();
        let next = orbit.step(Vec3::new(0.0, 50.0, 0.0), 0.016);
        let horizontal = Vec2::new(next.x, next.z).length();
        assert!(horizontal > 0.0);
    }

    #[test]
    fn bloom_follows_config() {
        let bloom = bloom_from_config(&BloomConfig {
            intensity: 0.5,
            threshold: 0.7,
            threshold_softness: 0.2,
        });
        assert_eq!(bloom.intensity, 0.5);
        assert_eq!(bloom.prefilter.threshold, 0.7);
        assert_eq!(bloom.prefilter.threshold_softness, 0.2);
    }

    #[test]
    fn default_tuning_matches_scene_config_defaults() {
        use crate::engine::assets::scene_config::SceneConfig;

        let from_config = SceneConfig::default().orbit_camera();
        let default = OrbitCamera::default();
        assert_eq!(default.rotate_sensitivity, ORBIT_ROTATE_SENSITIVITY);
        assert_eq!(default.zoom_sensitivity, ORBIT_ZOOM_SENSITIVITY);
        assert_eq!(from_config.rotate_sensitivity, default.rotate_sensitivity);
        assert_eq!(from_config.zoom_sensitivity, default.zoom_sensitivity);
    }

    #[test]
    fn camera_on_target_is_left_alone() {
        let mut orbit = OrbitCamera::default();
        assert_eq!(orbit.step(Vec3::ZERO, 0.016), Vec3::ZERO);
    }
}
