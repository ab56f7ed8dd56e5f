use bevy::prelude::*;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::orbit_camera::{OrbitCamera, SceneCamera};
use crate::engine::camera::scroll::PageScroll;
use crate::engine::camera::view_controller::CameraPath;
use crate::engine::scene::bodies::BodyRegistry;

/// F1 prints camera and focus state, F2 prints the active scene config as JSON.
pub fn debug_camera_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    camera_query: Query<&Transform, With<SceneCamera>>,
    orbit: Res<OrbitCamera>,
    path: Res<CameraPath>,
    page: Res<PageScroll>,
    registry: Res<BodyRegistry>,
    config: Res<SceneConfig>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        let Ok(camera_transform) = camera_query.single() else {
            warn!("No scene camera to inspect");
            return;
        };
        let position = camera_transform.translation;

        info!("=== CAMERA STATE ===");
        info!("Position: {:?}", position);
        info!("Orbit target: {:?}", orbit.target);
        info!(
            "Scroll: {:.1} / {:.1} (progress {:.3})",
            page.offset,
            page.max_offset,
            page.progress().value()
        );
        for body in registry.bodies() {
            info!(
                "  {:<8} {:>8.2}",
                body.name,
                body.position.distance(position)
            );
        }
        match path.select_focus_target(registry.bodies(), position) {
            Some((_, body)) => info!("Next scroll focuses {}", body.name),
            None => info!("Next scroll focuses the origin"),
        }
    }

    if keyboard.just_pressed(KeyCode::F2) {
        match serde_json::to_string_pretty(&*config) {
            Ok(json) => info!("Active scene config:\n{json}"),
            Err(e) => error!("Failed to serialize scene config: {}", e),
        }
    }
}
