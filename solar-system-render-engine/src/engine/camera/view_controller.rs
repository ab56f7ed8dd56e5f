use bevy::prelude::*;
use constants::camera_path::{CAMERA_BASE_DISTANCE, CAMERA_TRAVEL_DISTANCE, FOCUS_DISTANCE};
use std::f32::consts::PI;

use crate::engine::camera::orbit_camera::{OrbitCamera, SceneCamera};
use crate::engine::camera::scroll::{ScrollChanged, ScrollProgress};
use crate::engine::scene::bodies::{BodyRegistry, CelestialBody};

/// Where the camera sits and what it looks at. Derived from scroll progress, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at_target: Vec3,
}

/// Shape of the scroll-driven camera path and the focus threshold.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    pub base_distance: f32,
    pub travel_distance: f32,
    pub focus_distance: f32,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            base_distance: CAMERA_BASE_DISTANCE,
            travel_distance: CAMERA_TRAVEL_DISTANCE,
            focus_distance: FOCUS_DISTANCE,
        }
    }
}

impl CameraPath {
    /// Camera position for a scroll progress. The half-circle sweeps from +Z to -Z
    /// while moving away from the origin; Y is passed through untouched.
    pub fn position_for(&self, scroll_progress: f32, current_camera_y: f32) -> Vec3 {
        let progress = ScrollProgress::new(scroll_progress).value();
        let angle = progress * PI;
        let distance = progress * self.travel_distance;

        Vec3::new(
            distance * angle.sin(),
            current_camera_y,
            self.base_distance + distance * angle.cos(),
        )
    }

    /// First body in list order closer than the focus distance to `camera_position`.
    ///
    /// This is a first match, not the nearest body: with two bodies in range the
    /// earlier one wins even if the later one is closer.
    pub fn select_focus_target<'a>(
        &self,
        bodies: &'a [CelestialBody],
        camera_position: Vec3,
    ) -> Option<(usize, &'a CelestialBody)> {
        bodies.iter().enumerate().find(|(_, body)| {
            let distance = body.position.distance(camera_position);
            debug!("{} is {:.2} from the camera", body.name, distance);
            distance < self.focus_distance
        })
    }

    /// Full pose for a scroll step, plus the index of the focused body.
    /// Focus is judged from the camera position before the move, not the one being computed.
    pub fn pose(
        &self,
        scroll_progress: f32,
        current_camera_y: f32,
        bodies: &[CelestialBody],
        camera_position: Vec3,
    ) -> (CameraPose, Option<usize>) {
        let focus = self.select_focus_target(bodies, camera_position);
        let pose = CameraPose {
            position: self.position_for(scroll_progress, current_camera_y),
            look_at_target: focus.map_or(Vec3::ZERO, |(_, body)| body.position),
        };
        (pose, focus.map(|(index, _)| index))
    }
}

/// Pose along the default camera path.
pub fn compute_camera_pose(
    scroll_progress: f32,
    current_camera_y: f32,
    bodies: &[CelestialBody],
    camera_position: Vec3,
) -> CameraPose {
    CameraPath::default()
        .pose(scroll_progress, current_camera_y, bodies, camera_position)
        .0
}

/// Move the camera for each scroll change and hand the focus point to the orbit controller.
pub fn scroll_camera_system(
    mut scroll_events: EventReader<ScrollChanged>,
    registry: Res<BodyRegistry>,
    path: Res<CameraPath>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut focused: Local<Option<usize>>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        scroll_events.clear();
        return;
    };

    for event in scroll_events.read() {
        let camera_position = camera_transform.translation;
        let (pose, focus) = path.pose(
            event.progress.value(),
            camera_position.y,
            registry.bodies(),
            camera_position,
        );

        if focus != *focused {
            match focus.and_then(|index| registry.get(index)) {
                Some(body) => info!("Looking at {}", body.name),
                None => info!("No body in range, looking at the origin"),
            }
            *focused = focus;
        }

        camera_transform.translation = pose.position;
        orbit.target = pose.look_at_target;
    }
}
