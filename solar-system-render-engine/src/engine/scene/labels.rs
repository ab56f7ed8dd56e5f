use bevy::prelude::*;

use crate::engine::camera::orbit_camera::SceneCamera;

/// Screen-space name tag that follows a body.
#[derive(Component, Debug)]
pub struct BodyLabel {
    pub body: Entity,
    /// World units above the body's centre.
    pub height: f32,
}

pub fn spawn_body_label(
    commands: &mut Commands,
    body: Entity,
    name: &str,
    height: f32,
    font_size: f32,
) {
    commands.spawn((
        Text::new(name),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::srgb(1., 0.2, 0.2)),
        Node {
            position_type: PositionType::Absolute,
            ..default()
        },
        Visibility::Hidden,
        BodyLabel { body, height },
    ));
}

/// World position a label is pinned to.
pub fn label_anchor(body_position: Vec3, height: f32) -> Vec3 {
    body_position + Vec3::Y * height
}

/// Project each label's anchor into the viewport; hide labels behind the camera.
pub fn update_body_labels(
    camera_query: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    bodies: Query<&GlobalTransform>,
    mut labels: Query<(&BodyLabel, &mut Node, &mut Visibility, &ComputedNode)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (label, mut node, mut visibility, computed) in &mut labels {
        let Ok(body_transform) = bodies.get(label.body) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let anchor = label_anchor(body_transform.translation(), label.height);
        match camera.world_to_viewport(camera_transform, anchor) {
            Ok(screen) => {
                // Centre the text horizontally over the anchor.
                let size = computed.size() * computed.inverse_scale_factor();
                node.left = Val::Px(screen.x - size.x * 0.5);
                node.top = Val::Px(screen.y - size.y);
                *visibility = Visibility::Visible;
            }
            Err(_) => *visibility = Visibility::Hidden,
        }
    }
}
