use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::constants::render_settings::{BODY_SPHERE_SECTORS, BODY_SPHERE_STACKS};
use crate::engine::assets::scene_config::{BodyConfig, SceneConfig};
use crate::engine::scene::labels::spawn_body_label;
use crate::engine::scene::lighting::spawn_sun_light;

/// Rotation speeds are expressed per frame at this rate.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// A named body in the scene. `position` is the world-space centre and never changes after setup.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub position: Vec3,
    pub radius: f32,
    pub rotation_speed: f32,
    pub orbit_speed: f32,
    /// Accumulated spin around the body's Y axis, wrapped to [0, TAU).
    pub rotation: f32,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, position: Vec3, rotation_speed: f32) -> Self {
        Self {
            name: name.into(),
            position,
            radius: 1.0,
            rotation_speed,
            orbit_speed: 0.0,
            rotation: 0.0,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_orbit_speed(mut self, orbit_speed: f32) -> Self {
        self.orbit_speed = orbit_speed;
        self
    }

    /// Spin the body forward by `dt` seconds and return the applied angle.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        let delta = self.rotation_speed * dt * REFERENCE_FRAME_RATE;
        self.rotation = (self.rotation + delta).rem_euclid(TAU);
        delta
    }
}

/// Ordered, immutable list of the scene's bodies. Built once when the scene is spawned.
#[derive(Resource, Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn get(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Spawn every configured body with its label and return the registry in config order.
pub fn spawn_celestial_bodies(
    commands: &mut Commands,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SceneConfig,
) -> BodyRegistry {
    let mut bodies = Vec::with_capacity(config.bodies.len());

    for (body_config, body) in config.bodies.iter().zip(config.celestial_bodies()) {
        let mesh = meshes.add(
            Sphere::new(body.radius)
                .mesh()
                .uv(BODY_SPHERE_SECTORS, BODY_SPHERE_STACKS),
        );
        let material = materials.add(body_material(body_config, asset_server, config));

        let entity = if body_config.emissive {
            // The sun mesh hangs off its light so both share one transform.
            let light = spawn_sun_light(commands, body.position, &config.lighting);
            let mesh_entity = commands
                .spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::IDENTITY,
                    body.clone(),
                ))
                .id();
            commands.entity(light).add_child(mesh_entity);
            mesh_entity
        } else {
            commands
                .spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::from_translation(body.position),
                    body.clone(),
                ))
                .id()
        };

        spawn_body_label(
            commands,
            entity,
            &body.name,
            body.radius + config.label_offset,
            config.label_font_size,
        );

        info!(
            "Spawned {} at {:?} (radius {})",
            body.name, body.position, body.radius
        );
        bodies.push(body);
    }

    BodyRegistry::new(bodies)
}

fn body_material(
    body: &BodyConfig,
    asset_server: &AssetServer,
    config: &SceneConfig,
) -> StandardMaterial {
    let texture = body
        .texture
        .as_ref()
        .map(|path| asset_server.load::<Image>(path.clone()));

    if body.emissive {
        // Unlit and brighter than 1.0 so the bloom prefilter picks it up.
        let glow = config.lighting.sun_glow;
        StandardMaterial {
            base_color: Color::linear_rgb(glow, glow, glow),
            base_color_texture: texture,
            unlit: true,
            ..default()
        }
    } else {
        StandardMaterial {
            base_color_texture: texture,
            perceptual_roughness: 0.9,
            ..default()
        }
    }
}
