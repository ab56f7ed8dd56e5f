use bevy::prelude::*;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::orbit_camera::spawn_scene_camera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::backdrop::spawn_star_backdrop;
use crate::engine::scene::bodies::spawn_celestial_bodies;
use crate::engine::scene::grid::create_ground_grid;
use crate::engine::scene::lighting::ambient_light;
use crate::engine::scene::spiral::spawn_spiral;

pub fn create_scene_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Option<Res<SceneConfig>>,
) {
    if loading_progress.scene_spawned || !loading_progress.config_resolved {
        return;
    }

    let Some(config) = config else {
        return;
    };

    let registry = spawn_celestial_bodies(
        &mut commands,
        &asset_server,
        &mut meshes,
        &mut standard_materials,
        &config,
    );
    if registry.is_empty() {
        warn!("Scene config has no bodies; the camera will always look at the origin");
    } else {
        info!("{} celestial bodies registered", registry.len());
    }

    create_ground_grid(
        &mut commands,
        &mut meshes,
        &mut standard_materials,
        &config.grid,
    );

    spawn_spiral(
        &mut commands,
        &mut meshes,
        &mut standard_materials,
        &config.spiral,
    );

    spawn_star_backdrop(
        &mut commands,
        &asset_server,
        &mut meshes,
        &mut standard_materials,
        config.background_texture.as_deref(),
        config.camera.far,
    );

    spawn_scene_camera(&mut commands, &config);

    commands.insert_resource(ambient_light(&config.lighting));
    commands.insert_resource(registry);
    commands.insert_resource(config.camera_path());
    commands.insert_resource(config.orbit_camera());
    commands.insert_resource(config.scroll_settings());

    loading_progress.scene_spawned = true;
    info!("Solar system scene ready");
}
