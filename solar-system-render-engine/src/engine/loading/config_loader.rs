use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::path::SCENE_CONFIG_PATH;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SceneConfig>>,
}

// Start the loading process
pub fn start_loading(
    mut config_loader: ResMut<ConfigLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading scene config from: {}", SCENE_CONFIG_PATH);
    config_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
    loading_progress.config_requested = true;
}

/// Pick the config the scene is built from: the loaded asset when it is valid,
/// the built-in defaults otherwise.
pub fn resolve_config(loaded: Option<&SceneConfig>) -> (SceneConfig, bool) {
    match loaded {
        Some(config) => match config.validate() {
            Ok(()) => (config.clone(), false),
            Err(problem) => {
                warn!("Scene config rejected ({problem}); using built-in defaults");
                (SceneConfig::default(), true)
            }
        },
        None => (SceneConfig::default(), true),
    }
}

// Insert the active config once the asset arrives or fails
pub fn load_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SceneConfig>>,
) {
    if loading_progress.config_resolved || !loading_progress.config_requested {
        return;
    }

    let Some(ref handle) = config_loader.handle else {
        return;
    };

    let loaded = configs.get(handle);
    if loaded.is_none() {
        match asset_server.get_load_state(handle) {
            Some(LoadState::Failed(err)) => {
                warn!("Scene config failed to load ({err}); using built-in defaults");
            }
            _ => return,
        }
    }

    let (config, used_fallback) = resolve_config(loaded);
    info!("✓ Scene config ready with {} bodies", config.bodies.len());

    commands.insert_resource(config);
    loading_progress.used_fallback = used_fallback;
    loading_progress.config_resolved = true;
}
