use bevy::prelude::*;
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub config_requested: bool,
    pub config_resolved: bool,
    pub used_fallback: bool,
    pub scene_spawned: bool,
}
