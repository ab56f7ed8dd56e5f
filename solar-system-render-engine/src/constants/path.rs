/// Scene configuration, relative to the asset root.
pub const SCENE_CONFIG_PATH: &str = "scene/solar_system.json";
