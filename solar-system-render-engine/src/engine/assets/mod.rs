//! Scene configuration asset and its section types.

/// JSON scene configuration loaded through the asset server.
pub mod scene_config;
