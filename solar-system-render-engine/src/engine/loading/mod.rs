//! Scene configuration loading with fallback to built-in defaults.

/// Config handle tracking and resolution into the active config resource.
pub mod config_loader;

/// Loading milestones consulted by state transitions.
pub mod progress;

/// Scene construction once the config is resolved.
pub mod scene_creator;
