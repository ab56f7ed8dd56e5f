//! Per-frame runtime systems.

/// Body spin animation.
pub mod animation;

/// Keyboard-triggered camera and focus diagnostics.
pub mod debug_camera;

/// FPS overlay for native builds.
pub mod fps_tracking;
