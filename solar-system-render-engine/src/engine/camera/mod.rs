//! Camera control for the solar system scene.
//!
//! Scroll progress drives the camera along a half-circle path and picks a
//! focus body; the orbit controller keeps rotating around that focus.

/// Damped, auto-rotating orbit controller around a target point.
pub mod orbit_camera;

/// Page scroll tracking for native (emulated) and WASM (DOM) builds.
pub mod scroll;

/// Scroll-to-pose mapping and focus body selection.
pub mod view_controller;
