//! Shared scene constants for the solar system renderer and its build script.

pub mod camera_path;
pub mod celestial;
pub mod spiral;
