//! Scene construction for the solar system.
//!
//! Builds the sun, planets, their name labels, the star backdrop, the
//! reference grid and the decorative spiral from the active scene config.

/// Backdrop sphere textured with the star map, kept centred on the camera.
pub mod backdrop;

/// Celestial body component, the ordered body registry and body spawning.
pub mod bodies;

/// Flat reference grid on the orbital plane.
pub mod grid;

/// Screen-space name labels projected from body positions.
pub mod labels;

/// Sun point light and ambient lighting.
pub mod lighting;

/// Golden spiral point generator and its line-strip mesh.
pub mod spiral;
