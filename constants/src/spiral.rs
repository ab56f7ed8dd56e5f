/// Points along the decorative spiral.
pub const SPIRAL_POINT_COUNT: usize = 10_000;

/// Outer radius of the spiral.
pub const SPIRAL_SCALE: f32 = 10.0;

/// Largest spiral a scene config may request.
pub const MAX_SPIRAL_POINT_COUNT: usize = 1_000_000;
