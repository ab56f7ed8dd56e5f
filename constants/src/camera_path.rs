/// Bodies closer than this to the camera become the orbit target.
pub const FOCUS_DISTANCE: f32 = 60.0;

/// Camera distance from the origin along +Z at zero scroll.
pub const CAMERA_BASE_DISTANCE: f32 = 50.0;

/// Extra distance travelled over the full scroll range.
pub const CAMERA_TRAVEL_DISTANCE: f32 = 100.0;

/// Initial camera position.
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, CAMERA_BASE_DISTANCE];

pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Orbit controller tuning
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;
pub const ORBIT_MAX_DISTANCE: f32 = 500.0;
/// 2.0 completes one revolution every 30 seconds.
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 2.0;

/// Height of the emulated page on native builds, in logical pixels.
pub const VIRTUAL_PAGE_HEIGHT: f32 = 4000.0;
pub const PIXELS_PER_SCROLL_LINE: f32 = 40.0;
/// Orbit radians per pixel of right-drag.
pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.0035;
/// Fraction of the orbit radius dollied per wheel line.
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.1;
