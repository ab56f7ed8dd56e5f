use bevy::core_pipeline::bloom::{Bloom, BloomPrefilter};

pub const BLOOM_SETTINGS: Bloom = Bloom {
    intensity: 0.3,
    prefilter: BloomPrefilter {
        threshold: 0.85,
        threshold_softness: 0.4,
    },
    ..Bloom::NATURAL
};

/// Point light carried by the sun, in lumens.
pub const SUN_LIGHT_INTENSITY: f32 = 2.5e10;
pub const SUN_LIGHT_RANGE: f32 = 2000.0;
pub const SUN_GLOW: f32 = 3.0;
pub const AMBIENT_BRIGHTNESS: f32 = 40.0;

pub const LABEL_OFFSET: f32 = 5.0;
pub const LABEL_FONT_SIZE: f32 = 16.0;

/// Background sphere radius as a fraction of the camera far plane.
pub const BACKDROP_FAR_FRACTION: f32 = 0.9;

pub const BODY_SPHERE_SECTORS: u32 = 32;
pub const BODY_SPHERE_STACKS: u32 = 18;
