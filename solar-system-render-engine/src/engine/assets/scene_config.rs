use bevy::prelude::*;
use constants::camera_path::*;
use constants::celestial::{BACKGROUND_TEXTURE, BODY_CATALOG, BodyInfo};
use constants::spiral::{MAX_SPIRAL_POINT_COUNT, SPIRAL_POINT_COUNT, SPIRAL_SCALE};
use serde::{Deserialize, Serialize};

use crate::constants::render_settings::{
    AMBIENT_BRIGHTNESS, BLOOM_SETTINGS, LABEL_FONT_SIZE, LABEL_OFFSET, SUN_GLOW, SUN_LIGHT_INTENSITY,
    SUN_LIGHT_RANGE,
};
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::camera::scroll::ScrollSettings;
use crate::engine::camera::view_controller::CameraPath;
use crate::engine::scene::bodies::CelestialBody;

/// One body entry. Mirrors the JSON structure exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub position: [f32; 3],
    pub radius: f32,
    #[serde(default)]
    pub rotation_speed: f32,
    #[serde(default)]
    pub orbit_speed: f32,
    #[serde(default)]
    pub texture: Option<String>,
    /// Emissive bodies carry the scene's point light.
    #[serde(default)]
    pub emissive: bool,
}

impl From<&BodyInfo> for BodyConfig {
    fn from(info: &BodyInfo) -> Self {
        Self {
            name: info.name.to_string(),
            position: info.position,
            radius: info.radius,
            rotation_speed: info.rotation_speed,
            orbit_speed: info.orbit_speed,
            texture: Some(info.texture.to_string()),
            emissive: info.emissive,
        }
    }
}

impl BodyConfig {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn to_celestial_body(&self) -> CelestialBody {
        CelestialBody::new(self.name.clone(), self.position(), self.rotation_speed)
            .with_radius(self.radius)
            .with_orbit_speed(self.orbit_speed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub start_position: [f32; 3],
    pub focus_distance: f32,
    pub base_distance: f32,
    pub travel_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            start_position: CAMERA_START,
            focus_distance: FOCUS_DISTANCE,
            base_distance: CAMERA_BASE_DISTANCE,
            travel_distance: CAMERA_TRAVEL_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping_factor: ORBIT_DAMPING_FACTOR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_sensitivity: ORBIT_ROTATE_SENSITIVITY,
            zoom_sensitivity: ORBIT_ZOOM_SENSITIVITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub virtual_page_height: f32,
    pub pixels_per_line: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            virtual_page_height: VIRTUAL_PAGE_HEIGHT,
            pixels_per_line: PIXELS_PER_SCROLL_LINE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    pub intensity: f32,
    pub threshold: f32,
    pub threshold_softness: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            intensity: BLOOM_SETTINGS.intensity,
            threshold: BLOOM_SETTINGS.prefilter.threshold,
            threshold_softness: BLOOM_SETTINGS.prefilter.threshold_softness,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub count: usize,
    pub scale: f32,
    pub visible: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            count: SPIRAL_POINT_COUNT,
            scale: SPIRAL_SCALE,
            visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub size: f32,
    pub divisions: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            divisions: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub sun_intensity: f32,
    pub sun_range: f32,
    /// Multiplier on the sun texture; values above 1 feed the bloom pass.
    pub sun_glow: f32,
    pub ambient_brightness: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            sun_intensity: SUN_LIGHT_INTENSITY,
            sun_range: SUN_LIGHT_RANGE,
            sun_glow: SUN_GLOW,
            ambient_brightness: AMBIENT_BRIGHTNESS,
        }
    }
}

/// Complete scene configuration as a Bevy asset.
/// Every section falls back to built-in defaults when absent from the JSON.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub bodies: Vec<BodyConfig>,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub scroll: ScrollConfig,
    pub bloom: BloomConfig,
    pub spiral: SpiralConfig,
    pub grid: GridConfig,
    pub lighting: LightingConfig,
    pub background_texture: Option<String>,
    pub label_offset: f32,
    pub label_font_size: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bodies: BODY_CATALOG.iter().map(BodyConfig::from).collect(),
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
            scroll: ScrollConfig::default(),
            bloom: BloomConfig::default(),
            spiral: SpiralConfig::default(),
            grid: GridConfig::default(),
            lighting: LightingConfig::default(),
            background_texture: Some(BACKGROUND_TEXTURE.to_string()),
            label_offset: LABEL_OFFSET,
            label_font_size: LABEL_FONT_SIZE,
        }
    }
}

impl SceneConfig {
    /// Reject configs the scene cannot be built from. Reports the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        for (i, body) in self.bodies.iter().enumerate() {
            if body.name.trim().is_empty() {
                return Err(format!("body #{i} has an empty name"));
            }
            if body.position.iter().any(|c| !c.is_finite()) {
                return Err(format!("body '{}' has a non-finite position", body.name));
            }
            if !(body.radius > 0.0) {
                return Err(format!("body '{}' radius must be positive", body.name));
            }
            if !body.rotation_speed.is_finite() {
                return Err(format!("body '{}' has a non-finite rotation speed", body.name));
            }
            if self.bodies[..i].iter().any(|other| other.name == body.name) {
                return Err(format!("duplicate body name '{}'", body.name));
            }
        }

        if !(self.orbit.min_distance > 0.0) || self.orbit.min_distance > self.orbit.max_distance {
            return Err(format!(
                "orbit distance range [{}, {}] is invalid",
                self.orbit.min_distance, self.orbit.max_distance
            ));
        }
        if !(0.0..=1.0).contains(&self.orbit.damping_factor) {
            return Err(format!(
                "orbit damping factor {} must lie in [0, 1]",
                self.orbit.damping_factor
            ));
        }
        if !(self.camera.near > 0.0) || self.camera.near >= self.camera.far {
            return Err(format!(
                "camera clip range [{}, {}] is invalid",
                self.camera.near, self.camera.far
            ));
        }
        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            return Err(format!("camera fov {} is out of range", self.camera.fov_degrees));
        }
        if self.camera.start_position.iter().any(|c| !c.is_finite()) {
            return Err("camera start position must be finite".to_string());
        }

        let finite_fields = [
            ("camera.base_distance", self.camera.base_distance),
            ("camera.travel_distance", self.camera.travel_distance),
            ("camera.focus_distance", self.camera.focus_distance),
            ("orbit.auto_rotate_speed", self.orbit.auto_rotate_speed),
            ("orbit.rotate_sensitivity", self.orbit.rotate_sensitivity),
            ("orbit.zoom_sensitivity", self.orbit.zoom_sensitivity),
            ("spiral.scale", self.spiral.scale),
        ];
        if let Some((field, value)) = finite_fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{field} must be finite, got {value}"));
        }

        if !(self.scroll.virtual_page_height > 0.0 && self.scroll.virtual_page_height.is_finite()) {
            return Err(format!(
                "scroll page height {} must be positive and finite",
                self.scroll.virtual_page_height
            ));
        }
        if !(self.scroll.pixels_per_line > 0.0 && self.scroll.pixels_per_line.is_finite()) {
            return Err(format!(
                "scroll pixels per line {} must be positive and finite",
                self.scroll.pixels_per_line
            ));
        }
        if self.spiral.count > MAX_SPIRAL_POINT_COUNT {
            return Err(format!(
                "spiral count {} exceeds {MAX_SPIRAL_POINT_COUNT}",
                self.spiral.count
            ));
        }

        Ok(())
    }

    /// Bodies in config order, which is also focus-selection order.
    pub fn celestial_bodies(&self) -> Vec<CelestialBody> {
        self.bodies.iter().map(BodyConfig::to_celestial_body).collect()
    }

    pub fn camera_path(&self) -> CameraPath {
        CameraPath {
            base_distance: self.camera.base_distance,
            travel_distance: self.camera.travel_distance,
            focus_distance: self.camera.focus_distance,
        }
    }

    pub fn orbit_camera(&self) -> OrbitCamera {
        OrbitCamera {
            target: Vec3::ZERO,
            damping_factor: self.orbit.damping_factor,
            min_distance: self.orbit.min_distance,
            max_distance: self.orbit.max_distance,
            auto_rotate: self.orbit.auto_rotate,
            auto_rotate_speed: self.orbit.auto_rotate_speed,
            rotate_sensitivity: self.orbit.rotate_sensitivity,
            zoom_sensitivity: self.orbit.zoom_sensitivity,
            ..default()
        }
    }

    pub fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            virtual_page_height: self.scroll.virtual_page_height,
            pixels_per_line: self.scroll.pixels_per_line,
        }
    }

    pub fn start_position(&self) -> Vec3 {
        Vec3::from_array(self.camera.start_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SceneConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.bodies.len(), 9);
        assert_eq!(config.bodies[0].name, "Sun");
        assert!(config.bodies[0].emissive);
        assert!((config.camera.focus_distance - 60.0).abs() < f32::EPSILON);
        assert_eq!(config.grid.divisions, 50);
        assert!(!config.spiral.visible);
    }

    #[test]
    fn partial_json_takes_defaults_for_missing_sections() {
        let json = r#"{
            "bodies": [
                { "name": "Sun", "position": [30, 0, 0], "radius": 30, "emissive": true },
                { "name": "Earth", "position": [-100, 0, 364], "radius": 6.371, "rotation_speed": 0.01 }
            ],
            "orbit": { "auto_rotate": false }
        }"#;

        let config: SceneConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.bodies.len(), 2);
        assert_eq!(config.bodies[1].texture, None);
        assert!((config.bodies[0].rotation_speed).abs() < f32::EPSILON);
        assert!(!config.orbit.auto_rotate);
        assert!((config.orbit.max_distance - 500.0).abs() < f32::EPSILON);
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.spiral.count, 10_000);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_json_object_is_the_default_scene() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut config = SceneConfig::default();
        config.bodies[2].name = "Mercury".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Mercury"), "{err}");
    }

    #[test]
    fn bad_radius_and_orbit_range_are_rejected() {
        let mut config = SceneConfig::default();
        config.bodies[1].radius = 0.0;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.orbit.min_distance = 600.0;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.bodies[3].position[1] = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn overflowing_camera_path_is_rejected() {
        // 1e39 does not fit in an f32 and deserializes as infinity.
        let config: SceneConfig =
            serde_json::from_str(r#"{"camera":{"travel_distance":1e39}}"#).unwrap();
        assert!(config.camera.travel_distance.is_infinite());
        let err = config.validate().unwrap_err();
        assert!(err.contains("camera.travel_distance"), "{err}");

        let mut config = SceneConfig::default();
        config.camera.base_distance = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.camera.focus_distance = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.camera.start_position[2] = f32::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_finite_orbit_and_scroll_tuning_is_rejected() {
        let mut config = SceneConfig::default();
        config.orbit.auto_rotate_speed = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.scroll.virtual_page_height = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.scroll.virtual_page_height = 0.0;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.scroll.pixels_per_line = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn spiral_limits_are_enforced() {
        let mut config = SceneConfig::default();
        config.spiral.scale = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.spiral.count = MAX_SPIRAL_POINT_COUNT + 1;
        let err = config.validate().unwrap_err();
        assert!(err.contains("spiral count"), "{err}");

        let mut config = SceneConfig::default();
        config.spiral.count = MAX_SPIRAL_POINT_COUNT;
        config.spiral.scale = -4.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn celestial_bodies_keep_config_order() {
        let config = SceneConfig::default();
        let names: Vec<_> = config
            .celestial_bodies()
            .into_iter()
            .map(|body| body.name)
            .collect();
        assert_eq!(
            names,
            ["Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn derived_resources_follow_config() {
        let mut config = SceneConfig::default();
        config.camera.focus_distance = 75.0;
        config.orbit.min_distance = 20.0;

        assert!((config.camera_path().focus_distance - 75.0).abs() < f32::EPSILON);
        assert!((config.orbit_camera().min_distance - 20.0).abs() < f32::EPSILON);
        assert_eq!(config.start_position(), Vec3::new(0.0, 0.0, 50.0));
    }
}
