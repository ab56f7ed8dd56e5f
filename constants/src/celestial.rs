/// Index of the sun in [`BODY_CATALOG`].
pub const SUN_INDEX: usize = 0;

/// Built-in description of a body in the default scene.
pub struct BodyInfo {
    pub name: &'static str,
    pub position: [f32; 3],
    pub radius: f32,
    /// Radians per frame at a 60 Hz reference rate.
    pub rotation_speed: f32,
    /// Carried for completeness, never animated.
    pub orbit_speed: f32,
    pub texture: &'static str,
    pub emissive: bool,
}

/// Default scene layout. Order matters: focus selection walks this list front to back.
pub const BODY_CATALOG: &[BodyInfo] = &[
    BodyInfo {
        name: "Sun",
        position: [30.0, 0.0, 0.0],
        radius: 30.0,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_sun.jpg",
        emissive: true,
    },
    BodyInfo {
        name: "Mercury",
        position: [-120.0, 0.0, -110.0],
        radius: 2.44,
        rotation_speed: 0.05,
        orbit_speed: 0.0,
        texture: "img/textures/2k_mercury.jpg",
        emissive: false,
    },
    BodyInfo {
        name: "Venus",
        position: [190.0, 0.0, -115.0],
        radius: 6.052,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_venus_surface.jpg",
        emissive: false,
    },
    BodyInfo {
        name: "Earth",
        position: [-100.0, 0.0, 364.0],
        radius: 6.371,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_earth_daymap.jpg",
        emissive: false,
    },
    BodyInfo {
        name: "Mars",
        position: [-350.0, 0.0, 0.0],
        radius: 3.39,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_mars.jpg",
        emissive: false,
    },
    BodyInfo {
        name: "Jupiter",
        position: [-330.0, 0.0, -234.0],
        radius: 39.911,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_jupiter.jpg",
        emissive: false,
    },
    BodyInfo {
        name: "Saturn",
        position: [280.0, 0.0, 0.0],
        radius: 28.232,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_saturn.jpg",
        emissive: false,
    },
    BodyInfo {
        name: "Uranus",
        position: [340.0, 0.0, 0.0],
        radius: 15.362,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_uranus.jpg",
        emissive: false,
    },
    BodyInfo {
        name: "Neptune",
        position: [420.0, 0.0, 0.0],
        radius: 14.622,
        rotation_speed: 0.01,
        orbit_speed: 0.0,
        texture: "img/textures/2k_neptune.jpg",
        emissive: false,
    },
];

/// Star map drawn on the inside of the background sphere.
pub const BACKGROUND_TEXTURE: &str = "img/textures/2k_stars_milky_way.jpg";

pub fn get_body_info(name: &str) -> Option<&'static BodyInfo> {
    BODY_CATALOG.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_sun_and_eight_planets() {
        assert_eq!(BODY_CATALOG.len(), 9);
        assert_eq!(BODY_CATALOG[SUN_INDEX].name, "Sun");
        assert!(BODY_CATALOG[SUN_INDEX].emissive);
        assert_eq!(BODY_CATALOG.iter().filter(|b| b.emissive).count(), 1);
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in BODY_CATALOG.iter().enumerate() {
            for b in &BODY_CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let earth = get_body_info("earth").unwrap();
        assert_eq!(earth.position, [-100.0, 0.0, 364.0]);
        assert!(get_body_info("Pluto").is_none());
    }
}
