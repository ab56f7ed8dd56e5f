// build.rs
use std::{env, fs, path::PathBuf};

use constants::camera_path::{
    CAMERA_BASE_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START,
    CAMERA_TRAVEL_DISTANCE, FOCUS_DISTANCE, ORBIT_AUTO_ROTATE_SPEED, ORBIT_DAMPING_FACTOR,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, PIXELS_PER_SCROLL_LINE, VIRTUAL_PAGE_HEIGHT,
};
use constants::celestial::{BACKGROUND_TEXTURE, BODY_CATALOG};
use constants::spiral::{SPIRAL_POINT_COUNT, SPIRAL_SCALE};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/scene/solar_system.json");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let scene_dir = manifest_dir.join("assets").join("scene");
    let config_path = scene_dir.join("solar_system.json");

    // Hand edits to the scene file win over the built-in catalog
    if config_path.exists() {
        return;
    }

    let bodies: Vec<serde_json::Value> = BODY_CATALOG
        .iter()
        .map(|body| {
            serde_json::json!({
                "name": body.name,
                "position": body.position,
                "radius": body.radius,
                "rotation_speed": body.rotation_speed,
                "orbit_speed": body.orbit_speed,
                "texture": body.texture,
                "emissive": body.emissive,
            })
        })
        .collect();

    let scene = serde_json::json!({
        "bodies": bodies,
        "camera": {
            "fov_degrees": CAMERA_FOV_DEGREES,
            "near": CAMERA_NEAR,
            "far": CAMERA_FAR,
            "start_position": CAMERA_START,
            "focus_distance": FOCUS_DISTANCE,
            "base_distance": CAMERA_BASE_DISTANCE,
            "travel_distance": CAMERA_TRAVEL_DISTANCE,
        },
        "orbit": {
            "damping_factor": ORBIT_DAMPING_FACTOR,
            "min_distance": ORBIT_MIN_DISTANCE,
            "max_distance": ORBIT_MAX_DISTANCE,
            "auto_rotate": true,
            "auto_rotate_speed": ORBIT_AUTO_ROTATE_SPEED,
        },
        "scroll": {
            "virtual_page_height": VIRTUAL_PAGE_HEIGHT,
            "pixels_per_line": PIXELS_PER_SCROLL_LINE,
        },
        "spiral": {
            "count": SPIRAL_POINT_COUNT,
            "scale": SPIRAL_SCALE,
            "visible": false,
        },
        "background_texture": BACKGROUND_TEXTURE,
    });

    fs::create_dir_all(&scene_dir).expect("Failed to create assets/scene");
    let json_content = serde_json::to_string_pretty(&scene).unwrap();
    fs::write(&config_path, &json_content).expect("Failed to write solar_system.json to assets");

    println!("cargo:warning=Generated scene config in assets/scene/solar_system.json");
}
