use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller};
use crate::engine::camera::scroll::{PageScroll, ScrollChanged, ScrollSettings, track_page_scroll};
use crate::engine::camera::view_controller::{CameraPath, scroll_camera_system};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::scene_creator::create_scene_when_ready;
use crate::engine::scene::backdrop::follow_camera_backdrop;
use crate::engine::scene::bodies::BodyRegistry;
use crate::engine::scene::labels::update_body_labels;
use crate::engine::systems::animation::spin_celestial_bodies;
use crate::engine::systems::debug_camera::debug_camera_state;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<PageScroll>()
        .init_resource::<ScrollSettings>()
        .init_resource::<CameraPath>()
        .init_resource::<OrbitCamera>()
        .init_resource::<BodyRegistry>()
        .add_event::<ScrollChanged>()
        .insert_resource(ClearColor(Color::BLACK));

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_config_system, create_scene_when_ready, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Scroll moves the camera first, the orbit controller then runs from the new pose,
    // and labels are projected from the final camera transform.
    let camera_systems = (
        track_page_scroll,
        scroll_camera_system,
        orbit_camera_controller,
        follow_camera_backdrop,
        update_body_labels,
    )
        .chain();

    app.add_systems(
        Update,
        (camera_systems, spin_celestial_bodies, debug_camera_state)
            .run_if(in_state(AppState::Running)),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles basic initialisation
#[cfg_attr(target_arch = "wasm32", allow(unused_mut, unused_variables))]
fn setup(mut commands: Commands) {
    info!("=== SOLAR SYSTEM RENDERER ===");

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("Wheel: travel   Ctrl+Wheel: zoom   Right drag: orbit   F1/F2: debug"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
