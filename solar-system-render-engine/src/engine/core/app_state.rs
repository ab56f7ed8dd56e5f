use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Transition to Running once the scene entities exist
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_spawned {
        if loading_progress.used_fallback {
            info!("→ Running with built-in scene defaults");
        } else {
            info!("→ Running with loaded scene config");
        }
        next_state.set(AppState::Running);
    }
}
