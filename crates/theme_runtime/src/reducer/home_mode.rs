//! Reducer for the landing animation selection.

use crate::model::HomeAnimationMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// In-memory landing animation state.
pub struct HomeModeState {
    /// Selected variant.
    pub mode: HomeAnimationMode,
    /// Set once `SetMode` ran; hydration keeps the explicit selection.
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Home-mode store operations expressed as reducer input.
pub enum HomeModeAction {
    /// Bootstrap from storage; `None` when absent or unrecognised.
    Hydrate {
        /// Parsed persisted mode.
        stored: Option<HomeAnimationMode>,
    },
    /// Explicit selection.
    SetMode(HomeAnimationMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects requested by [`reduce_home_mode`].
pub enum HomeModeEffect {
    /// Write the mode token to durable storage.
    PersistMode(HomeAnimationMode),
    /// Push the new mode to observers.
    Notify,
}

/// Applies `action` to `state` and returns the effects to execute.
pub fn reduce_home_mode(state: &mut HomeModeState, action: HomeModeAction) -> Vec<HomeModeEffect> {
    let before = state.mode;
    let mut effects = Vec::new();

    match action {
        HomeModeAction::Hydrate { stored } => {
            if !state.selected {
                state.mode = stored.unwrap_or_default();
            }
            if stored != Some(state.mode) {
                effects.push(HomeModeEffect::PersistMode(state.mode));
            }
        }
        HomeModeAction::SetMode(mode) => {
            state.mode = mode;
            state.selected = true;
            effects.push(HomeModeEffect::PersistMode(mode));
        }
    }

    if state.mode != before {
        effects.push(HomeModeEffect::Notify);
    }
    effects
}
