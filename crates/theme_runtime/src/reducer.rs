//! Pure state transitions for the theme store and the runtime effects they request.
//!
//! Stores never mutate their state directly: every operation becomes an action, the reducer
//! updates the state and returns the effects the store must execute (persist, re-apply the
//! appearance marker, notify observers), in that order.

mod home_mode;

use platform_host::ColorScheme;

use crate::{
    config::InitialThemePolicy,
    model::{EffectiveAppearance, ThemeMode, ThemeSnapshot},
};

pub use home_mode::{reduce_home_mode, HomeModeAction, HomeModeEffect, HomeModeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// In-memory theme state: declared mode plus the last known environment scheme.
pub struct ThemeState {
    /// Declared intent.
    pub mode: ThemeMode,
    /// Last scheme reported by the environment signal.
    pub system: ColorScheme,
    /// Set once `SetMode` or `Toggle` ran; hydration never overrides an explicit selection.
    pub selected: bool,
}

impl ThemeState {
    /// Resolved appearance for the current mode and system scheme.
    pub const fn appearance(&self) -> EffectiveAppearance {
        self.mode.resolve(self.system)
    }

    /// Observer-facing view of the state.
    pub const fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            mode: self.mode,
            appearance: self.appearance(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Theme store operations expressed as reducer input.
pub enum ThemeAction {
    /// Bootstrap from storage; `stored` is `None` when the key was absent or unrecognised.
    Hydrate {
        /// Parsed persisted mode.
        stored: Option<ThemeMode>,
        /// Environment scheme at bootstrap time.
        system: ColorScheme,
        /// Fallback used when `stored` is `None`.
        policy: InitialThemePolicy,
    },
    /// Explicit mode selection.
    SetMode(ThemeMode),
    /// Flip the effective appearance, leaving `auto` for a concrete mode.
    Toggle,
    /// The environment's preferred scheme changed.
    SystemSchemeChanged(ColorScheme),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects requested by [`reduce_theme`].
pub enum ThemeEffect {
    /// Write the mode token to durable storage.
    PersistMode(ThemeMode),
    /// Write the appearance marker to the presentation surface.
    ApplyAppearance(EffectiveAppearance),
    /// Push the new snapshot to observers.
    Notify,
}

/// Applies `action` to `state` and returns the effects to execute.
///
/// `Notify` is emitted only when the snapshot actually changed, so re-selecting the current mode
/// re-persists and re-applies without waking observers.
pub fn reduce_theme(state: &mut ThemeState, action: ThemeAction) -> Vec<ThemeEffect> {
    let before = state.snapshot();
    let mut effects = Vec::new();

    match action {
        ThemeAction::Hydrate {
            stored,
            system,
            policy,
        } => {
            state.system = system;
            if !state.selected {
                state.mode = stored.unwrap_or_else(|| policy.fallback_mode(system));
            }
            if stored != Some(state.mode) {
                effects.push(ThemeEffect::PersistMode(state.mode));
            }
            effects.push(ThemeEffect::ApplyAppearance(state.appearance()));
        }
        ThemeAction::SetMode(mode) => {
            state.mode = mode;
            state.selected = true;
            effects.push(ThemeEffect::PersistMode(mode));
            effects.push(ThemeEffect::ApplyAppearance(state.appearance()));
        }
        ThemeAction::Toggle => {
            state.mode = ThemeMode::from(state.appearance().opposite());
            state.selected = true;
            effects.push(ThemeEffect::PersistMode(state.mode));
            effects.push(ThemeEffect::ApplyAppearance(state.appearance()));
        }
        ThemeAction::SystemSchemeChanged(system) => {
            state.system = system;
            if state.mode == ThemeMode::Auto && state.appearance() != before.appearance {
                effects.push(ThemeEffect::ApplyAppearance(state.appearance()));
            }
        }
    }

    if state.snapshot() != before {
        effects.push(ThemeEffect::Notify);
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state(mode: ThemeMode, system: ColorScheme) -> ThemeState {
        ThemeState {
            mode,
            system,
            selected: false,
        }
    }

    #[test]
    fn hydrate_with_valid_value_does_not_rewrite_storage() {
        let mut theme = ThemeState::default();
        let effects = reduce_theme(
            &mut theme,
            ThemeAction::Hydrate {
                stored: Some(ThemeMode::Dark),
                system: ColorScheme::Light,
                policy: InitialThemePolicy::SystemThenLight,
            },
        );

        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::ApplyAppearance(ColorScheme::Dark),
                ThemeEffect::Notify
            ]
        );
    }

    #[test]
    fn hydrate_without_value_persists_the_fallback() {
        let mut theme = ThemeState::default();
        let effects = reduce_theme(
            &mut theme,
            ThemeAction::Hydrate {
                stored: None,
                system: ColorScheme::Dark,
                policy: InitialThemePolicy::FixedLight,
            },
        );

        assert_eq!(theme.snapshot().appearance, ColorScheme::Light);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::PersistMode(ThemeMode::Light),
                ThemeEffect::ApplyAppearance(ColorScheme::Light),
            ]
        );
    }

    #[test]
    fn hydrate_keeps_a_selection_made_before_bootstrap() {
        let mut theme = ThemeState::default();
        reduce_theme(&mut theme, ThemeAction::SetMode(ThemeMode::Dark));
        let effects = reduce_theme(
            &mut theme,
            ThemeAction::Hydrate {
                stored: None,
                system: ColorScheme::Light,
                policy: InitialThemePolicy::SystemThenLight,
            },
        );

        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::PersistMode(ThemeMode::Dark),
                ThemeEffect::ApplyAppearance(ColorScheme::Dark),
            ]
        );
    }

    #[test]
    fn reselecting_the_current_mode_skips_notification() {
        let mut theme = state(ThemeMode::Dark, ColorScheme::Light);
        let effects = reduce_theme(&mut theme, ThemeAction::SetMode(ThemeMode::Dark));

        assert_eq!(
            effects,
            vec![
                ThemeEffect::PersistMode(ThemeMode::Dark),
                ThemeEffect::ApplyAppearance(ColorScheme::Dark),
            ]
        );
    }

    #[test]
    fn toggle_from_auto_writes_the_opposite_concrete_mode() {
        let mut theme = state(ThemeMode::Auto, ColorScheme::Dark);
        let effects = reduce_theme(&mut theme, ThemeAction::Toggle);

        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::PersistMode(ThemeMode::Light),
                ThemeEffect::ApplyAppearance(ColorScheme::Light),
                ThemeEffect::Notify,
            ]
        );
    }

    #[test]
    fn toggle_twice_restores_concrete_modes() {
        for start in [ThemeMode::Light, ThemeMode::Dark] {
            let mut theme = state(start, ColorScheme::Dark);
            reduce_theme(&mut theme, ThemeAction::Toggle);
            assert_ne!(theme.mode, start);
            reduce_theme(&mut theme, ThemeAction::Toggle);
            assert_eq!(theme.mode, start);
        }
    }

    #[test]
    fn system_change_reapplies_only_in_auto() {
        let mut auto = state(ThemeMode::Auto, ColorScheme::Light);
        let effects = reduce_theme(
            &mut auto,
            ThemeAction::SystemSchemeChanged(ColorScheme::Dark),
        );
        assert_eq!(auto.mode, ThemeMode::Auto);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::ApplyAppearance(ColorScheme::Dark),
                ThemeEffect::Notify
            ]
        );

        let mut fixed = state(ThemeMode::Light, ColorScheme::Light);
        let effects = reduce_theme(
            &mut fixed,
            ThemeAction::SystemSchemeChanged(ColorScheme::Dark),
        );
        assert!(effects.is_empty());
        assert_eq!(fixed.system, ColorScheme::Dark);
    }
}
