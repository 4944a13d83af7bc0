//! Store configuration: storage keys, first-run policy, and browser chrome colors.

use platform_host::ColorScheme;
use serde::{Deserialize, Serialize};

use crate::{error::ThemeError, model::ThemeMode};

/// Default storage key for the theme mode.
pub const THEME_PREF_KEY: &str = "theme";
/// Default storage key for the landing animation mode.
pub const HOME_MODE_PREF_KEY: &str = "homeMode";
/// Default `theme-color` for the dark appearance.
pub const DEFAULT_DARK_THEME_COLOR: &str = "#1a1a1a";
/// Default `theme-color` for the light appearance.
pub const DEFAULT_LIGHT_THEME_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Mode chosen by [`crate::ThemePreferenceStore::initialize`] when storage holds no usable value.
pub enum InitialThemePolicy {
    /// Use the environment's current scheme as a concrete `light`/`dark` mode.
    #[default]
    SystemThenLight,
    /// Always start at `light`.
    FixedLight,
}

impl InitialThemePolicy {
    /// Returns the fallback mode given the environment's current scheme.
    pub const fn fallback_mode(self, system: ColorScheme) -> ThemeMode {
        match self {
            Self::SystemThenLight => match system {
                ColorScheme::Light => ThemeMode::Light,
                ColorScheme::Dark => ThemeMode::Dark,
            },
            Self::FixedLight => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Configuration shared by the theme and home-mode stores.
pub struct ThemeStoreConfig {
    /// Storage key for [`ThemeMode`].
    pub theme_key: String,
    /// Storage key for [`crate::HomeAnimationMode`].
    pub home_mode_key: String,
    /// First-run fallback policy.
    pub initial_policy: InitialThemePolicy,
    /// `theme-color` written while the appearance is dark.
    pub dark_theme_color: String,
    /// `theme-color` written while the appearance is light.
    pub light_theme_color: String,
}

impl Default for ThemeStoreConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_PREF_KEY.to_string(),
            home_mode_key: HOME_MODE_PREF_KEY.to_string(),
            initial_policy: InitialThemePolicy::default(),
            dark_theme_color: DEFAULT_DARK_THEME_COLOR.to_string(),
            light_theme_color: DEFAULT_LIGHT_THEME_COLOR.to_string(),
        }
    }
}

impl ThemeStoreConfig {
    /// Parses a JSON config blob; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] when the JSON is malformed or fails
    /// [`ThemeStoreConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ThemeError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ThemeError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both storage keys are usable and distinct.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.theme_key.trim().is_empty() {
            return Err(ThemeError::InvalidConfig("theme_key is empty".to_string()));
        }
        if self.home_mode_key.trim().is_empty() {
            return Err(ThemeError::InvalidConfig(
                "home_mode_key is empty".to_string(),
            ));
        }
        if self.theme_key == self.home_mode_key {
            return Err(ThemeError::InvalidConfig(format!(
                "theme_key and home_mode_key both use `{}`",
                self.theme_key
            )));
        }
        Ok(())
    }

    /// Browser chrome color for `scheme`.
    pub fn theme_color(&self, scheme: ColorScheme) -> &str {
        match scheme {
            ColorScheme::Light => &self.light_theme_color,
            ColorScheme::Dark => &self.dark_theme_color,
        }
    }
}
