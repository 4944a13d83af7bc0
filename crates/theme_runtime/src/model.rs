//! Theme and landing-animation preference models.

use std::{fmt, str::FromStr};

use platform_host::ColorScheme;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Resolved light/dark rendering decision. Never `auto`.
pub type EffectiveAppearance = ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// User-declared theme intent.
pub enum ThemeMode {
    /// Always light.
    #[default]
    Light,
    /// Always dark.
    Dark,
    /// Follow the environment's color-scheme preference.
    Auto,
}

impl ThemeMode {
    /// Every mode in display order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    /// Returns the stable token persisted under the theme key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Resolves the mode against the environment's current scheme.
    pub const fn resolve(self, system: ColorScheme) -> EffectiveAppearance {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::Auto => system,
        }
    }
}

impl From<ColorScheme> for ThemeMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .ok_or_else(|| ThemeError::UnknownThemeMode(raw.to_string()))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Decorative presentation variant for the landing surface.
pub enum HomeAnimationMode {
    /// Floating particle field.
    #[default]
    Particles,
    /// Layered parallax scene.
    Parallax,
    /// Animated gradient wash.
    Gradient,
    /// Falling glyph columns.
    Matrix,
    /// Star field.
    Cosmic,
    /// Wave lines.
    Waves,
    /// Rotating geometric shapes.
    Geometric,
    /// Connected node graph.
    Neural,
    /// Faceted crystal lattice.
    Crystalline,
    /// Northern-lights bands.
    Aurora,
}

impl HomeAnimationMode {
    /// Every animation mode in display order.
    pub const ALL: [Self; 10] = [
        Self::Particles,
        Self::Parallax,
        Self::Gradient,
        Self::Matrix,
        Self::Cosmic,
        Self::Waves,
        Self::Geometric,
        Self::Neural,
        Self::Crystalline,
        Self::Aurora,
    ];

    /// Returns the stable token persisted under the home-mode key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Particles => "particles",
            Self::Parallax => "parallax",
            Self::Gradient => "gradient",
            Self::Matrix => "matrix",
            Self::Cosmic => "cosmic",
            Self::Waves => "waves",
            Self::Geometric => "geometric",
            Self::Neural => "neural",
            Self::Crystalline => "crystalline",
            Self::Aurora => "aurora",
        }
    }
}

impl FromStr for HomeAnimationMode {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .ok_or_else(|| ThemeError::UnknownHomeMode(raw.to_string()))
    }
}

impl fmt::Display for HomeAnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Value pushed to theme observers: the declared mode and what it currently resolves to.
pub struct ThemeSnapshot {
    /// Declared intent.
    pub mode: ThemeMode,
    /// Resolved appearance.
    pub appearance: EffectiveAppearance,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_mode_parses_known_tokens_only() {
        assert_eq!("  auto ".parse::<ThemeMode>(), Ok(ThemeMode::Auto));
        assert_eq!(
            "neon".parse::<ThemeMode>(),
            Err(ThemeError::UnknownThemeMode("neon".to_string()))
        );
        assert!("Dark".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn auto_resolves_through_system_scheme() {
        assert_eq!(ThemeMode::Auto.resolve(ColorScheme::Dark), ColorScheme::Dark);
        assert_eq!(ThemeMode::Auto.resolve(ColorScheme::Light), ColorScheme::Light);
        assert_eq!(ThemeMode::Light.resolve(ColorScheme::Dark), ColorScheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(ColorScheme::Light), ColorScheme::Dark);
    }

    #[test]
    fn home_modes_round_trip_through_tokens() {
        for mode in HomeAnimationMode::ALL {
            assert_eq!(mode.as_str().parse::<HomeAnimationMode>(), Ok(mode));
        }
        assert_eq!(HomeAnimationMode::default(), HomeAnimationMode::Particles);
        assert!("sparkles".parse::<HomeAnimationMode>().is_err());
    }

    #[test]
    fn snapshot_serializes_with_lowercase_tokens() {
        let snapshot = ThemeSnapshot {
            mode: ThemeMode::Auto,
            appearance: ColorScheme::Dark,
        };
        assert_eq!(
            serde_json::to_string(&snapshot).expect("serialize"),
            r#"{"mode":"auto","appearance":"dark"}"#
        );
    }
}
