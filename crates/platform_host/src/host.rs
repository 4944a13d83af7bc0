//! Shared host-bundle models for browser and native theme runtime composition.

use std::rc::Rc;

use crate::{
    AppearanceSurface, ColorScheme, ColorSchemeSignal, FixedColorScheme, NoopAppearanceSurface,
    NoopPrefsStore, PrefsStore,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage`, `matchMedia`, DOM).
    Browser,
    /// Native composition with OS color-scheme detection and no durable prefs.
    Native,
    /// Pre-render or test composition with no environment access at all.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Native => "native",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the theme stores.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `theme_runtime`, which keeps the stores decoupled from browser/native adapter details.
#[derive(Clone)]
pub struct ThemeHostServices {
    /// Durable string preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Ambient color-scheme signal.
    pub color_scheme: Rc<dyn ColorSchemeSignal>,
    /// Root presentation surface receiving the appearance marker.
    pub surface: Rc<dyn AppearanceSurface>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl ThemeHostServices {
    /// Bundle with no storage, no DOM and a fixed light preference.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            color_scheme: Rc::new(FixedColorScheme(ColorScheme::Light)),
            surface: Rc::new(NoopAppearanceSurface),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for ThemeHostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHostServices")
            .field("host_strategy", &self.host_strategy.as_str())
            .finish_non_exhaustive()
    }
}
