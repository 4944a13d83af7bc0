use std::rc::Rc;

use platform_host::{
    AppearanceSurface, ColorScheme, ColorSchemeListener, ColorSchemeSignal, FixedColorScheme,
    HostStrategy, NoopAppearanceSurface, NoopPrefsStore, PrefsStore, ThemeHostServices,
};

use crate::{OsColorSchemeSignal, WebAppearanceSurface, WebColorSchemeSignal, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "native-host"))]
    {
        HostStrategy::Native
    }

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "native-host")))]
    {
        HostStrategy::Headless
    }
}

/// Adapter enum that erases the concrete prefs backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser-backed `localStorage` persistence.
    Browser(WebPrefsStore),
    /// No durable storage; the theme stores run in memory.
    Unavailable(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Unavailable(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, value),
            Self::Unavailable(store) => store.save_pref(key, value),
        }
    }
}

/// Adapter enum that erases the concrete color-scheme source behind [`ColorSchemeSignal`].
#[derive(Debug, Clone, Copy)]
pub enum ColorSchemeSignalAdapter {
    /// `matchMedia` query with change events.
    Browser(WebColorSchemeSignal),
    /// OS detection without change events.
    Native(OsColorSchemeSignal),
    /// Fixed light preference.
    Fixed(FixedColorScheme),
}

impl ColorSchemeSignal for ColorSchemeSignalAdapter {
    fn current(&self) -> ColorScheme {
        match self {
            Self::Browser(signal) => signal.current(),
            Self::Native(signal) => signal.current(),
            Self::Fixed(signal) => signal.current(),
        }
    }

    fn watch(&self, listener: ColorSchemeListener) -> Result<(), String> {
        match self {
            Self::Browser(signal) => signal.watch(listener),
            Self::Native(signal) => signal.watch(listener),
            Self::Fixed(signal) => signal.watch(listener),
        }
    }
}

/// Adapter enum that erases the concrete presentation surface behind [`AppearanceSurface`].
#[derive(Debug, Clone, Copy)]
pub enum AppearanceSurfaceAdapter {
    /// `document.documentElement` classes and `theme-color` meta tag.
    Browser(WebAppearanceSurface),
    /// No DOM to write to.
    Unavailable(NoopAppearanceSurface),
}

impl AppearanceSurface for AppearanceSurfaceAdapter {
    fn apply_appearance(&self, scheme: ColorScheme, theme_color: &str) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.apply_appearance(scheme, theme_color),
            Self::Unavailable(surface) => surface.apply_appearance(scheme, theme_color),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Native | HostStrategy::Headless => {
            PrefsStoreAdapter::Unavailable(NoopPrefsStore)
        }
    }
}

/// Builds the color-scheme adapter for the compile-time selected host strategy.
pub fn color_scheme_signal() -> ColorSchemeSignalAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ColorSchemeSignalAdapter::Browser(WebColorSchemeSignal),
        HostStrategy::Native => ColorSchemeSignalAdapter::Native(OsColorSchemeSignal),
        HostStrategy::Headless => {
            ColorSchemeSignalAdapter::Fixed(FixedColorScheme(ColorScheme::Light))
        }
    }
}

/// Builds the presentation-surface adapter for the compile-time selected host strategy.
pub fn appearance_surface() -> AppearanceSurfaceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AppearanceSurfaceAdapter::Browser(WebAppearanceSurface),
        HostStrategy::Native | HostStrategy::Headless => {
            AppearanceSurfaceAdapter::Unavailable(NoopAppearanceSurface)
        }
    }
}

/// Assembles the host service bundle injected into `theme_runtime`.
pub fn build_host_services() -> ThemeHostServices {
    ThemeHostServices {
        prefs: Rc::new(prefs_store()),
        color_scheme: Rc::new(color_scheme_signal()),
        surface: Rc::new(appearance_surface()),
        host_strategy: selected_host_strategy(),
    }
}
