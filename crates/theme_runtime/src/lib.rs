//! Observable theme and landing-animation preference stores.
//!
//! [`ThemePreferenceStore`] owns the user's light/dark/auto intent, persists it through the
//! injected [`platform_host::PrefsStore`], follows the environment's color-scheme signal while in
//! `auto`, and writes the resolved appearance marker to the presentation surface.
//! [`HomeAnimationModeStore`] persists the landing page's decorative variant.
//!
//! Both stores are single-threaded handles. Mutations run through pure reducers in [`reducer`];
//! observers registered with `subscribe` are notified synchronously in registration order, and
//! a mutation issued from inside an observer is applied after the current notification pass.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use platform_host::{MemoryPrefsStore, ThemeHostServices};
//! use theme_runtime::{ThemeMode, ThemeStoreConfig, ThemeStores};
//!
//! let prefs = MemoryPrefsStore::default();
//! let host = ThemeHostServices {
//!     prefs: Rc::new(prefs.clone()),
//!     ..ThemeHostServices::headless()
//! };
//! let stores = ThemeStores::new(host, ThemeStoreConfig::default());
//! stores.initialize();
//!
//! stores.theme.set_mode(ThemeMode::Auto);
//! assert_eq!(stores.theme.get_current(), ThemeMode::Auto);
//! assert_eq!(prefs.get("theme").as_deref(), Some("auto"));
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
mod error;
pub mod model;
pub mod observers;
pub mod reducer;
mod runtime_context;
mod store;

pub use config::{
    InitialThemePolicy, ThemeStoreConfig, DEFAULT_DARK_THEME_COLOR, DEFAULT_LIGHT_THEME_COLOR,
    HOME_MODE_PREF_KEY, THEME_PREF_KEY,
};
pub use error::ThemeError;
pub use model::{EffectiveAppearance, HomeAnimationMode, ThemeMode, ThemeSnapshot};
pub use observers::{Subscribers, Subscription};
pub use runtime_context::{use_theme, ThemeContext, ThemeProvider, ThemeProviderProps};
pub use store::{
    install_stores, installed_stores, HomeAnimationModeStore, ThemePreferenceStore, ThemeStores,
};
