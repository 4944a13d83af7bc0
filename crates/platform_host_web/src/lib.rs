//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete host wiring layer for theme preferences: `localStorage` prefs, the
//! `prefers-color-scheme` media query, and the document root appearance marker. Non-WASM builds
//! compile every adapter as a silent no-op, and the `native-host` feature swaps the color-scheme
//! source for OS detection.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod appearance;
pub mod color_scheme;
pub mod storage;

pub use adapters::{
    appearance_surface, build_host_services, color_scheme_signal, prefs_store,
    selected_host_strategy, AppearanceSurfaceAdapter, ColorSchemeSignalAdapter, PrefsStoreAdapter,
};
pub use appearance::{WebAppearanceSurface, THEME_COLOR_META_SELECTOR};
pub use color_scheme::{OsColorSchemeSignal, WebColorSchemeSignal, PREFERS_DARK_QUERY};
pub use storage::local_prefs::WebPrefsStore;
