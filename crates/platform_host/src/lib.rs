//! Typed host-domain contracts shared by the theme runtime and its browser/native adapters.
//!
//! This crate is the API-first boundary for environment services: durable preference storage,
//! the ambient color-scheme signal, and the root presentation surface. Concrete browser adapters
//! live in `platform_host_web`; in-memory and no-op adapters live here for headless hosts and
//! tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appearance;
pub mod color_scheme;
pub mod host;
pub mod storage;

pub use appearance::{
    AppearanceSurface, AppliedAppearance, MemoryAppearanceSurface, NoopAppearanceSurface,
};
pub use color_scheme::{
    ColorScheme, ColorSchemeListener, ColorSchemeSignal, FixedColorScheme, MemoryColorScheme,
};
pub use host::{HostStrategy, ThemeHostServices};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore};
