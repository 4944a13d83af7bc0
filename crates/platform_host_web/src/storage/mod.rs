//! Browser-backed durable storage adapters.

pub mod local_prefs;
