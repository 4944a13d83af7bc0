//! Leptos provider and context wiring for the theme stores.
//!
//! The provider mirrors both stores into signals so rendering components read the theme
//! reactively; every write still goes through the stores.

use leptos::*;

use crate::{
    model::{HomeAnimationMode, ThemeMode, ThemeSnapshot},
    store::ThemeStores,
};

#[derive(Clone, Copy)]
/// Leptos context for reading theme state and dispatching preference changes.
pub struct ThemeContext {
    /// Reactive theme mode and appearance.
    pub theme: ReadSignal<ThemeSnapshot>,
    /// Reactive landing animation selection.
    pub home_mode: ReadSignal<HomeAnimationMode>,
    stores: StoredValue<ThemeStores>,
}

impl ThemeContext {
    /// Returns a handle to the underlying stores.
    pub fn stores(&self) -> ThemeStores {
        self.stores.get_value()
    }

    /// Selects a theme mode.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.stores.with_value(|stores| stores.theme.set_mode(mode));
    }

    /// Flips the effective appearance.
    pub fn toggle(&self) {
        self.stores.with_value(|stores| stores.theme.toggle());
    }

    /// Selects a landing animation mode.
    pub fn set_home_mode(&self, mode: HomeAnimationMode) {
        self.stores
            .with_value(|stores| stores.home_mode.set_mode(mode));
    }
}

#[component]
/// Initializes `stores` and provides [`ThemeContext`] to descendant components.
pub fn ThemeProvider(
    /// Stores built by the entry layer from the selected host services.
    stores: ThemeStores,
    children: Children,
) -> impl IntoView {
    stores.initialize();

    let (theme, set_theme) = create_signal(stores.theme.snapshot());
    let (home_mode, set_home_mode) = create_signal(stores.home_mode.get_current());

    let theme_subscription = stores
        .theme
        .subscribe(move |snapshot| set_theme.set(*snapshot));
    let home_subscription = stores
        .home_mode
        .subscribe(move |mode| set_home_mode.set(*mode));
    on_cleanup(move || {
        theme_subscription.unsubscribe();
        home_subscription.unsubscribe();
    });

    provide_context(ThemeContext {
        theme,
        home_mode,
        stores: store_value(stores),
    });

    children().into_view()
}

/// Returns the current [`ThemeContext`].
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}
