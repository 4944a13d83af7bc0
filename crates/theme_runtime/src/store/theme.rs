use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use leptos::logging;
use platform_host::ThemeHostServices;

use super::{ActionQueue, Persistence};
use crate::{
    config::ThemeStoreConfig,
    error::ThemeError,
    model::{EffectiveAppearance, ThemeMode, ThemeSnapshot},
    observers::{Subscribers, Subscription},
    reducer::{reduce_theme, ThemeAction, ThemeEffect, ThemeState},
};

struct ThemeStoreInner {
    host: ThemeHostServices,
    config: ThemeStoreConfig,
    state: RefCell<ThemeState>,
    subscribers: Subscribers<ThemeSnapshot>,
    queue: ActionQueue<ThemeAction>,
    persistence: Persistence,
    initialized: Cell<bool>,
    watching: Cell<bool>,
}

#[derive(Clone)]
/// Single source of truth for the user's theme intent.
///
/// The store bridges in-memory state, durable prefs storage and the environment's color-scheme
/// signal, and writes the resolved appearance marker to the presentation surface. Handles are
/// cheap clones of one shared instance.
///
/// `toggle` always operates on the effective appearance and writes a concrete `light`/`dark`
/// mode, leaving `auto`.
pub struct ThemePreferenceStore {
    inner: Rc<ThemeStoreInner>,
}

impl ThemePreferenceStore {
    /// Creates a store in its pre-bootstrap state: mode `light`, system scheme read from the host.
    pub fn new(host: ThemeHostServices, config: ThemeStoreConfig) -> Self {
        let system = host.color_scheme.current();
        Self {
            inner: Rc::new(ThemeStoreInner {
                host,
                config,
                state: RefCell::new(ThemeState {
                    mode: ThemeMode::default(),
                    system,
                    selected: false,
                }),
                subscribers: Subscribers::default(),
                queue: ActionQueue::default(),
                persistence: Persistence::default(),
                initialized: Cell::new(false),
                watching: Cell::new(false),
            }),
        }
    }

    /// Current declared mode.
    pub fn get_current(&self) -> ThemeMode {
        self.inner.state.borrow().mode
    }

    /// Current resolved appearance.
    pub fn appearance(&self) -> EffectiveAppearance {
        self.inner.state.borrow().appearance()
    }

    /// Current mode and appearance.
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.inner.state.borrow().snapshot()
    }

    /// Returns whether a storage failure switched the store to in-memory operation.
    pub fn is_persistence_degraded(&self) -> bool {
        self.inner.persistence.is_degraded()
    }

    /// Registers `observer`, calls it immediately with the current snapshot, and again after every
    /// change of mode or appearance.
    pub fn subscribe(&self, observer: impl Fn(&ThemeSnapshot) + 'static) -> Subscription {
        let observer: Rc<dyn Fn(&ThemeSnapshot)> = Rc::new(observer);
        let subscription = self.inner.subscribers.subscribe(observer.clone());
        observer(&self.snapshot());
        subscription
    }

    /// Selects `mode`, persists it, and applies the resulting appearance.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.dispatch(ThemeAction::SetMode(mode));
    }

    /// Parses and selects an untyped mode token.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownThemeMode`] without touching state, storage or observers when
    /// `raw` is not a mode token.
    pub fn set_mode_str(&self, raw: &str) -> Result<(), ThemeError> {
        let mode = raw.parse::<ThemeMode>()?;
        self.set_mode(mode);
        Ok(())
    }

    /// Flips the effective appearance and stores the result as a concrete mode.
    pub fn toggle(&self) {
        self.dispatch(ThemeAction::Toggle);
    }

    /// Hydrates from storage, applies the appearance and starts following the environment's
    /// color-scheme signal. Only the first call has any effect.
    pub fn initialize(&self) {
        if self.inner.initialized.replace(true) {
            return;
        }
        let key = self.inner.config.theme_key.as_str();
        let stored = self
            .inner
            .persistence
            .load(self.inner.host.prefs.as_ref(), key)
            .and_then(|raw| match raw.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(err) => {
                    logging::warn!("ignoring stored `{key}` preference: {err}");
                    None
                }
            });
        self.dispatch(ThemeAction::Hydrate {
            stored,
            system: self.inner.host.color_scheme.current(),
            policy: self.inner.config.initial_policy,
        });
        self.watch_system_scheme();
    }

    fn watch_system_scheme(&self) {
        if self.inner.watching.replace(true) {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let result = self.inner.host.color_scheme.watch(Box::new(move |scheme| {
            if let Some(inner) = weak.upgrade() {
                let store = ThemePreferenceStore { inner };
                store.dispatch(ThemeAction::SystemSchemeChanged(scheme));
            }
        }));
        if let Err(err) = result {
            logging::warn!("color-scheme watch unavailable: {err}");
        }
    }

    fn dispatch(&self, action: ThemeAction) {
        self.inner.queue.run(action, |action| self.apply(action));
    }

    fn apply(&self, action: ThemeAction) {
        let effects = reduce_theme(&mut self.inner.state.borrow_mut(), action);
        let snapshot = self.snapshot();
        for effect in effects {
            match effect {
                ThemeEffect::PersistMode(mode) => self.inner.persistence.save(
                    self.inner.host.prefs.as_ref(),
                    &self.inner.config.theme_key,
                    mode.as_str(),
                ),
                ThemeEffect::ApplyAppearance(scheme) => {
                    let color = self.inner.config.theme_color(scheme);
                    if let Err(err) = self.inner.host.surface.apply_appearance(scheme, color) {
                        logging::warn!("applying {scheme} appearance failed: {err}");
                    }
                }
                ThemeEffect::Notify => self.inner.subscribers.notify(&snapshot),
            }
        }
    }
}

impl std::fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("state", &*self.inner.state.borrow())
            .field("initialized", &self.inner.initialized.get())
            .field("observers", &self.inner.subscribers.len())
            .finish()
    }
}
