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
    model::HomeAnimationMode,
    observers::{Subscribers, Subscription},
    reducer::{reduce_home_mode, HomeModeAction, HomeModeEffect, HomeModeState},
};

struct HomeModeStoreInner {
    host: ThemeHostServices,
    config: ThemeStoreConfig,
    state: RefCell<HomeModeState>,
    subscribers: Subscribers<HomeAnimationMode>,
    queue: ActionQueue<HomeModeAction>,
    persistence: Persistence,
    initialized: Cell<bool>,
}

#[derive(Clone)]
/// Persisted landing animation selection. Same contract as the theme store minus the derived
/// appearance and the environment coupling.
pub struct HomeAnimationModeStore {
    inner: Rc<HomeModeStoreInner>,
}

impl HomeAnimationModeStore {
    /// Creates a store at [`HomeAnimationMode::Particles`].
    pub fn new(host: ThemeHostServices, config: ThemeStoreConfig) -> Self {
        Self {
            inner: Rc::new(HomeModeStoreInner {
                host,
                config,
                state: RefCell::new(HomeModeState::default()),
                subscribers: Subscribers::default(),
                queue: ActionQueue::default(),
                persistence: Persistence::default(),
                initialized: Cell::new(false),
            }),
        }
    }

    /// Current selection.
    pub fn get_current(&self) -> HomeAnimationMode {
        self.inner.state.borrow().mode
    }

    /// Registers `observer`, calls it immediately with the current mode, and on every change.
    pub fn subscribe(&self, observer: impl Fn(&HomeAnimationMode) + 'static) -> Subscription {
        let observer: Rc<dyn Fn(&HomeAnimationMode)> = Rc::new(observer);
        let subscription = self.inner.subscribers.subscribe(observer.clone());
        observer(&self.get_current());
        subscription
    }

    /// Selects and persists `mode`.
    pub fn set_mode(&self, mode: HomeAnimationMode) {
        self.dispatch(HomeModeAction::SetMode(mode));
    }

    /// Parses and selects an untyped mode token.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownHomeMode`] without touching state when `raw` is not a mode
    /// token.
    pub fn set_mode_str(&self, raw: &str) -> Result<(), ThemeError> {
        let mode = raw.parse::<HomeAnimationMode>()?;
        self.set_mode(mode);
        Ok(())
    }

    /// Hydrates from storage. Only the first call has any effect.
    pub fn initialize(&self) {
        if self.inner.initialized.replace(true) {
            return;
        }
        let key = self.inner.config.home_mode_key.as_str();
        let stored = self
            .inner
            .persistence
            .load(self.inner.host.prefs.as_ref(), key)
            .and_then(|raw| match raw.parse::<HomeAnimationMode>() {
                Ok(mode) => Some(mode),
                Err(err) => {
                    logging::warn!("ignoring stored `{key}` preference: {err}");
                    None
                }
            });
        self.dispatch(HomeModeAction::Hydrate { stored });
    }

    fn dispatch(&self, action: HomeModeAction) {
        self.inner.queue.run(action, |action| self.apply(action));
    }

    fn apply(&self, action: HomeModeAction) {
        let effects = reduce_home_mode(&mut self.inner.state.borrow_mut(), action);
        let mode = self.get_current();
        for effect in effects {
            match effect {
                HomeModeEffect::PersistMode(mode) => self.inner.persistence.save(
                    self.inner.host.prefs.as_ref(),
                    &self.inner.config.home_mode_key,
                    mode.as_str(),
                ),
                HomeModeEffect::Notify => self.inner.subscribers.notify(&mode),
            }
        }
    }
}

impl std::fmt::Debug for HomeAnimationModeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeAnimationModeStore")
            .field("mode", &self.get_current())
            .field("initialized", &self.inner.initialized.get())
            .finish()
    }
}
