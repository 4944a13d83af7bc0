//! Theme and home-mode stores, their shared plumbing, and the process-wide install slot.

mod home_mode;
mod theme;

use std::{
    cell::{Cell, OnceCell, RefCell},
    collections::VecDeque,
};

use leptos::logging;
use platform_host::{PrefsStore, ThemeHostServices};

use crate::{config::ThemeStoreConfig, error::ThemeError};

pub use home_mode::HomeAnimationModeStore;
pub use theme::ThemePreferenceStore;

/// FIFO of pending actions drained by whichever call started the pass.
///
/// An action dispatched while a pass is running (an observer mutating the store) is queued and
/// applied after the current action's effects finish.
pub(crate) struct ActionQueue<A> {
    pending: RefCell<VecDeque<A>>,
    draining: Cell<bool>,
}

impl<A> Default for ActionQueue<A> {
    fn default() -> Self {
        Self {
            pending: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        }
    }
}

struct DrainGuard<'a>(&'a Cell<bool>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<A> ActionQueue<A> {
    pub(crate) fn run(&self, action: A, mut apply: impl FnMut(A)) {
        self.pending.borrow_mut().push_back(action);
        if self.draining.replace(true) {
            return;
        }
        let _guard = DrainGuard(&self.draining);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            apply(action);
        }
    }
}

/// Durable-storage access that degrades to in-memory operation after the first failure.
#[derive(Default)]
pub(crate) struct Persistence {
    degraded: Cell<bool>,
}

impl Persistence {
    pub(crate) fn load(&self, prefs: &dyn PrefsStore, key: &str) -> Option<String> {
        if self.degraded.get() {
            return None;
        }
        match prefs.load_pref(key) {
            Ok(value) => value,
            Err(err) => {
                self.degrade(key, &err);
                None
            }
        }
    }

    pub(crate) fn save(&self, prefs: &dyn PrefsStore, key: &str, value: &str) {
        if self.degraded.get() {
            return;
        }
        if let Err(err) = prefs.save_pref(key, value) {
            self.degrade(key, &err);
        }
    }

    pub(crate) fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    fn degrade(&self, key: &str, err: &str) {
        logging::warn!("preference storage disabled for this session after `{key}` failed: {err}");
        self.degraded.set(true);
    }
}

#[derive(Clone, Debug)]
/// Both preference stores, built from one host bundle and config.
pub struct ThemeStores {
    /// Light/dark/auto preference.
    pub theme: ThemePreferenceStore,
    /// Landing animation selection.
    pub home_mode: HomeAnimationModeStore,
}

impl ThemeStores {
    /// Builds both stores. Nothing is read from storage until [`ThemeStores::initialize`].
    pub fn new(host: ThemeHostServices, config: ThemeStoreConfig) -> Self {
        Self {
            theme: ThemePreferenceStore::new(host.clone(), config.clone()),
            home_mode: HomeAnimationModeStore::new(host, config),
        }
    }

    /// Initializes both stores. Idempotent.
    pub fn initialize(&self) {
        self.theme.initialize();
        self.home_mode.initialize();
    }
}

thread_local! {
    static INSTALLED_STORES: OnceCell<ThemeStores> = OnceCell::new();
}

/// Installs `stores` as the process-wide instance for the UI thread.
///
/// # Errors
///
/// Returns [`ThemeError::AlreadyInstalled`] when an instance is already installed; the existing
/// instance stays in place.
pub fn install_stores(stores: ThemeStores) -> Result<(), ThemeError> {
    INSTALLED_STORES.with(|slot| {
        slot.set(stores)
            .map_err(|_| ThemeError::AlreadyInstalled)
    })
}

/// Returns a handle to the installed stores, if [`install_stores`] ran on this thread.
pub fn installed_stores() -> Option<ThemeStores> {
    INSTALLED_STORES.with(|slot| slot.get().cloned())
}
