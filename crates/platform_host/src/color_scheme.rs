//! Ambient color-scheme signal contracts and adapters.

use std::{cell::RefCell, fmt, rc::Rc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Concrete light/dark scheme reported by the environment and written to the presentation
/// surface.
pub enum ColorScheme {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorScheme {
    /// Maps a `prefers-color-scheme: dark` match result to a scheme.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns the stable token used for class names and storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other scheme.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback invoked with the new scheme each time the environment signal changes.
pub type ColorSchemeListener = Box<dyn Fn(ColorScheme)>;

/// Host service exposing the operating environment's preferred color scheme.
pub trait ColorSchemeSignal {
    /// Returns the scheme the environment currently prefers.
    fn current(&self) -> ColorScheme;

    /// Registers `listener` for change notifications for the lifetime of the host.
    ///
    /// Hosts without change notifications accept the listener and never call it.
    ///
    /// # Errors
    ///
    /// Returns an error when the host signal exists but the listener cannot be attached.
    fn watch(&self, listener: ColorSchemeListener) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Signal that always reports one scheme and never changes (pre-render and headless hosts).
pub struct FixedColorScheme(pub ColorScheme);

impl ColorSchemeSignal for FixedColorScheme {
    fn current(&self) -> ColorScheme {
        self.0
    }

    fn watch(&self, _listener: ColorSchemeListener) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Clone, Default)]
/// Manually driven signal used by tests and by hosts that forward preference changes themselves.
pub struct MemoryColorScheme {
    current: Rc<RefCell<ColorScheme>>,
    listeners: Rc<RefCell<Vec<Rc<dyn Fn(ColorScheme)>>>>,
}

impl MemoryColorScheme {
    /// Creates a signal starting at `scheme`.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            current: Rc::new(RefCell::new(scheme)),
            listeners: Rc::default(),
        }
    }

    /// Updates the preferred scheme, notifying listeners when it actually changed.
    pub fn set(&self, scheme: ColorScheme) {
        if *self.current.borrow() == scheme {
            return;
        }
        *self.current.borrow_mut() = scheme;
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(scheme);
        }
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for MemoryColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryColorScheme")
            .field("current", &*self.current.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ColorSchemeSignal for MemoryColorScheme {
    fn current(&self) -> ColorScheme {
        *self.current.borrow()
    }

    fn watch(&self, listener: ColorSchemeListener) -> Result<(), String> {
        self.listeners.borrow_mut().push(Rc::from(listener));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_signal_notifies_only_on_change() {
        let signal = MemoryColorScheme::new(ColorScheme::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        signal
            .watch(Box::new(move |scheme| sink.borrow_mut().push(scheme)))
            .expect("watch");

        signal.set(ColorScheme::Light);
        signal.set(ColorScheme::Dark);
        signal.set(ColorScheme::Dark);
        signal.set(ColorScheme::Light);

        assert_eq!(*seen.borrow(), vec![ColorScheme::Dark, ColorScheme::Light]);
        assert_eq!(signal.current(), ColorScheme::Light);
    }

    #[test]
    fn fixed_signal_never_fires() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let signal = FixedColorScheme(ColorScheme::Dark);
        signal
            .watch(Box::new(move |_| flag.set(true)))
            .expect("watch");

        assert_eq!(signal.current(), ColorScheme::Dark);
        assert!(!fired.get());
    }

    #[test]
    fn scheme_tokens_are_stable() {
        assert_eq!(ColorScheme::from_prefers_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.opposite().as_str(), "light");
        assert_eq!(
            serde_json::to_string(&ColorScheme::Dark).expect("serialize"),
            "\"dark\""
        );
    }
}
