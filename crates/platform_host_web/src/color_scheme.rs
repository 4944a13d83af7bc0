//! Color-scheme signal adapters: `matchMedia` in the browser, OS detection on native hosts.

use platform_host::{ColorScheme, ColorSchemeListener, ColorSchemeSignal};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Media query matched when the environment prefers a dark scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default)]
/// Browser signal backed by `window.matchMedia("(prefers-color-scheme: dark)")`.
pub struct WebColorSchemeSignal;

#[cfg(target_arch = "wasm32")]
fn prefers_dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
}

impl ColorSchemeSignal for WebColorSchemeSignal {
    fn current(&self) -> ColorScheme {
        #[cfg(target_arch = "wasm32")]
        {
            prefers_dark_query()
                .map(|query| ColorScheme::from_prefers_dark(query.matches()))
                .unwrap_or_default()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            ColorScheme::Light
        }
    }

    fn watch(&self, listener: ColorSchemeListener) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(query) = prefers_dark_query() else {
                return Ok(());
            };
            let on_change =
                Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(move |event| {
                    listener(ColorScheme::from_prefers_dark(event.matches()));
                }));
            query
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .map_err(|err| format!("matchMedia change listener failed: {err:?}"))?;
            // The listener lives for the page session.
            on_change.forget();
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Native signal that reads the OS scheme on demand. The OS exposes no change stream here, so
/// [`ColorSchemeSignal::watch`] accepts the listener without ever firing it.
pub struct OsColorSchemeSignal;

impl ColorSchemeSignal for OsColorSchemeSignal {
    fn current(&self) -> ColorScheme {
        #[cfg(all(feature = "native-host", not(target_arch = "wasm32")))]
        {
            match dark_light::detect() {
                dark_light::Mode::Dark => ColorScheme::Dark,
                dark_light::Mode::Light => ColorScheme::Light,
            }
        }

        #[cfg(not(all(feature = "native-host", not(target_arch = "wasm32"))))]
        {
            ColorScheme::Light
        }
    }

    fn watch(&self, _listener: ColorSchemeListener) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn web_signal_reports_light_without_a_window() {
        let signal = WebColorSchemeSignal;
        assert_eq!(signal.current(), ColorScheme::Light);
        signal.watch(Box::new(|_| {})).expect("watch");
    }
}
