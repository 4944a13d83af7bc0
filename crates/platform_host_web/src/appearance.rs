//! Root-element appearance marker for the browser document.

use platform_host::{AppearanceSurface, ColorScheme};

/// Selector for the mobile browser chrome color tag.
pub const THEME_COLOR_META_SELECTOR: &str = "meta[name=\"theme-color\"]";

#[derive(Debug, Clone, Copy, Default)]
/// Surface writing `light`/`dark` classes on `document.documentElement` and the
/// `theme-color` meta tag.
pub struct WebAppearanceSurface;

impl AppearanceSurface for WebAppearanceSurface {
    fn apply_appearance(&self, scheme: ColorScheme, theme_color: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return Ok(());
            };
            let Some(root) = document.document_element() else {
                return Ok(());
            };
            let classes = root.class_list();
            classes
                .remove_2(ColorScheme::Light.as_str(), ColorScheme::Dark.as_str())
                .map_err(|err| format!("root class removal failed: {err:?}"))?;
            classes
                .add_1(scheme.as_str())
                .map_err(|err| format!("root class add failed: {err:?}"))?;

            // The meta tag is optional markup.
            if let Ok(Some(meta)) = document.query_selector(THEME_COLOR_META_SELECTOR) {
                meta.set_attribute("content", theme_color)
                    .map_err(|err| format!("theme-color update failed: {err:?}"))?;
            }
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (scheme, theme_color);
            Ok(())
        }
    }
}
