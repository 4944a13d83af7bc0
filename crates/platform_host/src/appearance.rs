//! Presentation-surface contracts for applying the resolved appearance marker.

use std::{cell::RefCell, rc::Rc};

use crate::ColorScheme;

/// Host service that writes the appearance marker onto the root presentation surface.
///
/// Implementations toggle the scheme marker (for example a `light`/`dark` root class) and update
/// the browser chrome theme color when the host has one. They never inspect styling.
pub trait AppearanceSurface {
    /// Applies `scheme` and `theme_color` to the surface.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface exists but rejects the update.
    fn apply_appearance(&self, scheme: ColorScheme, theme_color: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Surface used when no DOM is available.
pub struct NoopAppearanceSurface;

impl AppearanceSurface for NoopAppearanceSurface {
    fn apply_appearance(&self, _scheme: ColorScheme, _theme_color: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One recorded [`AppearanceSurface::apply_appearance`] call.
pub struct AppliedAppearance {
    /// Scheme marker written to the surface.
    pub scheme: ColorScheme,
    /// Theme color written to browser chrome metadata.
    pub theme_color: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory surface recording every applied appearance.
pub struct MemoryAppearanceSurface {
    applied: Rc<RefCell<Vec<AppliedAppearance>>>,
    failure: Rc<RefCell<Option<String>>>,
}

impl MemoryAppearanceSurface {
    /// Returns the most recently applied scheme, if any.
    pub fn current(&self) -> Option<ColorScheme> {
        self.applied.borrow().last().map(|applied| applied.scheme)
    }

    /// Returns the most recently applied theme color, if any.
    pub fn theme_color(&self) -> Option<String> {
        self.applied
            .borrow()
            .last()
            .map(|applied| applied.theme_color.clone())
    }

    /// Returns every applied appearance in call order.
    pub fn history(&self) -> Vec<AppliedAppearance> {
        self.applied.borrow().clone()
    }

    /// Makes every subsequent update fail with `reason` without recording it.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.borrow_mut() = Some(reason.into());
    }
}

impl AppearanceSurface for MemoryAppearanceSurface {
    fn apply_appearance(&self, scheme: ColorScheme, theme_color: &str) -> Result<(), String> {
        if let Some(reason) = self.failure.borrow().as_ref() {
            return Err(reason.clone());
        }
        self.applied.borrow_mut().push(AppliedAppearance {
            scheme,
            theme_color: theme_color.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_surface_tracks_latest_marker() {
        let surface = MemoryAppearanceSurface::default();
        assert_eq!(surface.current(), None);

        surface
            .apply_appearance(ColorScheme::Dark, "#1a1a1a")
            .expect("apply");
        surface
            .apply_appearance(ColorScheme::Light, "#ffffff")
            .expect("apply");

        assert_eq!(surface.current(), Some(ColorScheme::Light));
        assert_eq!(surface.theme_color().as_deref(), Some("#ffffff"));
        assert_eq!(surface.history().len(), 2);
    }

    #[test]
    fn failing_surface_rejects_without_recording() {
        let surface = MemoryAppearanceSurface::default();
        surface.fail_with("root element missing");

        assert_eq!(
            surface.apply_appearance(ColorScheme::Dark, "#1a1a1a"),
            Err("root element missing".to_string())
        );
        assert_eq!(surface.history(), Vec::new());
    }
}
