//! Window state: geometry plus maximize/minimize flags

use super::geometry::{Size, WindowGeometry};
use super::interaction::WindowEffect;

#[derive(Debug, Clone)]
pub struct WindowState {
    pub geometry: WindowGeometry,
    pub is_maximized: bool,
    pub is_minimized: bool,
    /// Geometry to return to when leaving the maximized state
    restore_geometry: Option<WindowGeometry>,
}

impl WindowState {
    pub fn new(geometry: WindowGeometry) -> Self {
        Self {
            geometry,
            is_maximized: false,
            is_minimized: false,
            restore_geometry: None,
        }
    }

    pub fn apply(&mut self, effect: &WindowEffect) {
        self.geometry.apply(effect);
    }

    /// Maximize to `screen`, or restore the saved geometry
    pub fn toggle_maximized(&mut self, screen: Size, min: Size) {
        if self.is_maximized {
            if let Some(saved) = self.restore_geometry.take() {
                self.geometry = saved;
            }
            self.is_maximized = false;
        } else {
            self.restore_geometry = Some(self.geometry);
            self.is_maximized = true;
            self.geometry = maximized_geometry(screen, min);
        }
    }

    pub fn minimize(&mut self) {
        self.is_minimized = true;
    }

    pub fn restore_from_minimized(&mut self) {
        self.is_minimized = false;
    }

    /// Re-fit after the terminal changed size
    pub fn fit_to_screen(&mut self, screen: Size, min: Size) {
        if self.is_maximized {
            self.geometry = maximized_geometry(screen, min);
        } else {
            self.geometry.fit_within(screen, min);
        }
    }

    /// Glyph of the maximize/restore title button
    pub fn maximize_glyph(&self) -> &'static str {
        if self.is_maximized {
            "❐"
        } else {
            "□"
        }
    }
}

/// Whole screen, but never below the minimum size
fn maximized_geometry(screen: Size, min: Size) -> WindowGeometry {
    WindowGeometry::new(
        0,
        0,
        screen.width.max(min.width),
        screen.height.max(min.height),
    )
}
