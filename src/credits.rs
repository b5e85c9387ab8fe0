//! Scrolling credits surface.
//!
//! The scroll itself is a display-side animation. On load the animation is reset
//! so a reused surface always starts from the top.

/// Trait for abstracting the scrolling credits widget.
pub trait ScrollSurface {
    /// Restarts the scroll animation from its first frame.
    fn restart_animation(&mut self);
}

/// Credits roll bound to a scroll surface.
pub struct CreditsRoll<S: ScrollSurface> {
    surface: S,
    loads: u32,
}

impl<S: ScrollSurface> CreditsRoll<S> {
    /// Wraps a surface. Nothing is emitted until [`on_load`](Self::on_load).
    pub fn new(surface: S) -> Self {
        Self { surface, loads: 0 }
    }

    /// Handles the display layer's load event by resetting the animation.
    pub fn on_load(&mut self) {
        self.loads = self.loads.saturating_add(1);
        tracing::info!(loads = self.loads, "credits loaded");
        self.surface.restart_animation();
    }

    /// Number of load events handled.
    pub fn load_count(&self) -> u32 {
        self.loads
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
