//! The scroll navigator: glides the viewport to a requested section.
//!
//! Activation resolves a section id to a target row and starts a glide. The
//! glide itself is tick-driven: each call to `step` moves the offset a
//! quarter of the remaining distance (at least one row), which gives the
//! familiar ease-out feel and guarantees convergence. Every intermediate
//! offset the caller applies counts as a scroll event, so the scroll-spy
//! sweeps through intermediate sections before settling on the target,
//! exactly as a smooth-scrolling browser would.
//!
//! A second activation before the first settles simply redirects the glide.
//! Activating an id with no geometry is a silent no-op.

use crate::geometry::GeometryProvider;

#[derive(Clone, Copy, Debug, Default)]
/// Issues and advances smooth-scroll glides toward a target row.
pub struct ScrollNavigator {
    target: Option<usize>,
}

impl ScrollNavigator {
    #[must_use]
    /// A navigator with no glide in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or redirects) a glide so the section's top row aligns with
    /// the top of the viewport, clamped to the furthest scrollable row.
    ///
    /// Unknown ids are ignored: the operation must never fail, a missing
    /// element this event may exist the next.
    pub fn activate(
        &mut self,
        id: &str,
        geometry: &dyn GeometryProvider,
        max_offset: usize,
    ) {
        let Some(geo) = geometry.geometry_of(id) else {
            tracing::debug!(id, "activate ignored: no geometry");
            return;
        };
        let target = geo.top.min(max_offset);
        tracing::debug!(id, target, "glide started");
        self.target = Some(target);
    }

    /// Advances the glide from the current offset.
    ///
    /// Returns the next offset to apply, or `None` when no glide is running
    /// or the target has been reached. Reaching the target clears the glide,
    /// so repeated activation of an already-settled section produces no
    /// further movement.
    pub fn step(&mut self, current: usize) -> Option<usize> {
        let target = self.target?;
        if current == target {
            self.target = None;
            return None;
        }
        let next = if current < target {
            current + ((target - current) / 4).max(1)
        } else {
            current - ((current - target) / 4).max(1)
        };
        if next == target {
            self.target = None;
        }
        Some(next)
    }

    /// Abandons any glide in progress; manual scrolling always wins.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    #[must_use]
    /// Whether a glide is currently running.
    pub fn is_gliding(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
#[path = "tests/navigator.rs"]
mod tests;
