//! The scroll-spy controller: derives the active section from scroll offsets.
//!
//! One piece of state lives here, the currently active section id. Every
//! scroll event feeds `recompute` a fresh offset; the controller probes the
//! geometry provider and scans the registry in document order, stopping at
//! the first section whose band contains the probe. Observers are notified
//! only when the active id actually changes, so consumers never poll.
//!
//! The probe is the scroll offset plus a fixed compensation constant for the
//! sticky navigation header that obscures the top rows of the viewport. When
//! the probe lands before the first section or past the last one, the active
//! id deliberately keeps its previous value: clearing it would make the
//! header highlight flicker at the page extremes.

use crate::geometry::GeometryProvider;
use crate::section::SectionRegistry;

/// Callback invoked with the new active id after each change.
pub type ActiveObserver = Box<dyn FnMut(&str)>;

/// Owns the active section id and recomputes it from scroll offsets.
pub struct ScrollSpy {
    /// Section ids in document order; the scan visits them front to back.
    order: Vec<String>,
    /// Currently active section id, seeded with the landing section.
    active: String,
    /// Rows added to the scroll offset to skip under the sticky header.
    probe_offset: usize,
    observers: Vec<ActiveObserver>,
}

impl ScrollSpy {
    #[must_use]
    /// Creates a controller over the registry's sections.
    ///
    /// The active id starts as the first section's id, matching the landing
    /// view before any scroll event has fired.
    pub fn new(registry: &SectionRegistry, probe_offset: usize) -> Self {
        let order = registry.iter().map(|s| s.id.clone()).collect();
        let active = registry.first().map_or_else(String::new, |s| s.id.clone());
        Self {
            order,
            active,
            probe_offset,
            observers: Vec::new(),
        }
    }

    #[must_use]
    /// Currently active section id.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Registers an observer for active-id changes.
    pub fn subscribe(&mut self, observer: impl FnMut(&str) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Recomputes the active section for a scroll offset.
    ///
    /// Scans sections in document order and adopts the first whose band
    /// contains `offset + probe_offset`; on overlap the earliest section
    /// wins. Ids without geometry are skipped mid-scan. When no band
    /// contains the probe the previous active id is kept.
    ///
    /// Returns the new active id when it changed, `None` otherwise.
    pub fn recompute(
        &mut self,
        offset: usize,
        geometry: &dyn GeometryProvider,
    ) -> Option<&str> {
        let probe = offset + self.probe_offset;
        let hit = self.order.iter().position(|id| {
            geometry
                .geometry_of(id)
                .is_some_and(|geo| geo.contains(probe))
        })?;
        if self.order[hit] == self.active {
            return None;
        }
        self.active = self.order[hit].clone();
        for observer in &mut self.observers {
            observer(&self.active);
        }
        Some(&self.active)
    }
}

#[cfg(test)]
#[path = "tests/scroll_spy.rs"]
mod tests;
