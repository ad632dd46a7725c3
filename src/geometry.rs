//! Geometry capability: where each section sits in the rendered document.
//!
//! The scroll-spy never measures the screen itself. It asks a
//! [`GeometryProvider`] for a section's row band at query time, so tests can
//! feed synthetic layouts and the UI can swap in whatever layout it last
//! rendered. Geometry is re-derived on every layout change rather than cached
//! across scroll events, keeping it consistent with what is actually on
//! screen.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A section's vertical band within the full document, in rows.
pub struct SectionGeometry {
    /// Row of the section's first line.
    pub top: usize,
    /// Number of rows the section occupies.
    pub height: usize,
}

impl SectionGeometry {
    #[must_use]
    /// Whether a probe row falls inside `[top, top + height)`.
    pub fn contains(&self, probe: usize) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Read access to section geometry by id.
pub trait GeometryProvider {
    /// Row band for the section, or `None` when it has no rendered presence.
    fn geometry_of(&self, id: &str) -> Option<SectionGeometry>;
}

#[derive(Clone, Debug, Default)]
/// Concrete provider produced by rendering: one band per rendered section.
pub struct DocumentLayout {
    bands: Vec<(String, SectionGeometry)>,
    total_height: usize,
}

impl DocumentLayout {
    #[must_use]
    /// An empty layout with no sections and zero height.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a section band starting at the current document bottom.
    pub fn push_band(&mut self, id: &str, height: usize) {
        let top = self.total_height;
        self.bands.push((id.to_string(), SectionGeometry { top, height }));
        self.total_height += height;
    }

    #[must_use]
    /// Total rendered document height in rows.
    pub fn total_height(&self) -> usize {
        self.total_height
    }

    /// Recorded bands in document order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, SectionGeometry)> {
        self.bands.iter().map(|(id, geo)| (id.as_str(), *geo))
    }
}

impl GeometryProvider for DocumentLayout {
    fn geometry_of(&self, id: &str) -> Option<SectionGeometry> {
        self.bands
            .iter()
            .find(|(band_id, _)| band_id == id)
            .map(|(_, geo)| *geo)
    }
}
