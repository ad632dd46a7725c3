//! Section descriptors and the registry that fixes their document order.
//!
//! The registry is built once at startup and is immutable for the lifetime of
//! the page. Its ordering must match the order sections are actually rendered
//! top-to-bottom, because the scroll-spy scan relies on a sequential pass with
//! early exit.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A single addressable content block of the portfolio page.
pub struct SectionDescriptor {
    /// Stable identifier, unique within the registry.
    pub id: String,
    /// Display name shown in the navigation header.
    pub label: String,
    /// Position in the document, counted from zero.
    pub order: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Rejected registry constructions.
pub enum RegistryError {
    /// A registry must describe at least one section.
    #[error("registry must contain at least one section")]
    Empty,
    /// Section ids must be unique so lookups are unambiguous.
    #[error("duplicate section id: {0}")]
    DuplicateId(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Ordered, immutable sequence of section descriptors.
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    /// Builds a registry from descriptors, sorting them into document order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] for an empty descriptor list and
    /// [`RegistryError::DuplicateId`] when two descriptors share an id.
    pub fn new(mut descriptors: Vec<SectionDescriptor>) -> Result<Self, RegistryError> {
        if descriptors.is_empty() {
            return Err(RegistryError::Empty);
        }
        descriptors.sort_by_key(|d| d.order);
        for (i, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..i].iter().any(|d| d.id == descriptor.id) {
                return Err(RegistryError::DuplicateId(descriptor.id.clone()));
            }
        }
        Ok(Self {
            sections: descriptors,
        })
    }

    /// Builds a registry from `(id, label)` pairs already in document order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SectionRegistry::new`].
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, RegistryError> {
        let descriptors = pairs
            .iter()
            .enumerate()
            .map(|(order, (id, label))| SectionDescriptor {
                id: (*id).to_string(),
                label: (*label).to_string(),
                order,
            })
            .collect();
        Self::new(descriptors)
    }

    #[must_use]
    /// The landing section, which seeds the initial active id.
    pub fn first(&self) -> Option<&SectionDescriptor> {
        self.sections.first()
    }

    #[must_use]
    /// Descriptor at `index` in document order.
    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    #[must_use]
    /// Document-order position of the section with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    #[must_use]
    /// Whether the registry knows the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Iterates descriptors in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, SectionDescriptor> {
        self.sections.iter()
    }

    #[must_use]
    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether the registry is empty (never true for a constructed registry).
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a SectionDescriptor;
    type IntoIter = std::slice::Iter<'a, SectionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
