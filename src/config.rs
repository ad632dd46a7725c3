//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings
//! from there. This provides the wrap width, the glide tick rate and the
//! scroll-spy probe compensation.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for document text wrapping.
    pub wrap_width: usize,
    #[facet(default = 3)]
    /// Rows added to the scroll offset when probing for the active section,
    /// compensating for the fixed navigation header.
    pub probe_offset: usize,
    #[facet(default = 33)]
    /// Milliseconds between glide animation ticks.
    pub tick_rate_ms: u64,
}

impl Config {
    #[must_use]
    /// Load configuration from folio.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("folio.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
