//! folio: a terminal portfolio presenter.
//!
//! A portfolio is rendered as one vertically scrolling document with a fixed
//! navigation header. The scroll-spy controller keeps the header highlight in
//! sync with whichever section sits under the viewport's reading line, and the
//! scroll navigator glides the viewport to a section on demand.

pub mod app_state;
pub mod config;
pub mod content;
pub mod geometry;
pub mod navigator;
pub mod render;
pub mod scroll_spy;
pub mod section;
pub mod ui;
