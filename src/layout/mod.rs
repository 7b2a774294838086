//! Viewport layout model.
//!
//! Resolves the page's responsive rules to concrete pixel geometry at a
//! given viewport, so layout invariants can be checked without a browser.

mod grid;
mod header;
mod text;

pub use grid::GridError;
pub use header::{EPSILON, Zone, resolve_header};

use crate::page::styles::STYLES;
use crate::style::Viewport;

/// Rendered width of the footer logo at `viewport`.
pub fn footer_logo_width(viewport: Viewport) -> Option<f32> {
    STYLES.footer_logo.px("width", viewport)
}
