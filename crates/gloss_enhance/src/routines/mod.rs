//! The enhancement routines
//!
//! One module per enhancement. Each exposes an `install` that queries its
//! targets, writes install-time patches, and registers event interest in
//! the enhancer's bindings, plus whatever patch builders or update
//! functions its event reactions need. Routines are independent: none
//! reads state another wrote.

use gloss_core::{ElementId, Selector, Surface};

pub(crate) mod anchors;
pub(crate) mod back_to_top;
pub(crate) mod glass;
pub(crate) mod headline;
pub(crate) mod hover;
pub(crate) mod parallax;
pub(crate) mod progress;
pub(crate) mod reveal;

pub use back_to_top::BACK_TO_TOP_ID;
pub use progress::PROGRESS_BAR_ID;
pub use reveal::{REVEAL_KEYFRAMES, REVEAL_STYLESHEET_ID};

/// Locate a widget by its well-known id, creating it on first run.
/// Re-runs find the surviving node instead of stacking duplicates.
fn find_or_create(surface: &mut impl Surface, tag: &str, id: &str) -> ElementId {
    match surface.query(&Selector::id(id)).first() {
        Some(&el) => el,
        None => surface.create_element(tag, id),
    }
}
