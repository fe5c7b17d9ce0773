//! The surface seam
//!
//! `Surface` is the complete picture of what the enhancer needs from a
//! page: query elements, write style patches, create and remove widgets,
//! install stylesheets, register event interest, observe visibility, read
//! scroll metrics, and issue scroll commands. A DOM-backed host implements
//! it against real elements; [`HeadlessSurface`](crate::headless::HeadlessSurface)
//! implements it in memory.
//!
//! # Event delivery
//!
//! Surfaces do not call back into the enhancer. `listen` and
//! `observe_visibility` only record interest - countable, disposable
//! registrations - so the host knows which occurrences to forward and the
//! enhancer can release everything it registered. The host then delivers
//! each occurrence once via `Enhancer::handle_event`. Visibility events
//! follow `observe_visibility` registrations and need no `listen` call.

use slotmap::new_key_type;

use crate::events::{EventKind, EventTarget};
use crate::selector::Selector;
use crate::style::StylePatch;
use crate::stylesheet::Stylesheet;
use crate::visual::ColorScheme;

// ─────────────────────────────────────────────────────────────────────────────
// Element Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a page element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

impl ElementId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Generator for unique element IDs
#[derive(Debug, Default)]
pub struct ElementIdGenerator {
    next: u64,
}

impl ElementIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

new_key_type! {
    /// Handle to a `listen` registration
    pub struct ListenerId;
    /// Handle to an `observe_visibility` registration
    pub struct ObserverId;
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Scroll geometry of the page
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageMetrics {
    /// Vertical scroll offset in pixels from the top
    pub scroll_offset: f32,
    /// Total content height in pixels
    pub content_height: f32,
    /// Visible viewport height in pixels
    pub viewport_height: f32,
}

impl PageMetrics {
    /// Distance the page can scroll (content beyond the viewport)
    pub fn scrollable_height(&self) -> f32 {
        self.content_height - self.viewport_height
    }

    /// Scroll progress as a fraction in `0.0..=1.0`.
    ///
    /// A page that cannot scroll (content no taller than the viewport)
    /// reports `0.0` rather than dividing by zero.
    pub fn progress_fraction(&self) -> f32 {
        let scrollable = self.scrollable_height();
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_offset / scrollable).clamp(0.0, 1.0)
    }
}

/// How a scroll command moves the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately
    #[default]
    Auto,
    /// Animate the transition
    Smooth,
}

// ─────────────────────────────────────────────────────────────────────────────
// The Surface Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Host-side rendering surface the enhancer works against
pub trait Surface {
    /// Elements currently matching a selector, in page order
    fn query(&self, selector: &Selector) -> Vec<ElementId>;

    /// Read an element's attribute value
    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;

    /// Create a new element appended to the page, carrying the given id.
    /// Ids are how owned widgets are recognized across runs.
    fn create_element(&mut self, tag: &str, id: &str) -> ElementId;

    /// Remove an element from the page
    fn remove_element(&mut self, el: ElementId);

    /// Apply a style patch to an element. Patches merge: properties the
    /// patch leaves unset keep their current values.
    fn set_style(&mut self, el: ElementId, patch: StylePatch);

    /// Install (or replace) a stylesheet under an id
    fn install_stylesheet(&mut self, id: &str, sheet: Stylesheet);

    /// Remove a stylesheet previously installed under an id
    fn remove_stylesheet(&mut self, id: &str);

    /// Record interest in an event kind on a target. The host forwards
    /// matching occurrences to the enhancer until `unlisten` is called.
    fn listen(&mut self, target: EventTarget, kind: EventKind) -> ListenerId;

    /// Release a `listen` registration
    fn unlisten(&mut self, listener: ListenerId);

    /// Watch an element's viewport intersection. The host forwards a
    /// visibility event whenever the visible ratio crosses the threshold.
    fn observe_visibility(&mut self, el: ElementId, threshold: f32) -> ObserverId;

    /// Release an `observe_visibility` registration
    fn unobserve(&mut self, observer: ObserverId);

    /// Current scroll geometry
    fn metrics(&self) -> PageMetrics;

    /// Scroll the page back to the top
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    /// Scroll an element into view
    fn scroll_into_view(&mut self, el: ElementId, behavior: ScrollBehavior);

    /// The color scheme the page prefers right now
    fn preferred_scheme(&self) -> ColorScheme;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_is_sequential() {
        let mut ids = ElementIdGenerator::new();
        let a = ids.next();
        let b = ids.next();
        assert_ne!(a, b);
        assert_eq!(a, ElementId(1));
        assert_eq!(b, ElementId(2));
    }

    #[test]
    fn test_progress_fraction_midway() {
        let metrics = PageMetrics {
            scroll_offset: 500.0,
            content_height: 1800.0,
            viewport_height: 800.0,
        };
        assert_eq!(metrics.scrollable_height(), 1000.0);
        assert_eq!(metrics.progress_fraction(), 0.5);
    }

    #[test]
    fn test_progress_fraction_unscrollable_page_is_zero() {
        let metrics = PageMetrics {
            scroll_offset: 0.0,
            content_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(metrics.progress_fraction(), 0.0);
        assert!(!metrics.progress_fraction().is_nan());

        let exact = PageMetrics {
            scroll_offset: 0.0,
            content_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(exact.progress_fraction(), 0.0);
    }

    #[test]
    fn test_progress_fraction_clamps_overscroll() {
        let metrics = PageMetrics {
            scroll_offset: 1200.0,
            content_height: 1800.0,
            viewport_height: 800.0,
        };
        assert_eq!(metrics.progress_fraction(), 1.0);
    }
}
