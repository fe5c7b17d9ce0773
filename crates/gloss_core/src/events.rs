//! Page events
//!
//! The events a host forwards into the enhancer. Delivery is pull-free:
//! the host observes something happen on its page (a pointer crossing an
//! element, a scroll, a click, an element entering the viewport) and hands
//! the occurrence over as one `Event`. Consuming code can mark the event
//! handled via [`Event::prevent_default`], which DOM-backed hosts translate
//! to `preventDefault()` on the native event.

use crate::surface::ElementId;

/// Kinds of page events the enhancer reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
    Click,
    /// Page scroll position changed
    Scroll,
    /// Observed element's viewport intersection changed
    Visibility,
}

/// What an event happened on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The page itself (scrolling)
    Page,
    Element(ElementId),
}

/// Event-specific data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    None,
    Scroll {
        /// Vertical scroll offset in pixels from the top of the page
        offset: f32,
    },
    Visibility {
        /// Fraction of the element inside the viewport (0.0 to 1.0)
        ratio: f32,
    },
}

/// A page event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub target: EventTarget,
    pub data: EventData,
    pub default_prevented: bool,
}

impl Event {
    pub fn pointer_enter(el: ElementId) -> Self {
        Self::new(EventKind::PointerEnter, EventTarget::Element(el), EventData::None)
    }

    pub fn pointer_leave(el: ElementId) -> Self {
        Self::new(EventKind::PointerLeave, EventTarget::Element(el), EventData::None)
    }

    pub fn click(el: ElementId) -> Self {
        Self::new(EventKind::Click, EventTarget::Element(el), EventData::None)
    }

    pub fn scroll(offset: f32) -> Self {
        Self::new(EventKind::Scroll, EventTarget::Page, EventData::Scroll { offset })
    }

    pub fn visibility(el: ElementId, ratio: f32) -> Self {
        Self::new(
            EventKind::Visibility,
            EventTarget::Element(el),
            EventData::Visibility { ratio },
        )
    }

    fn new(kind: EventKind, target: EventTarget, data: EventData) -> Self {
        Self {
            kind,
            target,
            data,
            default_prevented: false,
        }
    }

    /// Suppress the host's default reaction (e.g. native anchor navigation)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
