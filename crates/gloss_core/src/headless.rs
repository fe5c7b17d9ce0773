//! In-memory surface
//!
//! `HeadlessSurface` implements [`Surface`] without a page behind it: nodes,
//! styles, stylesheets, and registrations live in plain maps. It exists for
//! tests, examples, and host dry-runs - drive it with the page-simulation
//! methods (`scroll_to`, `pointer_enter`, `set_visibility`, ...), drain the
//! queued events with `take_events`, and assert on the stored state.
//!
//! Two deliberate simplifications against a real page:
//!
//! - There is no layout, so scroll commands are only recorded (inspect them
//!   via `scroll_commands`); `scroll_to_top` additionally resets the scroll
//!   offset. Simulate any follow-on scroll stream explicitly with
//!   `scroll_to`.
//! - Applying a patch whose animation fills forwards immediately resolves
//!   the named keyframe track's final frame into the stored style, so the
//!   state an animation settles into is assertable without a renderer.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::events::{Event, EventKind, EventTarget};
use crate::node::PageNode;
use crate::selector::Selector;
use crate::style::{FillMode, StylePatch};
use crate::stylesheet::Stylesheet;
use crate::surface::{
    ElementId, ElementIdGenerator, ListenerId, ObserverId, PageMetrics, ScrollBehavior, Surface,
};
use crate::visual::ColorScheme;

/// A scroll command a surface was asked to perform
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollCommand {
    ToTop(ScrollBehavior),
    IntoView(ElementId, ScrollBehavior),
}

#[derive(Clone, Copy, Debug)]
struct ListenerRecord {
    target: EventTarget,
    kind: EventKind,
}

#[derive(Clone, Copy, Debug)]
struct ObserverRecord {
    el: ElementId,
    #[allow(dead_code)]
    threshold: f32,
}

/// An in-memory [`Surface`] for tests and dry-runs
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    ids: ElementIdGenerator,
    nodes: FxHashMap<ElementId, PageNode>,
    /// Page order of live elements
    order: Vec<ElementId>,
    styles: FxHashMap<ElementId, StylePatch>,
    stylesheets: FxHashMap<String, Stylesheet>,
    listeners: SlotMap<ListenerId, ListenerRecord>,
    observers: SlotMap<ObserverId, ObserverRecord>,
    metrics: PageMetrics,
    scheme: ColorScheme,
    events: Vec<Event>,
    commands: Vec<ScrollCommand>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Page setup
    // ─────────────────────────────────────────────────────────────────────

    /// Add an element to the page, returning its id
    pub fn insert(&mut self, node: PageNode) -> ElementId {
        let id = self.ids.next();
        self.nodes.insert(id, node);
        self.order.push(id);
        id
    }

    /// Set content and viewport heights
    pub fn set_extent(&mut self, content_height: f32, viewport_height: f32) {
        self.metrics.content_height = content_height;
        self.metrics.viewport_height = viewport_height;
    }

    pub fn set_preferred_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Page simulation
    // ─────────────────────────────────────────────────────────────────────
    // Each method synthesizes an event only when matching interest is
    // registered, mirroring a host that forwards what was listened for.

    pub fn pointer_enter(&mut self, el: ElementId) {
        if self.has_listener(EventTarget::Element(el), EventKind::PointerEnter) {
            self.events.push(Event::pointer_enter(el));
        }
    }

    pub fn pointer_leave(&mut self, el: ElementId) {
        if self.has_listener(EventTarget::Element(el), EventKind::PointerLeave) {
            self.events.push(Event::pointer_leave(el));
        }
    }

    pub fn click(&mut self, el: ElementId) {
        if self.has_listener(EventTarget::Element(el), EventKind::Click) {
            self.events.push(Event::click(el));
        }
    }

    /// Move the scroll position, queueing a scroll event if listened for
    pub fn scroll_to(&mut self, offset: f32) {
        self.metrics.scroll_offset = offset;
        if self.has_listener(EventTarget::Page, EventKind::Scroll) {
            self.events.push(Event::scroll(offset));
        }
    }

    /// Report an element's visible ratio, queueing a visibility event if
    /// the element is observed
    pub fn set_visibility(&mut self, el: ElementId, ratio: f32) {
        if self.observers.values().any(|o| o.el == el) {
            self.events.push(Event::visibility(el, ratio));
        }
    }

    /// Drain the queued events in arrival order
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────────────────

    /// The merged style applied to an element so far
    pub fn style(&self, el: ElementId) -> Option<&StylePatch> {
        self.styles.get(&el)
    }

    pub fn node(&self, el: ElementId) -> Option<&PageNode> {
        self.nodes.get(&el)
    }

    pub fn contains(&self, el: ElementId) -> bool {
        self.nodes.contains_key(&el)
    }

    /// Find a live element by its page id
    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        self.order
            .iter()
            .copied()
            .find(|el| self.nodes[el].id.as_deref() == Some(id))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn stylesheet(&self, id: &str) -> Option<&Stylesheet> {
        self.stylesheets.get(id)
    }

    /// Scroll commands issued so far, oldest first
    pub fn scroll_commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    fn has_listener(&self, target: EventTarget, kind: EventKind) -> bool {
        self.listeners
            .values()
            .any(|l| l.target == target && l.kind == kind)
    }

    /// Resolve the final frame of a forwards-filling animation into a patch
    fn settled_animation_state(&self, patch: &StylePatch) -> Option<StylePatch> {
        let anim = patch.animation.as_ref()?;
        if !matches!(anim.fill, FillMode::Forwards | FillMode::Both) {
            return None;
        }
        let track = self
            .stylesheets
            .values()
            .find_map(|sheet| sheet.keyframes_named(&anim.name))?;
        Some(StylePatch::from(track.final_props()))
    }
}

impl Surface for HeadlessSurface {
    fn query(&self, selector: &Selector) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|el| selector.matches(&self.nodes[el]))
            .collect()
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.nodes
            .get(&el)
            .and_then(|n| n.attr_value(name))
            .map(str::to_string)
    }

    fn create_element(&mut self, tag: &str, id: &str) -> ElementId {
        self.insert(PageNode::new(tag).with_id(id))
    }

    fn remove_element(&mut self, el: ElementId) {
        if self.nodes.remove(&el).is_none() {
            tracing::trace!(?el, "remove_element: unknown element ignored");
            return;
        }
        self.order.retain(|e| *e != el);
        self.styles.remove(&el);
    }

    fn set_style(&mut self, el: ElementId, patch: StylePatch) {
        if !self.nodes.contains_key(&el) {
            tracing::trace!(?el, "set_style: unknown element ignored");
            return;
        }
        let settled = self.settled_animation_state(&patch);
        let entry = self.styles.entry(el).or_default();
        *entry = entry.merge(&patch);
        if let Some(settled) = settled {
            *entry = entry.merge(&settled);
        }
    }

    fn install_stylesheet(&mut self, id: &str, sheet: Stylesheet) {
        tracing::debug!(
            id,
            keyframes = sheet.keyframes.len(),
            rules = sheet.rules.len(),
            "install stylesheet"
        );
        self.stylesheets.insert(id.to_string(), sheet);
    }

    fn remove_stylesheet(&mut self, id: &str) {
        self.stylesheets.remove(id);
    }

    fn listen(&mut self, target: EventTarget, kind: EventKind) -> ListenerId {
        self.listeners.insert(ListenerRecord { target, kind })
    }

    fn unlisten(&mut self, listener: ListenerId) {
        self.listeners.remove(listener);
    }

    fn observe_visibility(&mut self, el: ElementId, threshold: f32) -> ObserverId {
        self.observers.insert(ObserverRecord { el, threshold })
    }

    fn unobserve(&mut self, observer: ObserverId) {
        self.observers.remove(observer);
    }

    fn metrics(&self) -> PageMetrics {
        self.metrics
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.metrics.scroll_offset = 0.0;
        self.commands.push(ScrollCommand::ToTop(behavior));
    }

    fn scroll_into_view(&mut self, el: ElementId, behavior: ScrollBehavior) {
        self.commands.push(ScrollCommand::IntoView(el, behavior));
    }

    fn preferred_scheme(&self) -> ColorScheme {
        self.scheme
    }
}
