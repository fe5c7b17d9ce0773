//! Smooth same-page anchor scrolling

use gloss_core::{ElementId, EventKind, EventTarget, ScrollBehavior, Selector, Surface};

use crate::config::EnhanceConfig;
use crate::enhancer::Bindings;

/// Register click interest on every same-page anchor link.
pub(crate) fn install(
    surface: &mut impl Surface,
    config: &EnhanceConfig,
    bindings: &mut Bindings,
) {
    for el in surface.query(&config.anchor_target) {
        if !bindings.anchor_targets.insert(el) {
            continue;
        }
        bindings
            .listeners
            .push(surface.listen(EventTarget::Element(el), EventKind::Click));
    }
    tracing::debug!("anchors: tracking {} links", bindings.anchor_targets.len());
}

/// Resolve the anchor's fragment at click time (the href may have changed
/// since install) and glide to the named element. A bare `#` or a
/// fragment naming no element scrolls nowhere.
pub(crate) fn follow(surface: &mut impl Surface, anchor: ElementId) {
    let Some(href) = surface.attribute(anchor, "href") else {
        return;
    };
    let Some(fragment) = href.strip_prefix('#') else {
        return;
    };
    if fragment.is_empty() {
        return;
    }
    match surface.query(&Selector::id(fragment)).first() {
        Some(&target) => surface.scroll_into_view(target, ScrollBehavior::Smooth),
        None => tracing::debug!("anchors: `#{fragment}` names no element"),
    }
}
