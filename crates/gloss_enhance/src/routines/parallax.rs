//! Page header parallax

use gloss_core::{ElementId, EventKind, EventTarget, StylePatch, Surface, Transform};

use crate::config::EnhanceConfig;
use crate::enhancer::Bindings;

/// Couple the first parallax target to the page scroll. No match, no
/// listener.
pub(crate) fn install(
    surface: &mut impl Surface,
    config: &EnhanceConfig,
    bindings: &mut Bindings,
) {
    let Some(&header) = surface.query(&config.parallax_target).first() else {
        return;
    };
    bindings
        .listeners
        .push(surface.listen(EventTarget::Page, EventKind::Scroll));
    bindings.parallax_target = Some(header);
}

/// Slide the header down a fraction of the scrolled distance, so it
/// appears to recede behind the content.
pub(crate) fn update(surface: &mut impl Surface, header: ElementId, offset: f32, factor: f32) {
    surface.set_style(
        header,
        StylePatch::new().transform(Transform::translate(0.0, offset * factor)),
    );
}
