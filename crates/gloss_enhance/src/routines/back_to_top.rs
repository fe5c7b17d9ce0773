//! Back-to-top button

use gloss_core::{
    Easing, ElementId, EventKind, EventTarget, Pin, StylePatch, Surface, Transition,
};
use gloss_theme::Theme;

use crate::enhancer::Bindings;
use crate::routines::find_or_create;

/// Well-known element id of the back-to-top widget
pub const BACK_TO_TOP_ID: &str = "gloss-back-to-top";

/// Park a hidden circular button in the bottom-right corner and watch the
/// scroll position to toggle it.
pub(crate) fn install(surface: &mut impl Surface, theme: &Theme, bindings: &mut Bindings) {
    let motion = &theme.motion;
    let button = find_or_create(surface, "button", BACK_TO_TOP_ID);

    surface.set_style(
        button,
        StylePatch::new()
            .circular(motion.button_size)
            .pin(Pin::bottom_right(motion.button_inset, motion.button_inset))
            .background(theme.palette.accent_gradient(135.0))
            .shadow(theme.shadows.button)
            .opacity(0.0)
            .visible(false)
            .z_index(motion.button_layer)
            .transition(Transition::all(motion.button_transition_ms, Easing::Ease)),
    );

    bindings
        .listeners
        .push(surface.listen(EventTarget::Page, EventKind::Scroll));
    bindings
        .listeners
        .push(surface.listen(EventTarget::Element(button), EventKind::Click));
    bindings.back_to_top = Some(button);
}

/// Written on every scroll event: shown strictly beyond the threshold,
/// hidden at or below it.
pub(crate) fn update(
    surface: &mut impl Surface,
    button: ElementId,
    offset: f32,
    threshold: f32,
) {
    let shown = offset > threshold;
    surface.set_style(
        button,
        StylePatch::new()
            .opacity(if shown { 1.0 } else { 0.0 })
            .visible(shown),
    );
}
