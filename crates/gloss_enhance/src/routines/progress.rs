//! Reading progress bar

use gloss_core::{
    Dimension, Easing, ElementId, EventKind, EventTarget, PageMetrics, Pin, StylePatch, Surface,
    Transition,
};
use gloss_theme::Theme;

use crate::enhancer::Bindings;
use crate::routines::find_or_create;

/// Well-known element id of the progress bar widget
pub const PROGRESS_BAR_ID: &str = "gloss-progress-bar";

/// Pin a zero-width gradient bar across the top of the viewport and
/// follow the page scroll.
pub(crate) fn install(surface: &mut impl Surface, theme: &Theme, bindings: &mut Bindings) {
    let motion = &theme.motion;
    let bar = find_or_create(surface, "div", PROGRESS_BAR_ID);

    surface.set_style(
        bar,
        StylePatch::new()
            .pin(Pin::top_left(0.0, 0.0))
            .width(Dimension::Percent(0.0))
            .height(Dimension::Px(motion.bar_height))
            .background(theme.palette.accent_gradient(90.0))
            .shadow(theme.shadows.bar)
            .z_index(motion.bar_layer)
            .transition(Transition::width(motion.progress_transition_ms, Easing::Ease)),
    );

    bindings
        .listeners
        .push(surface.listen(EventTarget::Page, EventKind::Scroll));
    bindings.progress_bar = Some(bar);
}

/// Stretch the bar to the scrolled fraction of the page. Runs on every
/// scroll event; an unscrollable page keeps the bar at zero.
pub(crate) fn update(surface: &mut impl Surface, bar: ElementId, metrics: &PageMetrics) {
    let percent = metrics.progress_fraction() * 100.0;
    surface.set_style(bar, StylePatch::new().width(Dimension::Percent(percent)));
}
