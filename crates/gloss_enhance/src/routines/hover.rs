//! Card lift on pointer hover

use gloss_core::{Easing, EventKind, EventTarget, StylePatch, Surface, Transform, Transition};
use gloss_theme::Theme;

use crate::config::EnhanceConfig;
use crate::enhancer::Bindings;

/// Register pointer enter/leave interest on every hover target.
pub(crate) fn install(
    surface: &mut impl Surface,
    config: &EnhanceConfig,
    bindings: &mut Bindings,
) {
    for selector in &config.hover_targets {
        for el in surface.query(selector) {
            if !bindings.hover_targets.insert(el) {
                continue;
            }
            let target = EventTarget::Element(el);
            bindings
                .listeners
                .push(surface.listen(target, EventKind::PointerEnter));
            bindings
                .listeners
                .push(surface.listen(target, EventKind::PointerLeave));
        }
    }
    tracing::debug!("hover: tracking {} cards", bindings.hover_targets.len());
}

/// Pointer entered: lift the card onto the raised shadow. The transition
/// rides along so the settle back is animated too.
pub(crate) fn raised(theme: &Theme) -> StylePatch {
    let motion = &theme.motion;
    StylePatch::new()
        .transform(Transform::translate(0.0, -motion.hover_lift).with_scale(motion.hover_scale))
        .shadow(theme.shadows.raised)
        .transition(Transition::all(motion.hover_transition_ms, Easing::Ease))
}

/// Pointer left: back to identity and the resting shadow.
pub(crate) fn rest(theme: &Theme) -> StylePatch {
    StylePatch::new()
        .transform(Transform::IDENTITY)
        .shadow(theme.shadows.resting)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_lifts_against_scroll_direction() {
        let patch = raised(&Theme::default());
        let transform = patch.transform.unwrap();
        assert!(transform.translate_y < 0.0);
        assert!(transform.scale_x > 1.0);
        assert!(patch.transition.is_some());
    }

    #[test]
    fn test_rest_restores_identity() {
        let patch = rest(&Theme::default());
        assert_eq!(patch.transform, Some(Transform::IDENTITY));
        // Leaves the transition alone so the settle stays animated
        assert!(patch.transition.is_none());
    }
}
