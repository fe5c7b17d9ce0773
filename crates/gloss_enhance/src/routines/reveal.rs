//! One-shot entrance reveal

use gloss_core::{
    AnimationRef, FillMode, Keyframes, MotionProps, StylePatch, Stylesheet, Surface, Transform,
};
use gloss_theme::{MotionTokens, Theme};

use crate::config::EnhanceConfig;
use crate::enhancer::Bindings;

/// Id of the stylesheet carrying the entrance keyframes. Separate from
/// the base sheet so the reveal works with base styles disabled.
pub const REVEAL_STYLESHEET_ID: &str = "gloss-reveal";

/// Slide-up-and-fade-in entrance track
pub const REVEAL_KEYFRAMES: &str = "gloss-reveal-slide-in";

/// Hide every reveal target below its final position and observe it at
/// the configured visibility threshold.
pub(crate) fn install(
    surface: &mut impl Surface,
    config: &EnhanceConfig,
    theme: &Theme,
    bindings: &mut Bindings,
) {
    surface.install_stylesheet(REVEAL_STYLESHEET_ID, reveal_stylesheet(&theme.motion));

    let hidden = StylePatch::new()
        .opacity(0.0)
        .transform(Transform::translate(0.0, theme.motion.reveal_offset));

    for selector in &config.reveal_targets {
        for el in surface.query(selector) {
            // An element matching several target selectors observes once
            if bindings.reveal_pending.contains_key(&el) {
                continue;
            }
            surface.set_style(el, hidden.clone());
            let observer = surface.observe_visibility(el, config.reveal_threshold);
            bindings.reveal_pending.insert(el, observer);
        }
    }
    tracing::debug!("reveal: watching {} elements", bindings.reveal_pending.len());
}

/// The patch merged when an observed element first shows enough of
/// itself. Fill-forwards keeps it at full opacity once played.
pub(crate) fn entrance(theme: &Theme) -> StylePatch {
    let motion = &theme.motion;
    StylePatch::new().animation(
        AnimationRef::new(REVEAL_KEYFRAMES, motion.reveal_duration_ms)
            .easing(motion.reveal_easing)
            .fill(FillMode::Forwards),
    )
}

fn reveal_stylesheet(motion: &MotionTokens) -> Stylesheet {
    Stylesheet::new().keyframes(
        Keyframes::new(REVEAL_KEYFRAMES)
            .frame(
                0.0,
                MotionProps::new().opacity(0.0).translate_y(motion.reveal_offset),
            )
            .frame(1.0, MotionProps::new().opacity(1.0).translate_y(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_undoes_the_hidden_state() {
        let theme = Theme::default();
        let track = reveal_stylesheet(&theme.motion);
        let settled = track
            .keyframes_named(REVEAL_KEYFRAMES)
            .unwrap()
            .final_props();
        assert_eq!(settled.opacity, Some(1.0));
        assert_eq!(settled.translate_y, Some(0.0));

        let patch = entrance(&theme);
        let anim = patch.animation.unwrap();
        assert_eq!(anim.fill, FillMode::Forwards);
        assert_eq!(anim.name, REVEAL_KEYFRAMES);
    }
}
