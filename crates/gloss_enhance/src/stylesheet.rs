//! The injected base stylesheet
//!
//! Everything here is page-wide decoration that needs no per-element
//! bookkeeping: named keyframe tracks page CSS can reference, the
//! post-title gradient sweep, the typing-cursor blink, the link hover
//! underline, and the dark-scheme canvas. The enhancer installs the sheet
//! under [`BASE_STYLESHEET_ID`] and replaces it wholesale on re-run.

use gloss_core::{
    AnimationRef, ColorScheme, Easing, FillMode, Keyframes, MotionProps, Selector, StylePatch,
    Stylesheet, Transition,
};
use gloss_theme::{Palette, Theme};

/// Id the base stylesheet installs under
pub const BASE_STYLESHEET_ID: &str = "gloss-base";

/// Gentle vertical bobbing
pub const FLOAT_KEYFRAMES: &str = "gloss-float";
/// Opacity breathing
pub const PULSE_KEYFRAMES: &str = "gloss-pulse";
/// Background sweep across an oversized gradient
pub const SHIMMER_KEYFRAMES: &str = "gloss-shimmer";
/// Hard on/off blink for the typing cursor
pub const CURSOR_BLINK_KEYFRAMES: &str = "gloss-cursor-blink";
/// Width growth for the link hover underline
pub const UNDERLINE_EXPAND_KEYFRAMES: &str = "gloss-underline-expand";

/// Build the base stylesheet for a resolved theme.
///
/// Rules that differ between schemes are emitted once per scheme; the
/// sheet carries both so a host flipping its scheme needs no reinstall.
pub fn base_stylesheet(theme: &Theme) -> Stylesheet {
    let motion = &theme.motion;
    let light = Palette::light();
    let dark = Palette::dark();

    Stylesheet::new()
        .keyframes(
            Keyframes::new(FLOAT_KEYFRAMES)
                .frame(0.0, MotionProps::new().translate_y(0.0))
                .frame(0.5, MotionProps::new().translate_y(-10.0))
                .frame(1.0, MotionProps::new().translate_y(0.0)),
        )
        .keyframes(
            Keyframes::new(PULSE_KEYFRAMES)
                .frame(0.0, MotionProps::new().opacity(1.0))
                .frame(0.5, MotionProps::new().opacity(0.7))
                .frame(1.0, MotionProps::new().opacity(1.0)),
        )
        .keyframes(
            Keyframes::new(SHIMMER_KEYFRAMES)
                .frame(0.0, MotionProps::new().background_shift(-200.0))
                .frame(1.0, MotionProps::new().background_shift(200.0)),
        )
        // Step shape: full opacity through the first half, off after
        .keyframes(
            Keyframes::new(CURSOR_BLINK_KEYFRAMES)
                .frame(0.0, MotionProps::new().opacity(1.0))
                .frame(0.5, MotionProps::new().opacity(1.0))
                .frame(0.51, MotionProps::new().opacity(0.0))
                .frame(1.0, MotionProps::new().opacity(0.0)),
        )
        .keyframes(
            Keyframes::new(UNDERLINE_EXPAND_KEYFRAMES)
                .frame(0.0, MotionProps::new().width_percent(0.0))
                .frame(1.0, MotionProps::new().width_percent(100.0)),
        )
        .scheme_rule(
            ColorScheme::Light,
            Selector::class("post-title"),
            title_sweep(&light, motion.headline_sweep_ms),
        )
        .scheme_rule(
            ColorScheme::Dark,
            Selector::class("post-title"),
            title_sweep(&dark, motion.headline_sweep_ms),
        )
        // Sliding the shift across the hard stop runs the sweep color
        // over the text; the at-rest rule carries the transition back
        .hover_rule(
            Selector::class("post-title"),
            StylePatch::new().background_shift(200.0),
        )
        .rule(
            Selector::class("typed-cursor"),
            StylePatch::new().animation(
                AnimationRef::new(CURSOR_BLINK_KEYFRAMES, motion.cursor_blink_ms).infinite(),
            ),
        )
        .hover_rule(
            Selector::tag("a").without_class("btn").without_class("card-info"),
            StylePatch::new()
                .text_underline(true)
                .underline_brush(theme.palette.accent_gradient(90.0))
                .animation(
                    AnimationRef::new(UNDERLINE_EXPAND_KEYFRAMES, motion.underline_duration_ms)
                        .fill(FillMode::Forwards),
                ),
        )
        .rule(
            Selector::class("gloss-card-shadow"),
            StylePatch::new().shadow(theme.shadows.card),
        )
        .scheme_rule(
            ColorScheme::Dark,
            Selector::tag("body"),
            StylePatch::new().background(dark.canvas),
        )
}

/// Post-title text fill at rest: ink everywhere, sweep parked off-text
fn title_sweep(palette: &Palette, sweep_ms: f32) -> StylePatch {
    StylePatch::new()
        .text_fill(palette.sweep_gradient())
        .background_shift(-200.0)
        .transition(Transition::background_shift(sweep_ms, Easing::Ease))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_core::PseudoState;

    #[test]
    fn test_declares_all_ambient_tracks() {
        let sheet = base_stylesheet(&Theme::default());
        for name in [
            FLOAT_KEYFRAMES,
            PULSE_KEYFRAMES,
            SHIMMER_KEYFRAMES,
            CURSOR_BLINK_KEYFRAMES,
            UNDERLINE_EXPAND_KEYFRAMES,
        ] {
            assert!(sheet.keyframes_named(name).is_some(), "missing track {name}");
        }
    }

    #[test]
    fn test_cursor_blink_is_a_step() {
        let sheet = base_stylesheet(&Theme::default());
        let blink = sheet.keyframes_named(CURSOR_BLINK_KEYFRAMES).unwrap();
        assert_eq!(blink.sample(0.25).opacity, Some(1.0));
        assert_eq!(blink.sample(0.75).opacity, Some(0.0));
    }

    #[test]
    fn test_title_rules_cover_both_schemes() {
        let sheet = base_stylesheet(&Theme::default());
        let rules = sheet.rules_for(&Selector::class("post-title"));
        assert_eq!(rules.len(), 3);

        let schemes: Vec<_> = rules.iter().map(|r| r.scheme).collect();
        assert!(schemes.contains(&Some(ColorScheme::Light)));
        assert!(schemes.contains(&Some(ColorScheme::Dark)));

        // At rest the sweep is parked off-text; hover slides it through
        let rest = rules.iter().find(|r| r.pseudo.is_none()).unwrap();
        assert_eq!(rest.patch.background_shift, Some(-200.0));
        let hover = rules
            .iter()
            .find(|r| r.pseudo == Some(PseudoState::Hover))
            .unwrap();
        assert_eq!(hover.patch.background_shift, Some(200.0));
    }

    #[test]
    fn test_underline_rule_targets_plain_links_only() {
        let sheet = base_stylesheet(&Theme::default());
        let selector = Selector::tag("a")
            .without_class("btn")
            .without_class("card-info");
        let rules = sheet.rules_for(&selector);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pseudo, Some(PseudoState::Hover));
        assert_eq!(rules[0].patch.text_underline, Some(true));
        assert!(rules[0].patch.underline_brush.is_some());
    }

    #[test]
    fn test_dark_scheme_overrides_body_canvas() {
        let sheet = base_stylesheet(&Theme::default());
        let rules = sheet.rules_for(&Selector::tag("body"));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].scheme, Some(ColorScheme::Dark));
        assert_eq!(
            rules[0].patch.background,
            Some(Palette::dark().canvas.into())
        );
    }
}
