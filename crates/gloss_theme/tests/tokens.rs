use gloss_core::{Color, ColorScheme};
use gloss_theme::{Theme, tokens::brand};

#[test]
fn both_schemes_share_the_brand_accents() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let theme = Theme::for_scheme(scheme);
        assert_eq!(
            theme.palette.accent,
            Color::from_hex(0x0066FF),
            "Scheme {:?} should keep the brand accent",
            scheme
        );
        assert_eq!(
            theme.palette.accent_alt,
            Color::from_hex(0x00D4AA),
            "Scheme {:?} should keep the alt accent",
            scheme
        );
    }
}

#[test]
fn dark_scheme_inverts_ink_onto_the_brand_canvas() {
    let dark = Theme::for_scheme(ColorScheme::Dark);
    assert_eq!(dark.palette.canvas, brand::INK);
    assert_eq!(dark.palette.ink, Color::WHITE);
    assert_eq!(dark.palette.headline_sweep, brand::ACCENT_ALT);
}

#[test]
fn accent_gradient_runs_accent_to_alt() {
    let theme = Theme::default();
    let gradient = theme.palette.accent_gradient(135.0);
    assert_eq!(gradient.angle_deg, 135.0);
    assert_eq!(gradient.stops.first().unwrap().color, theme.palette.accent);
    assert_eq!(
        gradient.stops.last().unwrap().color,
        theme.palette.accent_alt
    );
}

#[test]
fn shadow_ladder_orders_rest_below_raised() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let shadows = Theme::for_scheme(scheme).shadows;
        assert!(
            shadows.raised.offset_y > shadows.resting.offset_y,
            "Scheme {:?} should lift the raised shadow",
            scheme
        );
        assert!(shadows.raised.blur > shadows.resting.blur);
    }
}

#[test]
fn motion_tokens_carry_the_documented_defaults() {
    let motion = Theme::default().motion;
    assert_eq!(motion.glass_blur, 10.0);
    assert_eq!(motion.hover_lift, 4.0);
    assert_eq!(motion.hover_scale, 1.02);
    assert_eq!(motion.bar_height, 3.0);
    assert_eq!(motion.bar_layer, 9999);
    assert_eq!(motion.progress_transition_ms, 100.0);
    assert_eq!(motion.button_size, 50.0);
    assert_eq!(motion.button_inset, 30.0);
    assert_eq!(motion.button_layer, 999);
    assert_eq!(motion.reveal_offset, 30.0);
    assert_eq!(motion.reveal_duration_ms, 600.0);
}

#[test]
fn theme_round_trips_through_serde() {
    let theme = Theme::for_scheme(ColorScheme::Dark);
    let json = serde_json::to_string(&theme).expect("theme serializes");
    let back: Theme = serde_json::from_str(&json).expect("theme deserializes");
    assert_eq!(theme, back);
}
