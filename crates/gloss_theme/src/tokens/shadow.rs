//! Shadow tokens for the enhancement layer

use gloss_core::{Color, Shadow};

use crate::tokens::palette::brand;

/// Complete set of shadow tokens, resolved per scheme
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShadowTokens {
    /// Under frosted-glass surfaces
    pub glass: Shadow,
    /// Cards at rest
    pub resting: Shadow,
    /// Cards lifted on hover
    pub raised: Shadow,
    /// Under the reading progress bar
    pub bar: Shadow,
    /// Under the back-to-top button
    pub button: Shadow,
    /// The standalone card-shadow utility class
    pub card: Shadow,
}

impl ShadowTokens {
    /// Shadow tokens for a light color scheme
    pub fn light() -> Self {
        let indigo = Color::rgb(31.0 / 255.0, 38.0 / 255.0, 135.0 / 255.0);
        let accent = brand::ACCENT;
        Self {
            glass: Shadow::new(0.0, 8.0, 32.0, 0.0, indigo.with_alpha(0.1)),
            resting: Shadow::new(0.0, 8.0, 16.0, 0.0, Color::BLACK.with_alpha(0.1)),
            raised: Shadow::new(0.0, 12.0, 24.0, 0.0, accent.with_alpha(0.15)),
            bar: Shadow::new(0.0, 2.0, 10.0, 0.0, accent.with_alpha(0.3)),
            button: Shadow::new(0.0, 4.0, 15.0, 0.0, accent.with_alpha(0.3)),
            card: Shadow::new(0.0, 4.0, 12.0, 0.0, accent.with_alpha(0.08)),
        }
    }

    /// Shadow tokens for a dark color scheme (same geometry, deeper alphas)
    pub fn dark() -> Self {
        let indigo = Color::rgb(31.0 / 255.0, 38.0 / 255.0, 135.0 / 255.0);
        let accent = brand::ACCENT;
        Self {
            glass: Shadow::new(0.0, 8.0, 32.0, 0.0, indigo.with_alpha(0.3)),
            resting: Shadow::new(0.0, 8.0, 16.0, 0.0, Color::BLACK.with_alpha(0.3)),
            raised: Shadow::new(0.0, 12.0, 24.0, 0.0, accent.with_alpha(0.35)),
            bar: Shadow::new(0.0, 2.0, 10.0, 0.0, accent.with_alpha(0.45)),
            button: Shadow::new(0.0, 4.0, 15.0, 0.0, accent.with_alpha(0.45)),
            card: Shadow::new(0.0, 4.0, 12.0, 0.0, accent.with_alpha(0.2)),
        }
    }

    /// Linear interpolation between two shadow token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            glass: Shadow::lerp(&from.glass, &to.glass, t),
            resting: Shadow::lerp(&from.resting, &to.resting, t),
            raised: Shadow::lerp(&from.raised, &to.raised, t),
            bar: Shadow::lerp(&from.bar, &to.bar, t),
            button: Shadow::lerp(&from.button, &to.button, t),
            card: Shadow::lerp(&from.card, &to.card, t),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_geometry() {
        let tokens = ShadowTokens::light();
        assert_eq!(tokens.glass.offset_y, 8.0);
        assert_eq!(tokens.glass.blur, 32.0);
        assert_eq!(tokens.raised.offset_y, 12.0);
        assert_eq!(tokens.raised.blur, 24.0);
        assert!((tokens.raised.color.a - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_dark_keeps_geometry_deepens_alpha() {
        let light = ShadowTokens::light();
        let dark = ShadowTokens::dark();
        assert_eq!(light.glass.blur, dark.glass.blur);
        assert!(dark.glass.color.a > light.glass.color.a);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = ShadowTokens::lerp(&ShadowTokens::light(), &ShadowTokens::dark(), 0.5);
        assert!((mid.glass.color.a - 0.2).abs() < 1e-6);
        assert_eq!(mid.glass.blur, 32.0);
    }
}
