//! Color tokens for the enhancement layer

use gloss_core::{Color, ColorScheme, Gradient};

/// The fixed brand colors everything else derives from
pub mod brand {
    use gloss_core::Color;

    /// Electric blue, the primary accent (#0066FF)
    pub const ACCENT: Color = Color::rgb(0.0, 102.0 / 255.0, 255.0 / 255.0);
    /// Teal counterpart used as the gradient far end (#00D4AA)
    pub const ACCENT_ALT: Color = Color::rgb(0.0, 212.0 / 255.0, 170.0 / 255.0);
    /// Near-black used for text in light mode and the page canvas in dark (#1A1A1A)
    pub const INK: Color = Color::rgb(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0);
}

/// Scheme-resolved color tokens
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Primary accent
    pub accent: Color,
    /// Secondary accent (gradient far end)
    pub accent_alt: Color,
    /// Body text color
    pub ink: Color,
    /// Page background
    pub canvas: Color,
    /// Color that sweeps across headlines on hover
    pub headline_sweep: Color,
}

impl Palette {
    /// Tokens for the light scheme
    pub fn light() -> Self {
        Self {
            accent: brand::ACCENT,
            accent_alt: brand::ACCENT_ALT,
            ink: brand::INK,
            canvas: Color::WHITE,
            headline_sweep: brand::ACCENT,
        }
    }

    /// Tokens for the dark scheme
    pub fn dark() -> Self {
        Self {
            accent: brand::ACCENT,
            accent_alt: brand::ACCENT_ALT,
            ink: Color::WHITE,
            canvas: brand::INK,
            headline_sweep: brand::ACCENT_ALT,
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    /// The accent-to-alt linear gradient at a given angle. The progress
    /// bar, underline, and subtitle draw it at 90°; the back-to-top
    /// button at 135°.
    pub fn accent_gradient(&self, angle_deg: f32) -> Gradient {
        Gradient::linear(angle_deg, self.accent, self.accent_alt)
    }

    /// Post-title text gradient: solid ink with a hard sweep-color stop
    /// hiding at the midpoint. Shifting the background position slides
    /// the sweep across the text.
    pub fn sweep_gradient(&self) -> Gradient {
        Gradient {
            angle_deg: 90.0,
            stops: Vec::new(),
        }
        .stop(0.0, self.ink)
        .stop(0.5, self.ink)
        .stop(0.5, self.headline_sweep)
        .stop(0.5001, self.ink)
        .stop(1.0, self.ink)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_accent_matches_hex() {
        assert_eq!(brand::ACCENT, Color::from_hex(0x0066FF));
        assert_eq!(brand::ACCENT_ALT, Color::from_hex(0x00D4AA));
        assert_eq!(brand::INK, Color::from_hex(0x1A1A1A));
    }

    #[test]
    fn test_schemes_swap_ink_and_canvas() {
        let light = Palette::light();
        let dark = Palette::dark();
        assert_eq!(light.ink, dark.canvas);
        assert_ne!(light.headline_sweep, dark.headline_sweep);
    }

    #[test]
    fn test_sweep_gradient_hides_sweep_at_rest() {
        let gradient = Palette::light().sweep_gradient();
        assert_eq!(gradient.stops.len(), 5);
        assert_eq!(gradient.stops[2].color, brand::ACCENT);
        // Hard stop: ink resumes immediately after the sweep color
        assert!(gradient.stops[3].offset - gradient.stops[2].offset < 0.001);
    }
}
