//! Visual primitives
//!
//! The value types style patches are made of: colors, gradients, brushes,
//! shadows, transforms, and the measurement helpers used when positioning
//! created widgets.

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a 24-bit `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gradients and Brushes
// ─────────────────────────────────────────────────────────────────────────────

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position along the gradient axis (0.0 to 1.0)
    pub offset: f32,
    pub color: Color,
}

/// A linear gradient described the way stylesheets describe them:
/// an axis angle in degrees (0 = up, 90 = left-to-right) plus color stops.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    pub angle_deg: f32,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Two-stop gradient from `from` to `to` along the given angle
    pub fn linear(angle_deg: f32, from: Color, to: Color) -> Self {
        Self {
            angle_deg,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

/// Brush for filling backgrounds, text, and underlines
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shadow
// ─────────────────────────────────────────────────────────────────────────────

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Linear interpolation between two shadows
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            offset_x: from.offset_x + (to.offset_x - from.offset_x) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
            blur: from.blur + (to.blur - from.blur) * t,
            spread: from.spread + (to.spread - from.spread) * t,
            color: Color::lerp(&from.color, &to.color, t),
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transform
// ─────────────────────────────────────────────────────────────────────────────

/// Decomposed 2D transform: translation plus scale.
///
/// Kept decomposed (rather than a matrix) because style patches and
/// keyframes interpolate the components independently.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub const fn scale(factor: f32) -> Self {
        Self::scale_xy(factor, factor)
    }

    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: sx,
            scale_y: sy,
        }
    }

    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    pub fn with_scale(mut self, factor: f32) -> Self {
        self.scale_x = factor;
        self.scale_y = factor;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Linear interpolation between two transforms
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            translate_x: from.translate_x + (to.translate_x - from.translate_x) * t,
            translate_y: from.translate_y + (to.translate_y - from.translate_y) * t,
            scale_x: from.scale_x + (to.scale_x - from.scale_x) * t,
            scale_y: from.scale_y + (to.scale_y - from.scale_y) * t,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Measurement and positioning
// ─────────────────────────────────────────────────────────────────────────────

/// A length that is either absolute or relative to the containing extent
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Px(f32),
    Percent(f32),
}

/// Viewport-fixed positioning: offsets from the edges that are set.
///
/// Mirrors `position: fixed` plus edge insets. A widget pinned with
/// `Pin::bottom_right(30.0, 30.0)` stays put while the page scrolls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pin {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl Pin {
    pub fn top_left(top: f32, left: f32) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            ..Default::default()
        }
    }

    pub fn bottom_right(bottom: f32, right: f32) -> Self {
        Self {
            bottom: Some(bottom),
            right: Some(right),
            ..Default::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color scheme
// ─────────────────────────────────────────────────────────────────────────────

/// Light or dark rendering scheme, as reported by the host page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let accent = Color::from_hex(0x0066FF);
        assert!((accent.r - 0.0).abs() < 1e-6);
        assert!((accent.g - 102.0 / 255.0).abs() < 1e-6);
        assert!((accent.b - 1.0).abs() < 1e-6);
        assert_eq!(accent.a, 1.0);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let from = Color::BLACK;
        let to = Color::WHITE;
        assert_eq!(Color::lerp(&from, &to, 0.0), from);
        assert_eq!(Color::lerp(&from, &to, 1.0), to);
    }

    #[test]
    fn test_transform_identity() {
        assert!(Transform::IDENTITY.is_identity());
        assert!(!Transform::translate(0.0, -4.0).is_identity());

        let lifted = Transform::translate(0.0, -4.0).with_scale(1.02);
        assert_eq!(lifted.translate_y, -4.0);
        assert_eq!(lifted.scale_x, 1.02);
    }

    #[test]
    fn test_shadow_lerp_midpoint() {
        let from = Shadow::none();
        let to = Shadow::new(0.0, 12.0, 24.0, 0.0, Color::BLACK.with_alpha(0.2));
        let mid = Shadow::lerp(&from, &to, 0.5);
        assert_eq!(mid.offset_y, 6.0);
        assert_eq!(mid.blur, 12.0);
        assert!((mid.color.a - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_linear_has_two_stops() {
        let g = Gradient::linear(90.0, Color::from_hex(0x0066FF), Color::from_hex(0x00D4AA));
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].offset, 0.0);
        assert_eq!(g.stops[1].offset, 1.0);
    }
}
