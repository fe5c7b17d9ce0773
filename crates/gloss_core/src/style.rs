//! Style patches
//!
//! Provides `StylePatch` - a consistent schema for the visual properties
//! this crate writes to page elements. All properties are optional: when
//! merging patches, only set properties override. This enables
//! state-specific styling (hover enter/leave, show/hide) where each patch
//! carries only the properties that change.
//!
//! # Example
//!
//! ```
//! use gloss_core::{Color, Shadow, StylePatch, Transform};
//!
//! let raised = StylePatch::new()
//!     .transform(Transform::translate(0.0, -4.0).with_scale(1.02))
//!     .shadow(Shadow::new(0.0, 12.0, 24.0, 0.0, Color::rgba(0.0, 0.4, 1.0, 0.15)));
//!
//! let rest = StylePatch::new()
//!     .transform(Transform::IDENTITY)
//!     .shadow(Shadow::none());
//!
//! assert_eq!(rest.merge(&raised).transform, raised.transform);
//! ```

use crate::easing::Easing;
use crate::keyframe::MotionProps;
use crate::visual::{Brush, Dimension, Pin, Shadow, Transform};

/// Which property a transition animates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransitionProperty {
    /// Transition every animatable property
    #[default]
    All,
    /// Transition width only
    Width,
    /// Transition the background shift only (gradient sweeps)
    BackgroundShift,
}

/// A property transition (CSS `transition: property duration easing`)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration_ms: f32,
    pub easing: Easing,
}

impl Transition {
    pub fn all(duration_ms: f32, easing: Easing) -> Self {
        Self {
            property: TransitionProperty::All,
            duration_ms,
            easing,
        }
    }

    pub fn width(duration_ms: f32, easing: Easing) -> Self {
        Self {
            property: TransitionProperty::Width,
            duration_ms,
            easing,
        }
    }

    pub fn background_shift(duration_ms: f32, easing: Easing) -> Self {
        Self {
            property: TransitionProperty::BackgroundShift,
            duration_ms,
            easing,
        }
    }
}

/// How many times an animation plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IterationCount {
    Finite(u32),
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::Finite(1)
    }
}

/// Whether animated values persist outside the animation's active phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FillMode {
    #[default]
    None,
    /// Retain the final frame's values after the animation ends
    Forwards,
    /// Apply the first frame's values during the delay phase
    Backwards,
    Both,
}

/// Reference to a named keyframe track plus its playback parameters
/// (CSS `animation: name duration timing delay iteration-count fill-mode`)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationRef {
    /// Name of the keyframe track (resolved against installed stylesheets)
    pub name: String,
    pub duration_ms: f32,
    pub easing: Easing,
    pub delay_ms: f32,
    pub iterations: IterationCount,
    pub fill: FillMode,
}

impl AnimationRef {
    pub fn new(name: impl Into<String>, duration_ms: f32) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            easing: Easing::default(),
            delay_ms: 0.0,
            iterations: IterationCount::default(),
            fill: FillMode::default(),
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay_ms(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn iterations(mut self, iterations: IterationCount) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn infinite(mut self) -> Self {
        self.iterations = IterationCount::Infinite;
        self
    }

    pub fn fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }
}

/// Visual style properties writable on a page element
///
/// All properties are optional - when merging patches, only set properties
/// will override what is already there.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StylePatch {
    /// Background brush (solid color or gradient)
    pub background: Option<Brush>,
    /// Background position shift in percent (slides an oversized gradient)
    pub background_shift: Option<f32>,
    /// Text fill brush (gradients render as clipped-to-text)
    pub text_fill: Option<Brush>,
    /// Text underline on/off
    pub text_underline: Option<bool>,
    /// Underline brush, when something richer than the text color is wanted
    pub underline_brush: Option<Brush>,
    /// Font weight (CSS numeric scale, 400 = normal, 700 = bold)
    pub font_weight: Option<u16>,
    /// Backdrop blur radius in pixels (frosted-glass effect)
    pub backdrop_blur: Option<f32>,
    /// Drop shadow
    pub shadow: Option<Shadow>,
    /// Transform (translate + scale)
    pub transform: Option<Transform>,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: Option<f32>,
    /// Visibility toggle (false hides without removing)
    pub visible: Option<bool>,
    /// Corner radius in pixels
    pub corner_radius: Option<f32>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    /// Fixed-position pinning to viewport edges
    pub pin: Option<Pin>,
    /// Stacking order
    pub z_index: Option<i32>,
    /// Property transition applied to subsequent changes
    pub transition: Option<Transition>,
    /// Keyframe animation playback
    pub animation: Option<AnimationRef>,
}

impl StylePatch {
    /// Create a new empty patch
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Paint
    // =========================================================================

    /// Set the background brush
    pub fn background(mut self, brush: impl Into<Brush>) -> Self {
        self.background = Some(brush.into());
        self
    }

    /// Set the background position shift
    pub fn background_shift(mut self, percent: f32) -> Self {
        self.background_shift = Some(percent);
        self
    }

    /// Set the text fill brush
    pub fn text_fill(mut self, brush: impl Into<Brush>) -> Self {
        self.text_fill = Some(brush.into());
        self
    }

    /// Toggle text underline
    pub fn text_underline(mut self, on: bool) -> Self {
        self.text_underline = Some(on);
        self
    }

    /// Set the underline brush
    pub fn underline_brush(mut self, brush: impl Into<Brush>) -> Self {
        self.underline_brush = Some(brush.into());
        self
    }

    /// Set font weight
    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Set backdrop blur radius
    pub fn backdrop_blur(mut self, radius: f32) -> Self {
        self.backdrop_blur = Some(radius);
        self
    }

    /// Set the drop shadow
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Set the transform
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Set opacity
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set visibility
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Set corner radius
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Round into a circle (or pill) shape
    pub fn circular(self, diameter: f32) -> Self {
        self.width(Dimension::Px(diameter))
            .height(Dimension::Px(diameter))
            .corner_radius(diameter / 2.0)
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    /// Pin to viewport edges (fixed positioning)
    pub fn pin(mut self, pin: Pin) -> Self {
        self.pin = Some(pin);
        self
    }

    /// Set stacking order
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }

    // =========================================================================
    // Motion
    // =========================================================================

    /// Set the property transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Set the keyframe animation
    pub fn animation(mut self, animation: AnimationRef) -> Self {
        self.animation = Some(animation);
        self
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Merge another patch over this one; set properties of `other` win
    pub fn merge(&self, other: &StylePatch) -> StylePatch {
        StylePatch {
            background: other.background.clone().or_else(|| self.background.clone()),
            background_shift: other.background_shift.or(self.background_shift),
            text_fill: other.text_fill.clone().or_else(|| self.text_fill.clone()),
            text_underline: other.text_underline.or(self.text_underline),
            underline_brush: other
                .underline_brush
                .clone()
                .or_else(|| self.underline_brush.clone()),
            font_weight: other.font_weight.or(self.font_weight),
            backdrop_blur: other.backdrop_blur.or(self.backdrop_blur),
            shadow: other.shadow.or(self.shadow),
            transform: other.transform.or(self.transform),
            opacity: other.opacity.or(self.opacity),
            visible: other.visible.or(self.visible),
            corner_radius: other.corner_radius.or(self.corner_radius),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            pin: other.pin.or(self.pin),
            z_index: other.z_index.or(self.z_index),
            transition: other.transition.or(self.transition),
            animation: other.animation.clone().or_else(|| self.animation.clone()),
        }
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        self == &StylePatch::default()
    }
}

impl From<MotionProps> for StylePatch {
    /// Resolve sampled keyframe state into a patch. Unset motion leaves
    /// the patch side unset too.
    fn from(props: MotionProps) -> Self {
        let mut patch = StylePatch::new();
        patch.opacity = props.opacity;
        if props.translate_x.is_some() || props.translate_y.is_some() || props.scale.is_some() {
            let scale = props.scale.unwrap_or(1.0);
            patch.transform = Some(Transform {
                translate_x: props.translate_x.unwrap_or(0.0),
                translate_y: props.translate_y.unwrap_or(0.0),
                scale_x: scale,
                scale_y: scale,
            });
        }
        patch.width = props.width_percent.map(Dimension::Percent);
        patch.background_shift = props.background_shift;
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::Color;

    #[test]
    fn test_empty_patch() {
        assert!(StylePatch::new().is_empty());
        assert!(!StylePatch::new().opacity(1.0).is_empty());
    }

    #[test]
    fn test_merge_set_fields_win() {
        let base = StylePatch::new()
            .opacity(1.0)
            .shadow(Shadow::none())
            .backdrop_blur(10.0);
        let over = StylePatch::new().opacity(0.5);

        let merged = base.merge(&over);
        assert_eq!(merged.opacity, Some(0.5));
        assert_eq!(merged.shadow, Some(Shadow::none()));
        assert_eq!(merged.backdrop_blur, Some(10.0));
    }

    #[test]
    fn test_merge_unset_fields_pass_through() {
        let base = StylePatch::new().z_index(999);
        let merged = base.merge(&StylePatch::new());
        assert_eq!(merged.z_index, Some(999));
    }

    #[test]
    fn test_circular_sets_radius_from_diameter() {
        let patch = StylePatch::new().circular(50.0);
        assert_eq!(patch.width, Some(Dimension::Px(50.0)));
        assert_eq!(patch.height, Some(Dimension::Px(50.0)));
        assert_eq!(patch.corner_radius, Some(25.0));
    }

    #[test]
    fn test_animation_ref_builder() {
        let anim = AnimationRef::new("float", 3000.0)
            .easing(Easing::EaseInOut)
            .infinite();
        assert_eq!(anim.iterations, IterationCount::Infinite);
        assert_eq!(anim.fill, FillMode::None);
    }

    #[test]
    fn test_patch_from_motion_props() {
        let props = MotionProps::new().opacity(0.25).translate_y(30.0);
        let patch = StylePatch::from(props);
        assert_eq!(patch.opacity, Some(0.25));
        let transform = patch.transform.unwrap();
        assert_eq!(transform.translate_y, 30.0);
        assert_eq!(transform.scale_x, 1.0);
        assert!(patch.background.is_none());
    }

    #[test]
    fn test_patch_from_empty_motion_props_is_empty() {
        assert!(StylePatch::from(MotionProps::default()).is_empty());
    }

    #[test]
    fn test_background_accepts_color() {
        let patch = StylePatch::new().background(Color::from_hex(0x0066FF));
        assert!(matches!(patch.background, Some(Brush::Solid(_))));
    }
}
