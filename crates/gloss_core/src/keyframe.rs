//! Keyframe sequences
//!
//! Named keyframe tracks for the animations a stylesheet declares. The
//! enhancer never ticks these itself (a rendering host plays them), but
//! `Keyframes::sample` lets any surface (notably the headless one) resolve
//! the state an animation settles into, and lets tests assert intermediate
//! values.

use crate::easing::Easing;

/// Properties a keyframe track can animate.
///
/// All fields are optional: a frame only constrains the properties it
/// sets, and interpolation carries unset sides through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionProps {
    /// Opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
    /// Translation X in pixels
    pub translate_x: Option<f32>,
    /// Translation Y in pixels
    pub translate_y: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
    /// Width as a percentage of the containing extent
    pub width_percent: Option<f32>,
    /// Background position shift in percent (shimmer-style sweeps)
    pub background_shift: Option<f32>,
}

impl MotionProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn translate_x(mut self, px: f32) -> Self {
        self.translate_x = Some(px);
        self
    }

    pub fn translate_y(mut self, px: f32) -> Self {
        self.translate_y = Some(px);
        self
    }

    pub fn scale(mut self, factor: f32) -> Self {
        self.scale = Some(factor);
        self
    }

    pub fn width_percent(mut self, percent: f32) -> Self {
        self.width_percent = Some(percent);
        self
    }

    pub fn background_shift(mut self, percent: f32) -> Self {
        self.background_shift = Some(percent);
        self
    }

    /// Interpolate between two property sets
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_opt(self.opacity, other.opacity, t),
            translate_x: lerp_opt(self.translate_x, other.translate_x, t),
            translate_y: lerp_opt(self.translate_y, other.translate_y, t),
            scale: lerp_opt(self.scale, other.scale, t),
            width_percent: lerp_opt(self.width_percent, other.width_percent, t),
            background_shift: lerp_opt(self.background_shift, other.background_shift, t),
        }
    }
}

/// Interpolate optional values; a side that is unset adopts the other
fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// A single frame in a keyframe track
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Position along the track (0.0 to 1.0)
    pub at: f32,
    /// Properties at this frame
    pub props: MotionProps,
    /// Easing used when transitioning TO this frame
    pub easing: Easing,
}

/// A named keyframe track, the typed equivalent of an `@keyframes` block
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframes {
    pub name: String,
    pub frames: Vec<Frame>,
}

impl Keyframes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    /// Add a frame with the default easing
    pub fn frame(self, at: f32, props: MotionProps) -> Self {
        self.frame_with_easing(at, props, Easing::default())
    }

    /// Add a frame with explicit easing (applied transitioning to it)
    pub fn frame_with_easing(mut self, at: f32, props: MotionProps, easing: Easing) -> Self {
        self.frames.push(Frame { at, props, easing });
        // Frames stay sorted by position so sampling can bracket
        self.frames
            .sort_by(|a, b| a.at.partial_cmp(&b.at).unwrap_or(std::cmp::Ordering::Equal));
        self
    }

    /// Sample the track at a progress value (clamped to 0.0..=1.0).
    ///
    /// Finds the bracketing frames, eases the local progress with the
    /// destination frame's easing, and interpolates. An empty track
    /// samples to default (unset) properties.
    pub fn sample(&self, progress: f32) -> MotionProps {
        if self.frames.is_empty() {
            return MotionProps::default();
        }

        let progress = progress.clamp(0.0, 1.0);

        let mut prev = &self.frames[0];
        let mut next = &self.frames[0];
        for frame in &self.frames {
            if frame.at <= progress {
                prev = frame;
            }
            if frame.at >= progress {
                next = frame;
                break;
            }
            next = frame;
        }

        if (next.at - prev.at).abs() < f32::EPSILON {
            return prev.props;
        }

        let local = (progress - prev.at) / (next.at - prev.at);
        let eased = next.easing.apply(local);
        prev.props.lerp(&next.props, eased)
    }

    /// The state the track settles into when played to completion
    pub fn final_props(&self) -> MotionProps {
        self.sample(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide_in() -> Keyframes {
        Keyframes::new("slide-in")
            .frame(0.0, MotionProps::new().opacity(0.0).translate_y(30.0))
            .frame_with_easing(
                1.0,
                MotionProps::new().opacity(1.0).translate_y(0.0),
                Easing::Linear,
            )
    }

    #[test]
    fn test_sample_endpoints() {
        let kf = slide_in();
        let start = kf.sample(0.0);
        assert_eq!(start.opacity, Some(0.0));
        assert_eq!(start.translate_y, Some(30.0));

        let end = kf.sample(1.0);
        assert_eq!(end.opacity, Some(1.0));
        assert_eq!(end.translate_y, Some(0.0));
    }

    #[test]
    fn test_sample_midpoint_linear() {
        let mid = slide_in().sample(0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.translate_y, Some(15.0));
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let kf = slide_in();
        assert_eq!(kf.sample(-1.0), kf.sample(0.0));
        assert_eq!(kf.sample(2.0), kf.sample(1.0));
    }

    #[test]
    fn test_sample_three_frame_track() {
        // float: 0 -> -10 -> 0
        let kf = Keyframes::new("float")
            .frame(0.0, MotionProps::new().translate_y(0.0))
            .frame_with_easing(0.5, MotionProps::new().translate_y(-10.0), Easing::Linear)
            .frame_with_easing(1.0, MotionProps::new().translate_y(0.0), Easing::Linear);

        assert_eq!(kf.sample(0.5).translate_y, Some(-10.0));
        assert_eq!(kf.sample(0.25).translate_y, Some(-5.0));
        assert_eq!(kf.sample(0.75).translate_y, Some(-5.0));
        assert_eq!(kf.final_props().translate_y, Some(0.0));
    }

    #[test]
    fn test_empty_track_samples_default() {
        let kf = Keyframes::new("empty");
        assert_eq!(kf.sample(0.5), MotionProps::default());
    }

    #[test]
    fn test_unset_side_carries_through() {
        let a = MotionProps::new().opacity(0.0);
        let b = MotionProps::new().translate_y(10.0);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.opacity, Some(0.0));
        assert_eq!(mid.translate_y, Some(10.0));
    }

    #[test]
    fn test_frames_sorted_regardless_of_insertion_order() {
        let kf = Keyframes::new("out-of-order")
            .frame_with_easing(1.0, MotionProps::new().opacity(1.0), Easing::Linear)
            .frame(0.0, MotionProps::new().opacity(0.0));
        assert_eq!(kf.frames[0].at, 0.0);
        assert_eq!(kf.sample(0.5).opacity, Some(0.5));
    }
}
