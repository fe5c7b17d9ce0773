//! Easing functions
//!
//! The five stylesheet timing keywords plus arbitrary cubic beziers. The
//! keywords evaluate through their canonical bezier control points, so
//! `Easing::Ease.apply(t)` matches what a rendering engine would produce
//! for `ease`.

/// Timing function for transitions and keyframe animations
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::Ease => bezier_ease(t, 0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

/// Cubic bezier easing with endpoints fixed at (0,0) and (1,1).
///
/// Solves x(p) == t by bisection; 24 halvings land well below the
/// precision any style write can show. Endpoints are exact.
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut p = x;
    for _ in 0..24 {
        if bezier_component(p, x1, x2) < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_component(p, y1, y2) as f32
}

/// Evaluate one bezier component at parameter `p` (Horner form)
#[inline]
fn bezier_component(p: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * p + b) * p + c) * p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.3, 0.7, 0.6, 0.2),
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.75), 0.75);
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // ease-out covers more than half the distance by the halfway mark
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        // and ease-in covers less
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = Easing::Ease.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "not monotonic at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_ease_in_out_symmetric_midpoint() {
        let v = Easing::EaseInOut.apply(0.5);
        assert!((v - 0.5).abs() < 1e-3);
    }
}
