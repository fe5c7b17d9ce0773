//! Motion tokens for the enhancement layer
//!
//! Durations, distances, and layer orders. These are scheme-independent.

use gloss_core::Easing;

/// Motion and geometry tokens
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionTokens {
    /// Backdrop blur radius for glass surfaces (px)
    pub glass_blur: f32,

    /// How far a card rises on hover (px)
    pub hover_lift: f32,
    /// How much a card grows on hover
    pub hover_scale: f32,
    /// Hover enter/leave transition duration (ms)
    pub hover_transition_ms: f32,

    /// Progress bar thickness (px)
    pub bar_height: f32,
    /// Progress bar stacking order
    pub bar_layer: i32,
    /// Progress bar width transition duration (ms)
    pub progress_transition_ms: f32,

    /// Back-to-top button diameter (px)
    pub button_size: f32,
    /// Back-to-top inset from the bottom-right corner (px)
    pub button_inset: f32,
    /// Back-to-top stacking order
    pub button_layer: i32,
    /// Back-to-top show/hide transition duration (ms)
    pub button_transition_ms: f32,

    /// Entrance animation start offset below final position (px)
    pub reveal_offset: f32,
    /// Entrance animation duration (ms)
    pub reveal_duration_ms: f32,
    /// Entrance animation easing
    pub reveal_easing: Easing,

    /// Headline gradient sweep duration (ms)
    pub headline_sweep_ms: f32,

    /// Link hover underline expansion duration (ms)
    pub underline_duration_ms: f32,

    /// Typing cursor blink period (ms)
    pub cursor_blink_ms: f32,
}

impl MotionTokens {
    pub fn standard() -> Self {
        Self {
            glass_blur: 10.0,
            hover_lift: 4.0,
            hover_scale: 1.02,
            hover_transition_ms: 300.0,
            bar_height: 3.0,
            bar_layer: 9999,
            progress_transition_ms: 100.0,
            button_size: 50.0,
            button_inset: 30.0,
            button_layer: 999,
            button_transition_ms: 300.0,
            reveal_offset: 30.0,
            reveal_duration_ms: 600.0,
            reveal_easing: Easing::EaseOut,
            headline_sweep_ms: 500.0,
            underline_duration_ms: 300.0,
            cursor_blink_ms: 1000.0,
        }
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self::standard()
    }
}
