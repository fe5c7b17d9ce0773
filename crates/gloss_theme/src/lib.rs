//! Gloss Theme System
//!
//! Design tokens for the Gloss page enhancer: the brand palette, the shadow
//! ladder, and every motion value (durations, lift distances, layer orders).
//! A [`Theme`] bundles the tokens resolved for one color scheme; the
//! enhancer builds all of its styling from it, so retinting the whole
//! enhancement layer is a matter of constructing a different `Theme`.
//!
//! # Quick Start
//!
//! ```rust
//! use gloss_core::ColorScheme;
//! use gloss_theme::Theme;
//!
//! let theme = Theme::for_scheme(ColorScheme::Dark);
//! assert_eq!(theme.motion.glass_blur, 10.0);
//! assert_ne!(theme.palette.ink, Theme::default().palette.ink);
//! ```
//!
//! All tokens derive serde, so a host can embed a full theme in its own
//! config files.

pub mod tokens;

pub use tokens::{MotionTokens, Palette, ShadowTokens};

use gloss_core::ColorScheme;

/// Token bundle resolved for one color scheme
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub scheme: ColorScheme,
    pub palette: Palette,
    pub shadows: ShadowTokens,
    pub motion: MotionTokens,
}

impl Theme {
    /// Resolve the token set for a scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            palette: Palette::for_scheme(scheme),
            shadows: match scheme {
                ColorScheme::Light => ShadowTokens::light(),
                ColorScheme::Dark => ShadowTokens::dark(),
            },
            motion: MotionTokens::standard(),
        }
    }
}
