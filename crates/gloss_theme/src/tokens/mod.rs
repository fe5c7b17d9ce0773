//! Design tokens for the enhancement layer
//!
//! Tokens are the atomic values the enhancer styles with:
//! - Palette (accents, ink, canvas)
//! - Shadows
//! - Motion (durations, distances, layer orders)

mod motion;
mod palette;
mod shadow;

pub use motion::*;
pub use palette::*;
pub use shadow::*;
