//! Frosted-glass card surfaces

use gloss_core::{StylePatch, Surface};
use gloss_theme::Theme;

use crate::config::EnhanceConfig;

/// Blur the backdrop of every glass target and settle it on the glass
/// shadow. Pure decoration, no listeners.
pub(crate) fn install(surface: &mut impl Surface, config: &EnhanceConfig, theme: &Theme) {
    let patch = StylePatch::new()
        .backdrop_blur(theme.motion.glass_blur)
        .shadow(theme.shadows.glass);

    let mut decorated = 0usize;
    for selector in &config.glass_targets {
        for el in surface.query(selector) {
            surface.set_style(el, patch.clone());
            decorated += 1;
        }
    }
    tracing::debug!("glass: decorated {decorated} containers");
}
