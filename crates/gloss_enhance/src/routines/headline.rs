//! Headline gradient text

use gloss_core::{StylePatch, Surface};
use gloss_theme::Theme;

use crate::config::EnhanceConfig;

/// Fill the first headline target with the accent gradient and bold it.
/// One-time patch, nothing to bind.
pub(crate) fn install(surface: &mut impl Surface, config: &EnhanceConfig, theme: &Theme) {
    let Some(&headline) = surface.query(&config.headline_target).first() else {
        return;
    };
    surface.set_style(
        headline,
        StylePatch::new()
            .text_fill(theme.palette.accent_gradient(90.0))
            .font_weight(700),
    );
}
