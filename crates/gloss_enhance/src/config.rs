//! Enhancer configuration (TOML-loadable, immutable once built)
//!
//! [`EnhanceConfig`] captures everything tunable about a run: which
//! enhancements are active, the scheme preference, the numeric tunables,
//! and the selector lists that tie routines to page markup. The value is
//! handed to [`Enhancer::new`](crate::Enhancer::new) and never mutated
//! afterwards; to change settings, build a new config and a new enhancer.
//!
//! An empty TOML document parses to [`EnhanceConfig::default`], so hosts
//! can ship a config file that only names the deviations:
//!
//! ```toml
//! back_to_top_threshold = 450.0
//! headline_target = "#site-subtitle"
//!
//! [features]
//! parallax = false
//! ```

use gloss_core::Selector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error building an [`EnhanceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document did not parse or did not match the schema.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// On/off switch per enhancement routine. Everything defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureSet {
    /// Install the injected base stylesheet (keyframes, link/title rules).
    pub base_styles: bool,
    /// Frosted-glass treatment for card-like containers.
    pub glass: bool,
    /// Pointer lift/settle on cards.
    pub card_hover: bool,
    /// Top-of-page reading progress bar.
    pub progress_bar: bool,
    /// Floating back-to-top button.
    pub back_to_top: bool,
    /// Smooth scrolling for same-page anchor links.
    pub smooth_anchors: bool,
    /// Scroll-coupled counter-translation of the page header.
    pub parallax: bool,
    /// Gradient text fill on the headline element.
    pub headline_gradient: bool,
    /// One-shot entrance animation on first viewport entry.
    pub reveal: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            base_styles: true,
            glass: true,
            card_hover: true,
            progress_bar: true,
            back_to_top: true,
            smooth_anchors: true,
            parallax: true,
            headline_gradient: true,
            reveal: true,
        }
    }
}

impl FeatureSet {
    /// Every routine disabled. Useful as a base for enabling one at a time.
    pub fn all_off() -> Self {
        Self {
            base_styles: false,
            glass: false,
            card_hover: false,
            progress_bar: false,
            back_to_top: false,
            smooth_anchors: false,
            parallax: false,
            headline_gradient: false,
            reveal: false,
        }
    }
}

/// Color scheme selection. `Auto` defers to the surface at each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

/// Complete enhancer configuration.
///
/// Selector fields are the markup contract: they describe what the host
/// page looks like, not what the enhancer draws. The defaults mirror a
/// card-based blog layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnhanceConfig {
    pub features: FeatureSet,
    pub scheme: SchemePreference,

    /// Scroll offset (px) above which the back-to-top button shows.
    pub back_to_top_threshold: f32,
    /// Multiplier applied to the scroll offset for the header translation.
    pub parallax_factor: f32,
    /// Visibility ratio at which a reveal target counts as entered.
    pub reveal_threshold: f32,

    /// Containers that receive the frosted-glass treatment.
    pub glass_targets: Vec<Selector>,
    /// Containers that lift on pointer enter.
    pub hover_targets: Vec<Selector>,
    /// Elements hidden until first viewport entry.
    pub reveal_targets: Vec<Selector>,
    /// Header element translated against the scroll. First match wins.
    pub parallax_target: Selector,
    /// Headline element for the gradient text fill. First match wins.
    pub headline_target: Selector,
    /// Links handled by the smooth anchor routine.
    pub anchor_target: Selector,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            features: FeatureSet::default(),
            scheme: SchemePreference::Auto,
            back_to_top_threshold: 300.0,
            parallax_factor: 0.5,
            reveal_threshold: 0.1,
            glass_targets: vec![
                Selector::class("card-widget"),
                Selector::class("recent-post-item"),
                Selector::class("card-categories-item"),
                Selector::class("card-tag-cloud-item"),
            ],
            hover_targets: vec![
                Selector::class("recent-post-item"),
                Selector::class("card-categories-item"),
                Selector::class("card-tag-cloud-item"),
            ],
            reveal_targets: vec![
                Selector::class("post-item"),
                Selector::class("card-widget"),
            ],
            parallax_target: Selector::class("page-header"),
            headline_target: Selector::id("subtitle"),
            anchor_target: Selector::tag("a").with_attr_prefix("href", "#"),
        }
    }
}

impl EnhanceConfig {
    /// Parse a TOML document and validate the result.
    ///
    /// Missing fields fall back to their defaults and unknown keys are
    /// ignored, so a host config file can carry sections this crate does
    /// not know about.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.back_to_top_threshold.is_finite() || self.back_to_top_threshold < 0.0 {
            return Err(ConfigError::Invalid {
                field: "back_to_top_threshold",
                reason: "must be a finite, non-negative scroll offset",
            });
        }
        if !self.parallax_factor.is_finite() || self.parallax_factor < 0.0 {
            return Err(ConfigError::Invalid {
                field: "parallax_factor",
                reason: "must be a finite, non-negative multiplier",
            });
        }
        if !self.reveal_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.reveal_threshold)
        {
            return Err(ConfigError::Invalid {
                field: "reveal_threshold",
                reason: "must be a visibility ratio in 0.0..=1.0",
            });
        }
        Ok(())
    }
}
