//! Typed stylesheets
//!
//! A stylesheet bundles keyframe tracks and selector rules so a host can
//! install them once as a unit (DOM hosts render it to a `<style>` element,
//! the headless surface stores it for lookup). Rules can be scoped to a
//! pseudo state (hover) and to a color scheme.

use crate::keyframe::Keyframes;
use crate::selector::Selector;
use crate::style::StylePatch;
use crate::visual::ColorScheme;

/// Interaction states a rule can be scoped to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PseudoState {
    Hover,
}

/// One selector rule in a stylesheet
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRule {
    pub selector: Selector,
    /// Interaction state the rule applies in; `None` means always
    pub pseudo: Option<PseudoState>,
    /// Scheme the rule applies under; `None` means both
    pub scheme: Option<ColorScheme>,
    pub patch: StylePatch,
}

/// A bundle of keyframe tracks and selector rules
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    pub keyframes: Vec<Keyframes>,
    pub rules: Vec<StyleRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyframe track
    pub fn keyframes(mut self, track: Keyframes) -> Self {
        self.keyframes.push(track);
        self
    }

    /// Add an unconditional rule
    pub fn rule(mut self, selector: Selector, patch: StylePatch) -> Self {
        self.rules.push(StyleRule {
            selector,
            pseudo: None,
            scheme: None,
            patch,
        });
        self
    }

    /// Add a hover-state rule
    pub fn hover_rule(mut self, selector: Selector, patch: StylePatch) -> Self {
        self.rules.push(StyleRule {
            selector,
            pseudo: Some(PseudoState::Hover),
            scheme: None,
            patch,
        });
        self
    }

    /// Add a rule scoped to one color scheme
    pub fn scheme_rule(
        mut self,
        scheme: ColorScheme,
        selector: Selector,
        patch: StylePatch,
    ) -> Self {
        self.rules.push(StyleRule {
            selector,
            pseudo: None,
            scheme: Some(scheme),
            patch,
        });
        self
    }

    /// Look up a keyframe track by name
    pub fn keyframes_named(&self, name: &str) -> Option<&Keyframes> {
        self.keyframes.iter().find(|k| k.name == name)
    }

    /// Rules whose selector text matches exactly
    pub fn rules_for(&self, selector: &Selector) -> Vec<&StyleRule> {
        self.rules
            .iter()
            .filter(|r| &r.selector == selector)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty() && self.rules.is_empty()
    }
}
