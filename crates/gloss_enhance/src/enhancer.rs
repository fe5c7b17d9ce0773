//! The page enhancer
//!
//! [`Enhancer`] owns what a run leaves behind on a surface: listener and
//! observer registrations, the two widget nodes, and the injected
//! stylesheets. `run` installs everything, `handle_event` reacts to the
//! occurrences the host forwards, `dispose` takes it all back out.
//!
//! # Quick Start
//!
//! ```rust
//! use gloss_core::{HeadlessSurface, PageNode};
//! use gloss_enhance::{EnhanceConfig, Enhancer};
//!
//! let mut page = HeadlessSurface::new();
//! page.set_extent(2400.0, 800.0);
//! page.insert(PageNode::new("div").class("card-widget"));
//!
//! let mut enhancer = Enhancer::new(EnhanceConfig::default());
//! enhancer.run(&mut page);
//!
//! // The host forwards occurrences as they happen
//! page.scroll_to(400.0);
//! for mut event in page.take_events() {
//!     enhancer.handle_event(&mut page, &mut event);
//! }
//! ```

use gloss_core::{
    ColorScheme, ElementId, Event, EventData, EventKind, EventTarget, ListenerId, ObserverId,
    ScrollBehavior, Surface,
};
use gloss_theme::Theme;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::{EnhanceConfig, SchemePreference};
use crate::routines::{anchors, back_to_top, glass, headline, hover, parallax, progress, reveal};
use crate::stylesheet::{base_stylesheet, BASE_STYLESHEET_ID};

/// Routing tables from one `run`: which elements map to which reactions,
/// and every handle needed to take the run apart again.
#[derive(Debug, Default)]
pub(crate) struct Bindings {
    /// Every listen registration, for teardown
    pub(crate) listeners: Vec<ListenerId>,
    /// Cards reacting to pointer enter/leave
    pub(crate) hover_targets: FxHashSet<ElementId>,
    /// Links whose clicks resolve to smooth scrolls
    pub(crate) anchor_targets: FxHashSet<ElementId>,
    /// Observed reveal targets that have not fired yet
    pub(crate) reveal_pending: FxHashMap<ElementId, ObserverId>,
    /// Header element under parallax, if one matched
    pub(crate) parallax_target: Option<ElementId>,
    /// The progress bar widget
    pub(crate) progress_bar: Option<ElementId>,
    /// The back-to-top widget
    pub(crate) back_to_top: Option<ElementId>,
}

impl Bindings {
    /// Release every surface registration this run made. Widgets and
    /// stylesheets survive; they are found by id on the next run.
    fn release(&self, surface: &mut impl Surface) {
        for &listener in &self.listeners {
            surface.unlisten(listener);
        }
        for &observer in self.reveal_pending.values() {
            surface.unobserve(observer);
        }
    }
}

/// Everything a run resolved and registered
#[derive(Debug)]
struct RunState {
    theme: Theme,
    bindings: Bindings,
}

/// The page enhancer. Construct once with a config, `run` against a
/// surface, forward events, `dispose` when done.
#[derive(Debug)]
pub struct Enhancer {
    config: EnhanceConfig,
    state: Option<RunState>,
}

impl Enhancer {
    pub fn new(config: EnhanceConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// The configuration this enhancer was built with
    pub fn config(&self) -> &EnhanceConfig {
        &self.config
    }

    /// Whether a run's registrations are currently live
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Install every enabled enhancement on the surface.
    ///
    /// Also the re-init entry point: a second `run` first releases the
    /// previous run's registrations, then installs afresh against the
    /// current page content. Widgets are found by their well-known ids
    /// rather than recreated, and stylesheets are replaced by id, so
    /// re-running never stacks duplicates.
    pub fn run<S: Surface>(&mut self, surface: &mut S) {
        if let Some(previous) = self.state.take() {
            tracing::debug!("re-run: releasing previous registrations");
            previous.bindings.release(surface);
        }

        let scheme = match self.config.scheme {
            SchemePreference::Auto => surface.preferred_scheme(),
            SchemePreference::Light => ColorScheme::Light,
            SchemePreference::Dark => ColorScheme::Dark,
        };
        let theme = Theme::for_scheme(scheme);
        let mut bindings = Bindings::default();

        let features = self.config.features;
        if features.base_styles {
            surface.install_stylesheet(BASE_STYLESHEET_ID, base_stylesheet(&theme));
        }
        if features.glass {
            glass::install(surface, &self.config, &theme);
        }
        if features.card_hover {
            hover::install(surface, &self.config, &mut bindings);
        }
        if features.progress_bar {
            progress::install(surface, &theme, &mut bindings);
        }
        if features.back_to_top {
            back_to_top::install(surface, &theme, &mut bindings);
        }
        if features.smooth_anchors {
            anchors::install(surface, &self.config, &mut bindings);
        }
        if features.parallax {
            parallax::install(surface, &self.config, &mut bindings);
        }
        if features.headline_gradient {
            headline::install(surface, &self.config, &theme);
        }
        if features.reveal {
            reveal::install(surface, &self.config, &theme, &mut bindings);
        }

        tracing::debug!(
            "run complete: {:?} scheme, {} listeners, {} observed",
            scheme,
            bindings.listeners.len(),
            bindings.reveal_pending.len()
        );
        self.state = Some(RunState { theme, bindings });
    }

    /// React to one forwarded occurrence. Events nothing is bound to are
    /// ignored; before `run` this is a no-op.
    pub fn handle_event<S: Surface>(&mut self, surface: &mut S, event: &mut Event) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let config = &self.config;
        let RunState { theme, bindings } = state;

        match (event.kind, event.target) {
            (EventKind::PointerEnter, EventTarget::Element(el)) => {
                if bindings.hover_targets.contains(&el) {
                    surface.set_style(el, hover::raised(theme));
                }
            }
            (EventKind::PointerLeave, EventTarget::Element(el)) => {
                if bindings.hover_targets.contains(&el) {
                    surface.set_style(el, hover::rest(theme));
                }
            }
            (EventKind::Click, EventTarget::Element(el)) => {
                if bindings.anchor_targets.contains(&el) {
                    // Suppressed even when the fragment resolves to nothing
                    event.prevent_default();
                    anchors::follow(surface, el);
                } else if bindings.back_to_top == Some(el) {
                    surface.scroll_to_top(ScrollBehavior::Smooth);
                }
            }
            (EventKind::Scroll, EventTarget::Page) => {
                let EventData::Scroll { offset } = event.data else {
                    return;
                };
                // Heights come from the surface, the offset from the event
                let mut metrics = surface.metrics();
                metrics.scroll_offset = offset;

                if let Some(bar) = bindings.progress_bar {
                    progress::update(surface, bar, &metrics);
                }
                if let Some(button) = bindings.back_to_top {
                    back_to_top::update(surface, button, offset, config.back_to_top_threshold);
                }
                if let Some(header) = bindings.parallax_target {
                    parallax::update(surface, header, offset, config.parallax_factor);
                }
            }
            (EventKind::Visibility, EventTarget::Element(el)) => {
                let EventData::Visibility { ratio } = event.data else {
                    return;
                };
                if ratio < config.reveal_threshold {
                    return;
                }
                // At most once per element per run: the binding goes away
                // with the observation
                if let Some(observer) = bindings.reveal_pending.remove(&el) {
                    surface.set_style(el, reveal::entrance(theme));
                    surface.unobserve(observer);
                }
            }
            _ => {}
        }
    }

    /// Undo the current run: release registrations, remove the widgets
    /// and the injected stylesheets. The enhancer can `run` again after.
    pub fn dispose<S: Surface>(&mut self, surface: &mut S) {
        let Some(state) = self.state.take() else {
            return;
        };
        state.bindings.release(surface);

        if let Some(bar) = state.bindings.progress_bar {
            surface.remove_element(bar);
        }
        if let Some(button) = state.bindings.back_to_top {
            surface.remove_element(button);
        }
        if self.config.features.base_styles {
            surface.remove_stylesheet(BASE_STYLESHEET_ID);
        }
        if self.config.features.reveal {
            surface.remove_stylesheet(reveal::REVEAL_STYLESHEET_ID);
        }
        tracing::debug!("disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_core::{HeadlessSurface, PageNode};

    #[test]
    fn test_handle_event_before_run_is_ignored() {
        let mut page = HeadlessSurface::new();
        let el = page.insert(PageNode::new("div").class("recent-post-item"));

        let mut enhancer = Enhancer::new(EnhanceConfig::default());
        let mut event = Event::pointer_enter(el);
        enhancer.handle_event(&mut page, &mut event);

        assert!(page.style(el).is_none());
        assert!(!enhancer.is_initialized());
    }

    #[test]
    fn test_dispose_without_run_is_a_no_op() {
        let mut page = HeadlessSurface::new();
        let mut enhancer = Enhancer::new(EnhanceConfig::default());
        enhancer.dispose(&mut page);
        assert!(!enhancer.is_initialized());
    }

    #[test]
    fn test_scheme_preference_overrides_surface() {
        let mut page = HeadlessSurface::new();
        page.set_preferred_scheme(ColorScheme::Dark);

        let mut config = EnhanceConfig::default();
        config.scheme = SchemePreference::Light;
        let mut enhancer = Enhancer::new(config);
        enhancer.run(&mut page);

        let state = enhancer.state.as_ref().unwrap();
        assert_eq!(state.theme.scheme, ColorScheme::Light);
    }

    #[test]
    fn test_auto_scheme_asks_the_surface() {
        let mut page = HeadlessSurface::new();
        page.set_preferred_scheme(ColorScheme::Dark);

        let mut enhancer = Enhancer::new(EnhanceConfig::default());
        enhancer.run(&mut page);

        let state = enhancer.state.as_ref().unwrap();
        assert_eq!(state.theme.scheme, ColorScheme::Dark);
    }
}
