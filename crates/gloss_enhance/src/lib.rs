//! Gloss Page Enhancer
//!
//! Progressive visual enhancement for blog-shaped pages: frosted-glass
//! cards, hover lift, a reading progress bar, a back-to-top button, smooth
//! anchor scrolling, header parallax, gradient headlines, and one-shot
//! entrance reveals. Every enhancement is independently togglable through
//! [`EnhanceConfig`] and decorates whatever [`Surface`](gloss_core::Surface)
//! the host provides - a DOM binding in production, the headless surface in
//! tests.
//!
//! # Quick Start
//!
//! ```rust
//! use gloss_core::{HeadlessSurface, PageNode};
//! use gloss_enhance::{EnhanceConfig, Enhancer};
//!
//! // A minimal blog-shaped page
//! let mut page = HeadlessSurface::new();
//! page.set_extent(2400.0, 800.0);
//! let card = page.insert(PageNode::new("div").class("card-widget"));
//!
//! let mut enhancer = Enhancer::new(EnhanceConfig::default());
//! enhancer.run(&mut page);
//!
//! // The card got its glass treatment
//! assert_eq!(page.style(card).unwrap().backdrop_blur, Some(10.0));
//!
//! // Scroll far enough and the back-to-top button shows
//! page.scroll_to(400.0);
//! for mut event in page.take_events() {
//!     enhancer.handle_event(&mut page, &mut event);
//! }
//! let button = page.find_by_id(gloss_enhance::BACK_TO_TOP_ID).unwrap();
//! assert_eq!(page.style(button).unwrap().opacity, Some(1.0));
//! ```
//!
//! # Event delivery
//!
//! The enhancer never polls. `run` registers interest (listeners and
//! visibility observers) on the surface; the host forwards each matching
//! occurrence once to [`Enhancer::handle_event`]. `dispose` releases every
//! registration and removes the owned widgets and stylesheets.

pub mod config;
pub mod enhancer;
pub mod stylesheet;

mod routines;

pub use config::{ConfigError, EnhanceConfig, FeatureSet, SchemePreference};
pub use enhancer::Enhancer;
pub use routines::{BACK_TO_TOP_ID, PROGRESS_BAR_ID, REVEAL_KEYFRAMES, REVEAL_STYLESHEET_ID};
pub use stylesheet::{
    base_stylesheet, BASE_STYLESHEET_ID, CURSOR_BLINK_KEYFRAMES, FLOAT_KEYFRAMES, PULSE_KEYFRAMES,
    SHIMMER_KEYFRAMES, UNDERLINE_EXPAND_KEYFRAMES,
};
