//! Gloss Core Vocabulary
//!
//! This crate provides the foundational primitives for the Gloss page
//! enhancer:
//!
//! - **Visual values**: colors, gradients, shadows, transforms
//! - **Style patches**: all-optional property sets with merge semantics
//! - **Typed stylesheets**: keyframe tracks plus selector rules
//! - **The surface seam**: the [`Surface`] trait hosts implement, and a
//!   ready-made in-memory [`HeadlessSurface`] for tests and dry-runs
//!
//! # Example
//!
//! ```rust
//! use gloss_core::{
//!     HeadlessSurface, PageNode, Selector, StylePatch, Surface, Transform,
//! };
//!
//! let mut page = HeadlessSurface::new();
//! let card = page.insert(PageNode::new("div").class("card-widget"));
//!
//! // Find it the way an enhancer would, then raise it
//! let found = page.query(&".card-widget".parse::<Selector>().unwrap());
//! assert_eq!(found, vec![card]);
//!
//! page.set_style(card, StylePatch::new().transform(Transform::translate(0.0, -4.0)));
//! assert_eq!(page.style(card).unwrap().transform.unwrap().translate_y, -4.0);
//! ```

pub mod easing;
pub mod events;
pub mod headless;
pub mod keyframe;
pub mod node;
pub mod selector;
pub mod style;
pub mod stylesheet;
pub mod surface;
pub mod visual;

pub use easing::Easing;
pub use events::{Event, EventData, EventKind, EventTarget};
pub use headless::{HeadlessSurface, ScrollCommand};
pub use keyframe::{Frame, Keyframes, MotionProps};
pub use node::PageNode;
pub use selector::{Selector, SelectorParseError};
pub use style::{
    AnimationRef, FillMode, IterationCount, StylePatch, Transition, TransitionProperty,
};
pub use stylesheet::{PseudoState, StyleRule, Stylesheet};
pub use surface::{
    ElementId, ElementIdGenerator, ListenerId, ObserverId, PageMetrics, ScrollBehavior, Surface,
};
pub use visual::{
    Brush, Color, ColorScheme, Dimension, Gradient, GradientStop, Pin, Shadow, Transform,
};
