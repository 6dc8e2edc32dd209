//! Highlighting engine
//!
//! This module provides the range-resolution and rendering pipeline:
//! - Rule evaluation (literals, patterns, intervals, composites)
//! - Overlap resolution (staggered-range filtering)
//! - Boundary building and markup rendering
//! - Summary aggregation and scoring

pub mod catalogue;

mod boundary;
mod highlighter;
mod markup;
mod range;
mod rule;
mod summary;

pub use boundary::{build_boundaries, Boundary, BoundaryKind};
pub use highlighter::{HighlightConfig, Highlighter, Report};
pub use markup::{render_markup, RenderOptions};
pub use range::{remove_staggered, Range};
pub use rule::{evaluate, Rule, MAX_RULE_DEPTH};
pub use summary::{category_display, summarize, CategoryStats, Rating, Summary};
