//! spamlight — rule-driven spam-phrase highlighting
//!
//! Evaluates a configurable set of rules (literals, regex patterns,
//! fixed intervals, composites) against free-form text, resolves
//! overlapping matches into a cleanly nested set, and renders the text
//! as HTML-safe markup with `<mark>` tags plus a per-category summary
//! and heuristic spam score.
//!
//! ```
//! use spamlight::highlight::{HighlightConfig, Highlighter, Rule};
//!
//! let rule = Rule::categorized(Rule::literal("act now"), "urgency", "Act now");
//! let highlighter = Highlighter::new(HighlightConfig::new(rule)).unwrap();
//! let report = highlighter.update("Act now, please").unwrap();
//! assert_eq!(
//!     report.markup,
//!     "<mark class=\"category-urgency\">Act now</mark>, please"
//! );
//! ```

pub mod config;
pub mod error;
pub mod highlight;

pub use error::{HighlightError, Result};
pub use highlight::{HighlightConfig, Highlighter, Range, Report, Rule};
