//! Pipeline entry point
//!
//! The `Highlighter` owns a validated configuration and runs the full
//! pipeline on demand: evaluate rules, resolve overlaps, build
//! boundaries, render markup, and aggregate the summary. Each run is a
//! pure function of the current text and the configuration; callers
//! re-run it on every text change and replace the previous report
//! wholesale.

use crate::error::{HighlightError, Result};

use super::boundary;
use super::markup::{self, RenderOptions};
use super::range::{self, Range};
use super::rule::{self, Rule, MAX_RULE_DEPTH};
use super::summary::{self, Summary};

/// Configuration for a highlighter: the rule set plus render options
#[derive(Debug)]
pub struct HighlightConfig {
    /// The rule (usually a `List`) evaluated on every run
    pub highlight: Rule,
    /// Markup rendering options
    pub options: RenderOptions,
}

impl HighlightConfig {
    /// Create a configuration with default render options
    pub fn new(highlight: Rule) -> Self {
        Self {
            highlight,
            options: RenderOptions::default(),
        }
    }
}

/// The complete output of one pipeline run
#[derive(Debug, Clone)]
pub struct Report {
    /// HTML-safe markup reproducing the text with highlight tags
    pub markup: String,
    /// Aggregated category counts, word count, and score
    pub summary: Summary,
    /// The resolved (non-staggered) ranges behind both outputs
    pub ranges: Vec<Range>,
}

/// A validated highlighting pipeline
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Validate the configuration and create a highlighter
    ///
    /// Configuration problems (an inverted interval, a categorized rule
    /// without a category, excessive nesting) are reported here so that
    /// no pipeline runs with a bad rule set.
    pub fn new(config: HighlightConfig) -> Result<Self> {
        validate_rule(&config.highlight, 0)?;
        Ok(Self { config })
    }

    /// Access the active configuration
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Run the full pipeline against the current text
    ///
    /// Runs synchronously to completion; a new report fully supersedes
    /// any previous one. On error the caller keeps its previous report.
    pub fn update(&self, text: &str) -> Result<Report> {
        let ranges = rule::evaluate(text, &self.config.highlight)?;
        let ranges = range::remove_staggered(ranges);
        let boundaries = boundary::build_boundaries(&ranges);
        let markup = markup::render_markup(text, &boundaries, &self.config.options);
        let summary = summary::summarize(text, &ranges);
        Ok(Report {
            markup,
            summary,
            ranges,
        })
    }

}

/// Reject rule shapes that could never evaluate sensibly
fn validate_rule(rule: &Rule, depth: usize) -> Result<()> {
    if depth > MAX_RULE_DEPTH {
        return Err(HighlightError::RuleDepth(MAX_RULE_DEPTH));
    }

    match rule {
        Rule::Literal(_) | Rule::Pattern { .. } => Ok(()),
        // Functions are validated when their computed rule is evaluated
        Rule::Function(_) => Ok(()),
        Rule::Interval(start, end) => {
            if start > end {
                Err(HighlightError::Config(format!(
                    "interval start {} exceeds end {}",
                    start, end
                )))
            } else {
                Ok(())
            }
        }
        Rule::List(rules) => {
            for rule in rules {
                validate_rule(rule, depth + 1)?;
            }
            Ok(())
        }
        Rule::Categorized {
            inner,
            category,
            keyword,
        } => {
            if category.is_empty() {
                return Err(HighlightError::Config(
                    "categorized rule has an empty category".to_string(),
                ));
            }
            if keyword.is_empty() {
                return Err(HighlightError::Config(format!(
                    "categorized rule '{}' has an empty keyword",
                    category
                )));
            }
            validate_rule(inner, depth + 1)
        }
    }
}
