//! Highlight rules and their evaluation
//!
//! A `Rule` describes what to mark in the input text. Rules form a small
//! closed algebra: literals, regex patterns, fixed intervals, computed
//! rules, ordered lists, and categorized wrappers. Evaluating a rule
//! against a text is a pure function producing zero or more match ranges.

use std::fmt;

use regex::Regex;

use crate::error::{HighlightError, Result};

use super::range::Range;

/// Maximum nesting depth for function and list rules
pub const MAX_RULE_DEPTH: usize = 32;

/// A highlighting rule
///
/// Concrete variants evaluate directly; `Function`, `List`, and
/// `Categorized` compose other rules. Declaration order inside a `List`
/// matters: the overlap resolver treats it as a priority order.
pub enum Rule {
    /// Case-insensitive substring to find (non-overlapping matches)
    Literal(String),
    /// Regex rule; `global` takes every non-overlapping match, otherwise
    /// only the first match is taken
    Pattern {
        /// Compiled pattern (use `(?i)` for case-insensitive matching)
        regex: Regex,
        /// Whether to collect all matches or just the first
        global: bool,
    },
    /// Fixed `[start, end)` byte interval, applied regardless of content
    Interval(usize, usize),
    /// Computed rule: invoked with the text, result evaluated recursively
    Function(Box<dyn Fn(&str) -> Rule>),
    /// Ordered sequence of rules, results concatenated in order
    List(Vec<Rule>),
    /// Wraps a rule with a category label and a display keyword
    Categorized {
        /// The rule producing the matches
        inner: Box<Rule>,
        /// Category label stamped onto every produced range
        category: String,
        /// Display name stamped onto every produced range
        keyword: String,
    },
}

impl Rule {
    /// Create a literal rule
    pub fn literal(text: impl Into<String>) -> Self {
        Rule::Literal(text.into())
    }

    /// Create a global pattern rule from a regex string
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Rule::Pattern {
            regex: Regex::new(pattern)?,
            global: true,
        })
    }

    /// Create a first-match-only pattern rule from a regex string
    pub fn pattern_first(pattern: &str) -> Result<Self> {
        Ok(Rule::Pattern {
            regex: Regex::new(pattern)?,
            global: false,
        })
    }

    /// Create a computed rule
    pub fn function(f: impl Fn(&str) -> Rule + 'static) -> Self {
        Rule::Function(Box::new(f))
    }

    /// Wrap a rule with a category and display keyword
    pub fn categorized(inner: Rule, category: impl Into<String>, keyword: impl Into<String>) -> Self {
        Rule::Categorized {
            inner: Box::new(inner),
            category: category.into(),
            keyword: keyword.into(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Rule::Pattern { regex, global } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("global", global)
                .finish(),
            Rule::Interval(start, end) => f.debug_tuple("Interval").field(start).field(end).finish(),
            Rule::Function(_) => f.write_str("Function(..)"),
            Rule::List(rules) => f.debug_tuple("List").field(rules).finish(),
            Rule::Categorized {
                inner,
                category,
                keyword,
            } => f
                .debug_struct("Categorized")
                .field("inner", inner)
                .field("category", category)
                .field("keyword", keyword)
                .finish(),
        }
    }
}

/// Evaluate a rule against a text, producing raw match ranges
///
/// Evaluation never mutates shared state; it is a pure function of
/// `(text, rule)`. Empty literals and empty lists produce zero ranges.
pub fn evaluate(text: &str, rule: &Rule) -> Result<Vec<Range>> {
    evaluate_at_depth(text, rule, 0)
}

fn evaluate_at_depth(text: &str, rule: &Rule, depth: usize) -> Result<Vec<Range>> {
    if depth > MAX_RULE_DEPTH {
        return Err(HighlightError::RuleDepth(MAX_RULE_DEPTH));
    }

    match rule {
        Rule::Literal(needle) => Ok(literal_ranges(text, needle)),
        Rule::Pattern { regex, global } => Ok(pattern_ranges(text, regex, *global)),
        Rule::Interval(start, end) => Ok(interval_ranges(text, *start, *end)),
        Rule::Function(f) => {
            let computed = f(text);
            evaluate_at_depth(text, &computed, depth + 1)
        }
        Rule::List(rules) => {
            let mut ranges = Vec::new();
            for rule in rules {
                ranges.extend(evaluate_at_depth(text, rule, depth + 1)?);
            }
            Ok(ranges)
        }
        Rule::Categorized {
            inner,
            category,
            keyword,
        } => {
            let mut ranges = evaluate_at_depth(text, inner, depth + 1)?;
            for range in &mut ranges {
                // Category composes parent-first when the inner rule
                // already stamped one
                range.category = Some(match range.category.take() {
                    Some(existing) => format!("{} {}", category, existing),
                    None => category.clone(),
                });
                range.keyword = Some(keyword.clone());
            }
            Ok(ranges)
        }
    }
}

/// Scan for non-overlapping case-insensitive literal matches
///
/// Each search resumes at the previous match's end, so matches never
/// overlap and no look-ahead past a prior match occurs.
fn literal_ranges(text: &str, needle: &str) -> Vec<Range> {
    let mut ranges = Vec::new();
    if needle.is_empty() {
        return ranges;
    }

    let needle_lower: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let mut from = 0;
    while let Some((start, end)) = find_ci(text, &needle_lower, from) {
        ranges.push(Range::new(start, end));
        from = end;
    }
    ranges
}

/// Case-insensitive search starting at byte offset `from`
///
/// Offsets are byte offsets into the original text, so they stay valid
/// even when case folding changes a character's encoded length.
fn find_ci(text: &str, needle_lower: &[char], from: usize) -> Option<(usize, usize)> {
    let tail = text.get(from..)?;
    for (offset, _) in tail.char_indices() {
        if let Some(end) = match_ci_at(text, from + offset, needle_lower) {
            return Some((from + offset, end));
        }
    }
    None
}

/// Try to match the lowercased needle at byte offset `at`
///
/// Returns the byte offset just past the match. A match must consume
/// whole haystack characters: if the needle ends in the middle of a
/// character's case-fold expansion there is no match at this position.
fn match_ci_at(text: &str, at: usize, needle_lower: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in text[at..].char_indices() {
        for folded in ch.to_lowercase() {
            if matched >= needle_lower.len() || folded != needle_lower[matched] {
                return None;
            }
            matched += 1;
        }
        if matched == needle_lower.len() {
            return Some(at + offset + ch.len_utf8());
        }
    }
    None
}

/// Collect regex matches; non-global patterns take only the first match
fn pattern_ranges(text: &str, regex: &Regex, global: bool) -> Vec<Range> {
    if global {
        regex
            .find_iter(text)
            .map(|m| Range::new(m.start(), m.end()))
            .collect()
    } else {
        regex
            .find(text)
            .map(|m| Range::new(m.start(), m.end()))
            .into_iter()
            .collect()
    }
}

/// Produce a fixed interval, clamped to the text's char boundaries
fn interval_ranges(text: &str, start: usize, end: usize) -> Vec<Range> {
    let end = floor_char_boundary(text, end.min(text.len()));
    let start = floor_char_boundary(text, start.min(end));
    vec![Range::new(start, end)]
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_single_match() {
        let ranges = evaluate("act now", &Rule::literal("act")).unwrap();
        assert_eq!(ranges, vec![Range::new(0, 3)]);
    }

    #[test]
    fn test_literal_case_insensitive() {
        let ranges = evaluate("Act NOW, ACT fast", &Rule::literal("act")).unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].start, ranges[0].end), (0, 3));
        assert_eq!((ranges[1].start, ranges[1].end), (9, 12));
    }

    #[test]
    fn test_literal_non_overlapping() {
        // "aaa" in "aaaa" matches once at [0,3); the scan resumes at 3
        let ranges = evaluate("aaaa", &Rule::literal("aaa")).unwrap();
        assert_eq!(ranges, vec![Range::new(0, 3)]);
    }

    #[test]
    fn test_literal_empty_no_ranges() {
        let ranges = evaluate("anything", &Rule::literal("")).unwrap();
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_literal_unicode_offsets() {
        let ranges = evaluate("naïve FREE naïve", &Rule::literal("free")).unwrap();
        assert_eq!(ranges.len(), 1);
        let r = &ranges[0];
        assert_eq!(&"naïve FREE naïve"[r.start..r.end], "FREE");
    }

    #[test]
    fn test_pattern_global() {
        let rule = Rule::pattern(r"\d+").unwrap();
        let ranges = evaluate("a1 b22 c333", &rule).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!((ranges[2].start, ranges[2].end), (8, 11));
    }

    #[test]
    fn test_pattern_first_only() {
        let rule = Rule::pattern_first(r"\d+").unwrap();
        let ranges = evaluate("a1 b22 c333", &rule).unwrap();
        assert_eq!(ranges, vec![Range::new(1, 2)]);
    }

    #[test]
    fn test_interval_verbatim() {
        let ranges = evaluate("0123456789", &Rule::Interval(2, 5)).unwrap();
        assert_eq!(ranges, vec![Range::new(2, 5)]);
    }

    #[test]
    fn test_interval_clamped_to_text() {
        let ranges = evaluate("short", &Rule::Interval(2, 100)).unwrap();
        assert_eq!(ranges, vec![Range::new(2, 5)]);
    }

    #[test]
    fn test_function_rule() {
        // Highlight the whole text via a computed interval
        let rule = Rule::function(|text| Rule::Interval(0, text.len()));
        let ranges = evaluate("hello", &rule).unwrap();
        assert_eq!(ranges, vec![Range::new(0, 5)]);
    }

    #[test]
    fn test_function_depth_limit() {
        // A rule that always computes another function rule never settles
        fn looping(_: &str) -> Rule {
            Rule::function(looping)
        }
        let err = evaluate("text", &Rule::function(looping)).unwrap_err();
        assert!(matches!(err, HighlightError::RuleDepth(_)));
    }

    #[test]
    fn test_list_concatenates_in_order() {
        let rule = Rule::List(vec![Rule::literal("now"), Rule::literal("act")]);
        let ranges = evaluate("act now", &rule).unwrap();
        // List order, not text order
        assert_eq!((ranges[0].start, ranges[0].end), (4, 7));
        assert_eq!((ranges[1].start, ranges[1].end), (0, 3));
    }

    #[test]
    fn test_empty_list_no_ranges() {
        let ranges = evaluate("text", &Rule::List(Vec::new())).unwrap();
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_categorized_stamps_ranges() {
        let rule = Rule::categorized(Rule::literal("act"), "urgency", "Act");
        let ranges = evaluate("act now", &rule).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].category.as_deref(), Some("urgency"));
        assert_eq!(ranges[0].keyword.as_deref(), Some("Act"));
    }

    #[test]
    fn test_nested_categories_compose_parent_first() {
        let inner = Rule::categorized(Rule::literal("act"), "urgency", "Act");
        let outer = Rule::categorized(inner, "spam", "Spam");
        let ranges = evaluate("act now", &outer).unwrap();
        assert_eq!(ranges[0].category.as_deref(), Some("spam urgency"));
        assert_eq!(ranges[0].keyword.as_deref(), Some("Spam"));
    }
}
