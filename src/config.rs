//! Rule-file support
//!
//! Loads a rule catalogue and render options from a TOML file, so the
//! built-in catalogue can be replaced without recompiling.
//!
//! Format:
//! ```text
//! [options]
//! mark_class_prefix = "category-"
//! space_break_hint = false
//! pad_trailing_newline = true
//!
//! [[rules]]
//! pattern = "(?i)\\bact now\\b"
//! keyword = "Act now"
//! category = "urgency"
//!
//! [[rules]]
//! literal = "free"
//! category = "shady"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::highlight::{HighlightConfig, RenderOptions, Rule};

/// A parsed rule file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuleFile {
    /// Render options section
    pub options: OptionsSection,
    /// Rule entries, in priority order
    pub rules: Vec<RuleEntry>,
}

/// The `[options]` section, mirroring [`RenderOptions`]
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OptionsSection {
    pub mark_class_prefix: String,
    pub space_break_hint: bool,
    pub pad_trailing_newline: bool,
}

impl Default for OptionsSection {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            mark_class_prefix: defaults.mark_class_prefix,
            space_break_hint: defaults.space_break_hint,
            pad_trailing_newline: defaults.pad_trailing_newline,
        }
    }
}

/// One `[[rules]]` entry
///
/// Exactly one of `literal`, `pattern`, or `interval` must be set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuleEntry {
    /// Case-insensitive substring to find
    pub literal: Option<String>,
    /// Regex pattern (use `(?i)` for case-insensitive matching)
    pub pattern: Option<String>,
    /// Fixed `[start, end)` interval
    pub interval: Option<[usize; 2]>,
    /// Whether a pattern takes every match (default) or just the first
    pub global: Option<bool>,
    /// Display name; defaults to the literal or pattern text
    pub keyword: Option<String>,
    /// Category label; when present the entry becomes a categorized rule
    pub category: Option<String>,
}

impl RuleFile {
    /// Load and convert a rule file
    pub fn load(path: &Path) -> Result<HighlightConfig> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse rule-file contents
    pub fn parse(contents: &str) -> Result<HighlightConfig> {
        let file: RuleFile = toml::from_str(contents)?;
        file.into_config()
    }

    fn into_config(self) -> Result<HighlightConfig> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for (index, entry) in self.rules.into_iter().enumerate() {
            let rule = entry
                .into_rule()
                .map_err(|e| HighlightError::Config(format!("rule {}: {}", index + 1, e)))?;
            rules.push(rule);
        }
        Ok(HighlightConfig {
            highlight: Rule::List(rules),
            options: RenderOptions {
                mark_class_prefix: self.options.mark_class_prefix,
                space_break_hint: self.options.space_break_hint,
                pad_trailing_newline: self.options.pad_trailing_newline,
            },
        })
    }
}

impl RuleEntry {
    fn into_rule(self) -> std::result::Result<Rule, String> {
        let matchers =
            self.literal.is_some() as u8 + self.pattern.is_some() as u8 + self.interval.is_some() as u8;
        if matchers != 1 {
            return Err("expected exactly one of literal, pattern, or interval".to_string());
        }

        let default_keyword;
        let base = if let Some(text) = self.literal {
            default_keyword = text.clone();
            Rule::Literal(text)
        } else if let Some(pattern) = self.pattern {
            default_keyword = pattern.clone();
            let rule = if self.global.unwrap_or(true) {
                Rule::pattern(&pattern)
            } else {
                Rule::pattern_first(&pattern)
            };
            rule.map_err(|e| e.to_string())?
        } else {
            let [start, end] = self.interval.unwrap();
            if start > end {
                return Err(format!("interval start {} exceeds end {}", start, end));
            }
            default_keyword = format!("[{}, {})", start, end);
            Rule::Interval(start, end)
        };

        match self.category {
            Some(category) if category.is_empty() => Err("category must not be empty".to_string()),
            Some(category) => Ok(Rule::categorized(
                base,
                category,
                self.keyword.unwrap_or(default_keyword),
            )),
            None => Ok(base),
        }
    }
}
