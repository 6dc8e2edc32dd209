//! Summary aggregation and results panel
//!
//! Aggregates resolved categorized ranges into per-category counts,
//! derives word count, read time, and the heuristic spam score, and
//! renders the results panel. The scoring thresholds are presentation
//! logic kept for compatibility with the original checker; they are not
//! part of the range algebra and can change without affecting the
//! highlighting pipeline.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::range::Range;

/// Overall rating derived from the spam score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Great,
    Okay,
    Poor,
}

impl Rating {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Great => "Great",
            Rating::Okay => "Okay",
            Rating::Poor => "Poor",
        }
    }

    /// CSS class used in the rendered panel
    fn class(&self) -> &'static str {
        match self {
            Rating::Great => "text-great",
            Rating::Okay => "text-okay",
            Rating::Poor => "text-poor",
        }
    }
}

/// Per-category aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStats {
    /// Number of resolved hits in this category
    pub count: usize,
    /// Display keywords of the hits, in match order
    pub keywords: Vec<String>,
}

/// Aggregated results for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Whitespace-delimited token count of the raw text
    pub word_count: usize,
    /// Estimated read time in minutes (200 words per minute, rounded)
    pub read_minutes: u32,
    /// Category name to stats, in deterministic order
    pub categories: BTreeMap<String, CategoryStats>,
    /// Heuristic spam score
    pub score: u32,
    /// Rating derived from the score
    pub rating: Rating,
}

/// Categories that add a severity bonus to the score
const HIGH_SEVERITY: [&str; 2] = ["money", "shady"];
const MEDIUM_SEVERITY: [&str; 2] = ["urgency", "overpromise"];

/// Build the summary from the raw text and the resolved ranges
pub fn summarize(text: &str, ranges: &[Range]) -> Summary {
    let word_count = text.split_whitespace().count();
    let read_minutes = (word_count as f64 / 200.0).round() as u32;

    let mut categories: BTreeMap<String, CategoryStats> = BTreeMap::new();
    let mut hits = 0u32;
    for range in ranges {
        let category = match &range.category {
            Some(category) => category,
            None => continue,
        };
        let stats = categories.entry(category.clone()).or_default();
        stats.count += 1;
        if let Some(keyword) = &range.keyword {
            stats.keywords.push(keyword.clone());
        }
        hits += 1;
    }

    let mut score = hits;
    if HIGH_SEVERITY.iter().any(|c| categories.contains_key(*c)) {
        score += 20;
    }
    if MEDIUM_SEVERITY.iter().any(|c| categories.contains_key(*c)) {
        score += 10;
    }

    let rating = if score > 20 {
        Rating::Poor
    } else if score > 5 {
        Rating::Okay
    } else {
        Rating::Great
    };

    Summary {
        word_count,
        read_minutes,
        categories,
        score,
        rating,
    }
}

impl Summary {
    /// Read time as shown in the panel
    pub fn read_time_label(&self) -> String {
        if self.read_minutes > 0 {
            format!("{} Min", self.read_minutes)
        } else {
            "Few Seconds".to_string()
        }
    }

    /// Render the results panel as HTML
    ///
    /// With fewer than two words there is nothing to score and a
    /// placeholder message is shown instead.
    pub fn to_html(&self) -> String {
        if self.word_count < 2 {
            return "<i>Add content to get your spam score.</i>".to_string();
        }

        let mut html = String::new();
        html.push_str("<table>");
        let _ = write!(
            html,
            "<tr><td>Score:</td><td><span class=\"{}\">{}</span></td></tr>",
            self.rating.class(),
            self.rating.label()
        );
        let _ = write!(html, "<tr><td>Words:</td><td>{}</td></tr>", self.word_count);
        let _ = write!(
            html,
            "<tr><td>Read Time:</td><td>{}</td></tr>",
            self.read_time_label()
        );
        html.push_str("</table>");

        html.push_str("<ul>");
        for (name, stats) in &self.categories {
            // Only the known categories get a panel entry; anything else
            // still counts toward the score
            let display = match category_display(name) {
                Some(display) => display,
                None => continue,
            };
            let _ = write!(
                html,
                "<li class=\"spam-category-{}\">{} <span>({})</span></li>",
                name, display, stats.count
            );
        }
        html.push_str("</ul>");
        html
    }
}

/// Panel display name for a known category
pub fn category_display(name: &str) -> Option<&'static str> {
    match name {
        "overpromise" => Some("\u{1F929} Overpromise"),
        "urgency" => Some("\u{1F6A8} Urgency"),
        "money" => Some("\u{1F4B0} Money"),
        "shady" => Some("\u{1F51E} Shady"),
        "unnatural" => Some("\u{1F4AC} Unnatural"),
        _ => None,
    }
}
