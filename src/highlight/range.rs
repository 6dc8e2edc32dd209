//! Match ranges and overlap resolution
//!
//! A `Range` is a half-open byte interval over the input text, produced
//! by rule evaluation. Before rendering, staggered (partially overlapping,
//! non-nested) ranges are filtered out so the surviving set nests cleanly.

/// A half-open `[start, end)` match over the input text
///
/// Offsets are byte offsets on char boundaries. A range may carry a
/// category label and a display keyword inherited from a categorized rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    /// Byte offset where the match starts (inclusive)
    pub start: usize,
    /// Byte offset where the match ends (exclusive)
    pub end: usize,
    /// Category label, possibly composite ("parent child")
    pub category: Option<String>,
    /// Human-readable display name for the matched rule
    pub keyword: Option<String>,
}

impl Range {
    /// Create an uncategorized range
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            category: None,
            keyword: None,
        }
    }

    /// Get the length of this range in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the range is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether this range partially overlaps `other` without nesting
    ///
    /// Two ranges are staggered when exactly one endpoint of this range
    /// falls strictly inside the other's open interval. Identical,
    /// disjoint, and cleanly nested pairs are not staggered.
    pub fn is_staggered_with(&self, other: &Range) -> bool {
        let start_inside = self.start > other.start && self.start < other.end;
        let stop_inside = self.end > other.start && self.end < other.end;
        start_inside != stop_inside
    }
}

/// Drop ranges that stagger against an earlier-accepted range
///
/// Order-preserving stable filter: ranges are considered in evaluation
/// order, so earlier-declared rules win ties and the catalogue order acts
/// as a priority order. Nesting is allowed and expected. O(n*k) scan
/// against the accepted list (k = accepted count); fine at catalogue
/// scale, revisit with an interval tree if rule sets grow much larger.
pub fn remove_staggered(ranges: Vec<Range>) -> Vec<Range> {
    let mut accepted: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        let staggered = accepted.iter().any(|kept| range.is_staggered_with(kept));
        if !staggered {
            accepted.push(range);
        }
    }
    accepted
}
