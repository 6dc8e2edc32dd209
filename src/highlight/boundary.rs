//! Boundary events for markup insertion
//!
//! Each resolved range becomes a start and a stop boundary. Boundaries
//! are sorted for right-to-left insertion so that inserting one marker
//! never shifts the index of a marker not yet processed.

use std::cmp::Ordering;

use super::range::Range;

/// Whether a boundary opens or closes a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Start,
    Stop,
}

/// A single start or stop event derived from a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Start or stop
    pub kind: BoundaryKind,
    /// Byte offset in the input text
    pub index: usize,
    /// Category carried by start boundaries
    pub category: Option<String>,
    /// Display keyword carried by start boundaries
    pub keyword: Option<String>,
}

/// Convert resolved ranges into boundaries sorted for right-to-left insertion
pub fn build_boundaries(ranges: &[Range]) -> Vec<Boundary> {
    let mut boundaries = Vec::with_capacity(ranges.len() * 2);
    for range in ranges {
        boundaries.push(Boundary {
            kind: BoundaryKind::Start,
            index: range.start,
            category: range.category.clone(),
            keyword: range.keyword.clone(),
        });
        boundaries.push(Boundary {
            kind: BoundaryKind::Stop,
            index: range.end,
            category: None,
            keyword: None,
        });
    }
    sort_boundaries(&mut boundaries);
    boundaries
}

/// Backwards sort, since marks are inserted right to left
///
/// Descending by index. At equal indices a start boundary is processed
/// before a stop boundary, which places the closing tag to the left of
/// the opening tag in the final output: adjacent highlights close before
/// the next one opens, and tags never cross. Same-kind ties keep their
/// original order (the sort is stable).
fn sort_boundaries(boundaries: &mut [Boundary]) {
    boundaries.sort_by(|a, b| match b.index.cmp(&a.index) {
        Ordering::Equal => match (a.kind, b.kind) {
            (BoundaryKind::Stop, BoundaryKind::Start) => Ordering::Greater,
            (BoundaryKind::Start, BoundaryKind::Stop) => Ordering::Less,
            _ => Ordering::Equal,
        },
        other => other,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_boundaries_per_range() {
        let ranges = vec![Range::new(0, 3), Range::new(4, 7)];
        let boundaries = build_boundaries(&ranges);
        assert_eq!(boundaries.len(), 4);
    }

    #[test]
    fn test_sorted_descending() {
        let ranges = vec![Range::new(0, 3), Range::new(4, 7)];
        let boundaries = build_boundaries(&ranges);
        let indices: Vec<usize> = boundaries.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![7, 4, 3, 0]);
    }

    #[test]
    fn test_start_before_stop_at_same_index() {
        // Adjacent ranges share index 3: the start there must be
        // processed before the stop so the tags do not cross
        let ranges = vec![Range::new(0, 3), Range::new(3, 6)];
        let boundaries = build_boundaries(&ranges);
        assert_eq!(boundaries[0].index, 6);
        assert_eq!(boundaries[1].index, 3);
        assert_eq!(boundaries[1].kind, BoundaryKind::Start);
        assert_eq!(boundaries[2].index, 3);
        assert_eq!(boundaries[2].kind, BoundaryKind::Stop);
        assert_eq!(boundaries[3].index, 0);
    }

    #[test]
    fn test_start_carries_category_and_keyword() {
        let mut range = Range::new(1, 4);
        range.category = Some("urgency".into());
        range.keyword = Some("Act".into());
        let boundaries = build_boundaries(&[range]);

        let start = boundaries.iter().find(|b| b.kind == BoundaryKind::Start).unwrap();
        assert_eq!(start.category.as_deref(), Some("urgency"));
        assert_eq!(start.keyword.as_deref(), Some("Act"));

        let stop = boundaries.iter().find(|b| b.kind == BoundaryKind::Stop).unwrap();
        assert!(stop.category.is_none());
    }

    #[test]
    fn test_nested_ranges_order() {
        let ranges = vec![Range::new(0, 10), Range::new(3, 7)];
        let boundaries = build_boundaries(&ranges);
        let shape: Vec<(usize, BoundaryKind)> = boundaries.iter().map(|b| (b.index, b.kind)).collect();
        assert_eq!(
            shape,
            vec![
                (10, BoundaryKind::Stop),
                (7, BoundaryKind::Stop),
                (3, BoundaryKind::Start),
                (0, BoundaryKind::Start),
            ]
        );
    }
}
