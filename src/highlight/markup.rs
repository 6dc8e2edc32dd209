//! Markup rendering
//!
//! Turns the input text plus its sorted boundaries into an HTML-safe
//! string that reproduces the text exactly, with `<mark>` tags wrapped
//! around each highlight. Stripping the inserted tags and un-escaping
//! entities recovers the input byte for byte.

use super::boundary::{Boundary, BoundaryKind};

/// Rendering options for the markup output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class prefix for categorized marks, e.g. "category-" yields
    /// `<mark class="category-urgency">`
    pub mark_class_prefix: String,
    /// Insert `<wbr>` after every literal space so consecutive spaces
    /// wrap like they do in a native text box on legacy engines
    pub space_break_hint: bool,
    /// Append an extra newline when the text ends with one, so a
    /// scrollable overlay does not clip the final empty line
    pub pad_trailing_newline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mark_class_prefix: "category-".to_string(),
            space_break_hint: false,
            pad_trailing_newline: true,
        }
    }
}

/// One element of the rendered output, in final (left-to-right) order
///
/// Marker insertion is expressed as segment building rather than
/// repeated in-place string slicing: the text is cut at boundary
/// indices right to left, then the pieces are emitted in order. No
/// index arithmetic happens after the first pass, and marker pieces
/// can never collide with literal text.
#[derive(Debug)]
enum Piece<'a> {
    Text(&'a str),
    Start(Option<&'a str>),
    Stop,
}

/// Render text and boundaries into highlight markup
///
/// `boundaries` must be sorted as produced by
/// [`build_boundaries`](super::boundary::build_boundaries) (descending
/// index, start before stop at ties).
pub fn render_markup(text: &str, boundaries: &[Boundary], options: &RenderOptions) -> String {
    let mut pieces: Vec<Piece> = Vec::with_capacity(boundaries.len() + 1);

    // Cut the text right to left so earlier cuts never shift later ones
    let mut tail = text.len();
    for boundary in boundaries {
        let index = boundary.index.min(tail);
        pieces.push(Piece::Text(&text[index..tail]));
        match boundary.kind {
            BoundaryKind::Start => pieces.push(Piece::Start(boundary.category.as_deref())),
            BoundaryKind::Stop => pieces.push(Piece::Stop),
        }
        tail = index;
    }
    pieces.push(Piece::Text(&text[..tail]));
    pieces.reverse();

    if options.pad_trailing_newline {
        if let Some(at) = trailing_pad_position(&pieces) {
            pieces.insert(at, Piece::Text("\n"));
        }
    }

    let mut out = String::with_capacity(text.len() + boundaries.len() * 24);
    for piece in &pieces {
        match piece {
            Piece::Text(segment) => push_escaped(&mut out, segment, options),
            Piece::Start(Some(category)) => {
                out.push_str("<mark class=\"");
                out.push_str(&options.mark_class_prefix);
                out.push_str(category);
                out.push_str("\">");
            }
            Piece::Start(None) => out.push_str("<mark>"),
            Piece::Stop => out.push_str("</mark>"),
        }
    }
    out
}

/// Escape a text segment and apply the space-break hint
///
/// Only literal text is escaped; markers are emitted structurally and
/// never pass through here. The break hint runs on the escaped text,
/// which is equivalent since escaping never produces a space.
fn push_escaped(out: &mut String, segment: &str, options: &RenderOptions) {
    for ch in segment.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            ' ' if options.space_break_hint => out.push_str(" <wbr>"),
            _ => out.push(ch),
        }
    }
}

/// Where to insert the scroll-alignment newline, if anywhere
///
/// The pad applies when the text ends with a newline, optionally
/// followed by a single closing marker; the extra newline goes between
/// the two so the closing tag stays at the very end.
fn trailing_pad_position(pieces: &[Piece]) -> Option<usize> {
    let mut at = pieces.len();
    match pieces.last()? {
        Piece::Text(s) if !s.is_empty() => {
            return s.ends_with('\n').then_some(at);
        }
        Piece::Text(_) => at -= 1,
        _ => return None,
    }

    if at == 0 || !matches!(pieces[at - 1], Piece::Stop) {
        return None;
    }
    at -= 1;

    match at.checked_sub(1).map(|i| &pieces[i]) {
        Some(Piece::Text(s)) if s.ends_with('\n') => Some(at),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::boundary::build_boundaries;
    use crate::highlight::range::Range;

    fn render(text: &str, ranges: Vec<Range>) -> String {
        let boundaries = build_boundaries(&ranges);
        render_markup(text, &boundaries, &RenderOptions::default())
    }

    /// Undo tags, escapes, and trailing-newline padding for round-trips
    fn strip(markup: &str, text_had_trailing_newline: bool) -> String {
        let mut out = String::new();
        let mut rest = markup;
        while let Some(open) = rest.find('<') {
            out.push_str(&rest[..open]);
            match rest[open..].find('>') {
                Some(close) => rest = &rest[open + close + 1..],
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        let mut out = out.replace("&lt;", "<").replace("&gt;", ">");
        if text_had_trailing_newline {
            out.pop();
        }
        out
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render("act now", Vec::new()), "act now");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(render("", Vec::new()), "");
    }

    #[test]
    fn test_single_categorized_mark() {
        let mut range = Range::new(0, 3);
        range.category = Some("urgency".into());
        assert_eq!(
            render("act now", vec![range]),
            "<mark class=\"category-urgency\">act</mark> now"
        );
    }

    #[test]
    fn test_uncategorized_mark() {
        assert_eq!(render("act now", vec![Range::new(4, 7)]), "act <mark>now</mark>");
    }

    #[test]
    fn test_nested_marks() {
        let markup = render("abcdefghij", vec![Range::new(0, 10), Range::new(3, 7)]);
        assert_eq!(markup, "<mark>abc<mark>defg</mark>hij</mark>");
    }

    #[test]
    fn test_adjacent_marks_do_not_cross() {
        let markup = render("abcdef", vec![Range::new(0, 3), Range::new(3, 6)]);
        assert_eq!(markup, "<mark>abc</mark><mark>def</mark>");
    }

    #[test]
    fn test_escaping() {
        let markup = render("a <b> c", vec![Range::new(2, 5)]);
        assert_eq!(markup, "a <mark>&lt;b&gt;</mark> c");
    }

    #[test]
    fn test_trailing_newline_padded() {
        assert_eq!(render("line\n", Vec::new()), "line\n\n");
    }

    #[test]
    fn test_trailing_newline_before_final_stop() {
        // Highlight covers the trailing newline: the pad goes inside
        // the mark, keeping the closing tag at the very end
        let markup = render("line\n", vec![Range::new(0, 5)]);
        assert_eq!(markup, "<mark>line\n\n</mark>");
    }

    #[test]
    fn test_no_pad_without_trailing_newline() {
        assert_eq!(render("line", Vec::new()), "line");
    }

    #[test]
    fn test_pad_can_be_disabled() {
        let options = RenderOptions {
            pad_trailing_newline: false,
            ..Default::default()
        };
        assert_eq!(render_markup("line\n", &[], &options), "line\n");
    }

    #[test]
    fn test_space_break_hint() {
        let options = RenderOptions {
            space_break_hint: true,
            ..Default::default()
        };
        assert_eq!(render_markup("a  b", &[], &options), "a <wbr> <wbr>b");
    }

    #[test]
    fn test_round_trip() {
        let cases: Vec<(&str, Vec<Range>)> = vec![
            ("act now", vec![Range::new(0, 3)]),
            ("a <b> c\n", vec![Range::new(0, 8)]),
            ("nested here", vec![Range::new(0, 11), Range::new(2, 6)]),
            ("", Vec::new()),
            ("   \n", Vec::new()),
            ("text with {{sl-mark-stop}} inside", vec![Range::new(0, 4)]),
        ];
        for (text, ranges) in cases {
            let markup = render(text, ranges);
            assert_eq!(strip(&markup, text.ends_with('\n')), text, "for {:?}", text);
        }
    }

    #[test]
    fn test_idempotent_output() {
        let ranges = vec![Range::new(0, 3), Range::new(4, 7)];
        let a = render("act now", ranges.clone());
        let b = render("act now", ranges);
        assert_eq!(a, b);
    }
}
