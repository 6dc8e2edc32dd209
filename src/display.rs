//! Terminal rendering of highlight reports

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use unicode_width::UnicodeWidthStr;

use spamlight::error::Result;
use spamlight::highlight::{category_display, Boundary, BoundaryKind, Summary};

/// Foreground color for a category
///
/// Composite categories ("parent child") take the parent's color.
fn category_color(category: &str) -> Color {
    match category.split_whitespace().next().unwrap_or("") {
        "urgency" => Color::Red,
        "shady" => Color::Yellow,
        "money" => Color::Magenta,
        "overpromise" => Color::Green,
        "unnatural" => Color::Blue,
        _ => Color::Cyan,
    }
}

/// Print the text with highlighted segments colored by category
///
/// Boundaries come sorted for right-to-left markup insertion; walking
/// them in reverse gives a left-to-right pass. A stack of active colors
/// handles nested highlights: the innermost one wins.
pub fn print_highlighted(text: &str, boundaries: &[Boundary]) -> Result<()> {
    let mut stdout = io::stdout();
    let mut stack: Vec<Color> = Vec::new();
    let mut pos = 0;

    for boundary in boundaries.iter().rev() {
        let index = boundary.index.clamp(pos, text.len());
        write_segment(&mut stdout, &text[pos..index], stack.last().copied())?;
        match boundary.kind {
            BoundaryKind::Start => {
                let color = boundary
                    .category
                    .as_deref()
                    .map(category_color)
                    .unwrap_or(Color::Cyan);
                stack.push(color);
            }
            BoundaryKind::Stop => {
                stack.pop();
            }
        }
        pos = index;
    }
    write_segment(&mut stdout, &text[pos..], None)?;

    queue!(stdout, Print("\n"))?;
    stdout.flush()?;
    Ok(())
}

fn write_segment(out: &mut impl Write, segment: &str, color: Option<Color>) -> Result<()> {
    if segment.is_empty() {
        return Ok(());
    }
    match color {
        Some(color) => queue!(out, SetForegroundColor(color), Print(segment), ResetColor)?,
        None => queue!(out, Print(segment))?,
    }
    Ok(())
}

/// Print the summary as an aligned table plus a category list
pub fn print_summary(summary: &Summary) -> Result<()> {
    let mut stdout = io::stdout();

    if summary.word_count < 2 {
        queue!(stdout, Print("Add content to get your spam score.\n"))?;
        stdout.flush()?;
        return Ok(());
    }

    let rows = [
        ("Score", format!("{} ({})", summary.rating.label(), summary.score)),
        ("Words", summary.word_count.to_string()),
        ("Read Time", summary.read_time_label()),
    ];
    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    for (label, value) in &rows {
        queue!(
            stdout,
            Print(format!("{:label_width$}  {}\n", label, value))
        )?;
    }

    if summary.categories.is_empty() {
        stdout.flush()?;
        return Ok(());
    }

    queue!(stdout, Print("\n"))?;
    // Pad by display width, not char count: the emoji in category names
    // are double-width in most terminals
    let name_width = summary
        .categories
        .keys()
        .map(|name| display_name(name).width())
        .max()
        .unwrap_or(0);
    for (name, stats) in &summary.categories {
        let display = display_name(name);
        let pad = " ".repeat(name_width.saturating_sub(display.width()));
        queue!(
            stdout,
            SetForegroundColor(category_color(name)),
            Print(format!("{}{}  ({})\n", display, pad, stats.count)),
            ResetColor
        )?;
    }

    stdout.flush()?;
    Ok(())
}

fn display_name(category: &str) -> &str {
    category_display(category).unwrap_or(category)
}
