//! Visible-text output, for notifications and message list previews.

use super::DisplayUnit;

/// The text a reader would see, with markup removed and line breaks kept.
pub fn to_plain(units: &[DisplayUnit]) -> String {
    let mut out = String::new();
    for unit in units {
        match unit {
            DisplayUnit::Run { text, .. } => out.push_str(text),
            DisplayUnit::LineBreak => out.push('\n'),
            DisplayUnit::CodeBlock { code, .. } => out.push_str(code),
            DisplayUnit::Chip { label, .. } => out.push_str(label),
            DisplayUnit::Link { href, .. } => out.push_str(href),
        }
    }
    out
}

/// A single-line preview of at most `max_chars` characters.
///
/// Runs of whitespace (line breaks included) collapse to one space; a cut
/// preview ends with `…`, which counts toward the limit.
pub fn preview(units: &[DisplayUnit], max_chars: usize) -> String {
    let flat = to_plain(units)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if flat.chars().count() <= max_chars {
        return flat;
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut cut: String = flat.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
