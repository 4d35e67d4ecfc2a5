//! Display units to styled ratatui lines.

use ferriscord_format::{ChipKind, DisplayUnit, RunStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CODE_INDENT: &str = "  ";

fn run_style(style: RunStyle) -> Style {
    match style {
        RunStyle::Plain => Style::default(),
        RunStyle::Strong => Style::default().add_modifier(Modifier::BOLD),
        RunStyle::Emphasis => Style::default().add_modifier(Modifier::ITALIC),
        RunStyle::Code => Style::default().fg(Color::Yellow).bg(Color::DarkGray),
    }
}

fn chip_style(kind: ChipKind) -> Style {
    let color = match kind {
        ChipKind::Mention => Color::Magenta,
        ChipKind::Channel => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

fn code_block_style() -> Style {
    Style::default().fg(Color::Gray).bg(Color::Black)
}

/// Lays out a rendered message as terminal lines.
///
/// Inline units share a line until a `LineBreak`; code blocks always start on
/// their own line, with the language label (if any) above the body.
pub fn message_lines(units: &[DisplayUnit]) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    // A code block already ends its own line
    let mut after_block = false;

    for unit in units {
        let ends_block_line = after_block && matches!(unit, DisplayUnit::LineBreak);
        after_block = matches!(unit, DisplayUnit::CodeBlock { .. });
        if ends_block_line {
            continue;
        }
        match unit {
            DisplayUnit::Run { style, text } => {
                current.push(Span::styled(text.clone(), run_style(*style)));
            }
            DisplayUnit::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
            DisplayUnit::CodeBlock { language, code } => {
                if !current.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                if let Some(lang) = language {
                    lines.push(Line::from(Span::styled(
                        lang.clone(),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    )));
                }
                for code_line in code.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("{CODE_INDENT}{code_line}"),
                        code_block_style(),
                    )));
                }
            }
            DisplayUnit::Chip { kind, label } => {
                current.push(Span::styled(label.clone(), chip_style(*kind)));
            }
            DisplayUnit::Link { href, .. } => {
                current.push(Span::styled(href.clone(), link_style()));
            }
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferriscord_format::{render, segment};
    use pretty_assertions::assert_eq;

    fn lines_of(message: &str) -> Vec<Line<'static>> {
        message_lines(&render(&segment(message)))
    }

    fn texts(line: &Line<'_>) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn empty_message_has_no_lines() {
        assert!(lines_of("").is_empty());
    }

    #[test]
    fn inline_units_share_a_line() {
        let lines = lines_of("hi **there** @bob");
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), vec!["hi ", "there", " ", "@bob"]);
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[0].spans[3].style.fg, Some(Color::Magenta));
    }

    #[test]
    fn line_breaks_start_new_lines() {
        let lines = lines_of("one\n\nthree");
        assert_eq!(lines.len(), 3);
        assert_eq!(texts(&lines[0]), vec!["one"]);
        assert!(lines[1].spans.is_empty());
        assert_eq!(texts(&lines[2]), vec!["three"]);
    }

    #[test]
    fn code_block_gets_label_and_indented_body() {
        let lines = lines_of("look: ```rust\nlet a = 1;\nlet b = 2;\n```");
        assert_eq!(lines.len(), 4);
        assert_eq!(texts(&lines[0]), vec!["look: "]);
        assert_eq!(texts(&lines[1]), vec!["rust"]);
        assert_eq!(texts(&lines[2]), vec!["  let a = 1;"]);
        assert_eq!(texts(&lines[3]), vec!["  let b = 2;"]);
    }

    #[test]
    fn line_break_after_code_block_adds_no_blank_line() {
        let lines = lines_of("```a```\nafter");
        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[0]), vec!["  a"]);
        assert_eq!(texts(&lines[1]), vec!["after"]);

        let lines = lines_of("```a```\n\nafter");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.is_empty());
    }

    #[test]
    fn links_are_underlined() {
        let lines = lines_of("https://example.com");
        let span = &lines[0].spans[0];
        assert_eq!(span.content, "https://example.com");
        assert!(span.style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
