//! # Rendering
//!
//! Maps [`Segment`]s to [`DisplayUnit`]s, a small closed set of visual
//! treatments that back ends ([`html`], [`plain`], the terminal viewer) turn
//! into concrete output. The mapping is a pure function; it carries no state.

pub mod html;
pub mod plain;

use crate::segment::{
    Segment,
    rules::{CHANNEL_SIGIL, MENTION_SIGIL},
};

/// Inline text treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStyle {
    Plain,
    /// Heavier weight.
    Strong,
    /// Slanted.
    Emphasis,
    /// Monospace on a distinct background.
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipKind {
    Mention,
    Channel,
}

impl ChipKind {
    pub fn sigil(self) -> char {
        match self {
            ChipKind::Mention => MENTION_SIGIL,
            ChipKind::Channel => CHANNEL_SIGIL,
        }
    }
}

/// One rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUnit {
    /// A run of inline text on the current line.
    Run { style: RunStyle, text: String },
    /// Visual line break inside plain text.
    LineBreak,
    /// Block-level monospace region, with the language shown as a label.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// Inline chip; `label` already carries its `@` or `#`.
    Chip { kind: ChipKind, label: String },
    /// An anchor showing its target verbatim.
    Link { href: String, new_context: bool },
}

/// Renders a whole message.
pub fn render(segments: &[Segment]) -> Vec<DisplayUnit> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        render_segment(segment, &mut out);
    }
    out
}

/// Appends the display units for one segment.
pub fn render_segment(segment: &Segment, out: &mut Vec<DisplayUnit>) {
    match segment {
        Segment::Text(text) => push_lines(text, out),
        Segment::Bold(text) => out.push(run(RunStyle::Strong, text)),
        Segment::Italic(text) => out.push(run(RunStyle::Emphasis, text)),
        Segment::InlineCode(text) => out.push(run(RunStyle::Code, text)),
        Segment::CodeBlock { language, code } => out.push(DisplayUnit::CodeBlock {
            language: language.clone(),
            code: code.clone(),
        }),
        Segment::Mention(name) => out.push(chip(ChipKind::Mention, name)),
        Segment::ChannelRef(name) => out.push(chip(ChipKind::Channel, name)),
        Segment::Link(url) => out.push(DisplayUnit::Link {
            href: url.clone(),
            new_context: true,
        }),
    }
}

fn run(style: RunStyle, text: &str) -> DisplayUnit {
    DisplayUnit::Run {
        style,
        text: text.to_string(),
    }
}

fn chip(kind: ChipKind, name: &str) -> DisplayUnit {
    DisplayUnit::Chip {
        kind,
        label: format!("{}{name}", kind.sigil()),
    }
}

/// Splits plain text on line breaks; empty lines produce only the break.
fn push_lines(text: &str, out: &mut Vec<DisplayUnit>) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(DisplayUnit::LineBreak);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            out.push(run(RunStyle::Plain, line));
        }
    }
}
