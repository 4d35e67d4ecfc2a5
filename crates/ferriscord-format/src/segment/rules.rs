//! Markup rules and the delimiters they own.
//!
//! The rule table is ordered: a rule's index is its priority, and it breaks
//! ties between candidates that start at the same offset. Delimiter constants
//! live here so nothing else hardcodes `**` or `@`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::span::Span;

pub const BOLD: &str = "**";
pub const ITALIC: &str = "*";
pub const TICK: &str = "`";
pub const FENCE: &str = "```";
pub const MENTION_SIGIL: char = '@';
pub const CHANNEL_SIGIL: char = '#';

/// A markup rule. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Bold,
    Italic,
    InlineCode,
    CodeBlock,
    Mention,
    ChannelRef,
    Link,
}

/// The source ranges a rule captured for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captured {
    /// Whole match, delimiters included.
    pub full: Span,
    /// Text the segment displays.
    pub body: Span,
    /// Code block language tag, when present and non-empty.
    pub tag: Option<Span>,
}

impl Rule {
    /// All rules, highest priority first.
    pub const ORDERED: [Rule; 7] = [
        Rule::Bold,
        Rule::Italic,
        Rule::InlineCode,
        Rule::CodeBlock,
        Rule::Mention,
        Rule::ChannelRef,
        Rule::Link,
    ];

    /// Position in [`Rule::ORDERED`]; lower wins a tie.
    pub fn priority(self) -> usize {
        self as usize
    }

    fn pattern(self) -> &'static str {
        match self {
            // `.` stops at line breaks, so emphasis never spans lines
            Rule::Bold => r"\*\*(.*?)\*\*",
            Rule::Italic => r"\*(.*?)\*",
            Rule::InlineCode => r"`([^`\n]+)`",
            // The opening line is the tag; without a line break there is none
            Rule::CodeBlock => r"```(?:([^`\n]*)\n)?((?s:.*?))```",
            Rule::Mention => r"@(\w+)",
            Rule::ChannelRef => r"#([\w-]+)",
            Rule::Link => r"https?://\S+",
        }
    }

    /// The compiled pattern. Compiled once and shared; matching through
    /// `captures_iter` keeps all cursor state local to the caller.
    pub fn regex(self) -> &'static Regex {
        static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
        let compiled = COMPILED.get_or_init(|| {
            Rule::ORDERED
                .iter()
                .map(|rule| Regex::new(rule.pattern()).expect("Invalid segment rule regex"))
                .collect()
        });
        &compiled[self.priority()]
    }

    /// Extracts the ranges of one match, or `None` when the match does not
    /// make a usable segment (emphasis with nothing inside it).
    pub fn capture(self, caps: &Captures<'_>) -> Option<Captured> {
        let full: Span = caps.get(0)?.into();
        let (body, tag) = match self {
            Rule::Link => (full, None),
            Rule::CodeBlock => {
                let tag = caps.get(1).map(trimmed).filter(|t| !t.is_empty());
                (caps.get(2)?.into(), tag)
            }
            _ => (caps.get(1)?.into(), None),
        };

        if matches!(self, Rule::Bold | Rule::Italic) && body.is_empty() {
            return None;
        }

        Some(Captured { full, body, tag })
    }
}

/// Span of the match with surrounding whitespace (a CRLF `\r` included)
/// left out.
fn trimmed(m: regex::Match<'_>) -> Span {
    let text = m.as_str();
    let start = m.start() + (text.len() - text.trim_start().len());
    Span::new(start, start + text.trim().len())
}
