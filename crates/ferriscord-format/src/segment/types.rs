use super::rules::{BOLD, CHANNEL_SIGIL, FENCE, ITALIC, MENTION_SIGIL, TICK};
use super::span::Span;

/// One typed chunk of a message's display content.
///
/// Delimiters are stripped from every variant except `Text`, which keeps
/// its source substring verbatim (line breaks included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any recognised markup.
    Text(String),
    /// `**text**`
    Bold(String),
    /// `*text*`
    Italic(String),
    /// `` `text` ``
    InlineCode(String),
    /// A fenced block. `language` is the tag on the opening fence line, if any.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// `@name`, stored without the `@`.
    Mention(String),
    /// `#name`, stored without the `#`.
    ChannelRef(String),
    /// A bare `http://` or `https://` URL, unmodified.
    Link(String),
}

/// Fieldless mirror of [`Segment`] for callers that only need the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Text,
    Bold,
    Italic,
    InlineCode,
    CodeBlock,
    Mention,
    ChannelRef,
    Link,
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Text(_) => SegmentKind::Text,
            Segment::Bold(_) => SegmentKind::Bold,
            Segment::Italic(_) => SegmentKind::Italic,
            Segment::InlineCode(_) => SegmentKind::InlineCode,
            Segment::CodeBlock { .. } => SegmentKind::CodeBlock,
            Segment::Mention(_) => SegmentKind::Mention,
            Segment::ChannelRef(_) => SegmentKind::ChannelRef,
            Segment::Link(_) => SegmentKind::Link,
        }
    }

    /// The display text of the segment (the body, for code blocks).
    pub fn text(&self) -> &str {
        match self {
            Segment::Text(t)
            | Segment::Bold(t)
            | Segment::Italic(t)
            | Segment::InlineCode(t)
            | Segment::Mention(t)
            | Segment::ChannelRef(t)
            | Segment::Link(t) => t,
            Segment::CodeBlock { code, .. } => code,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Segment::CodeBlock { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    /// Re-inserts the stripped delimiters.
    ///
    /// For everything except a code block whose opening fence sat on its own
    /// line without a tag, this is exactly the source text the segment was
    /// cut from.
    pub fn to_markup(&self) -> String {
        match self {
            Segment::Text(t) | Segment::Link(t) => t.clone(),
            Segment::Bold(t) => format!("{BOLD}{t}{BOLD}"),
            Segment::Italic(t) => format!("{ITALIC}{t}{ITALIC}"),
            Segment::InlineCode(t) => format!("{TICK}{t}{TICK}"),
            Segment::CodeBlock {
                language: Some(lang),
                code,
            } => format!("{FENCE}{lang}\n{code}{FENCE}"),
            Segment::CodeBlock {
                language: None,
                code,
            } => format!("{FENCE}{code}{FENCE}"),
            Segment::Mention(name) => format!("{MENTION_SIGIL}{name}"),
            Segment::ChannelRef(name) => format!("{CHANNEL_SIGIL}{name}"),
        }
    }
}

/// A segment together with the source range it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedSegment {
    /// Full source range, delimiters included.
    pub span: Span,
    pub segment: Segment,
}
