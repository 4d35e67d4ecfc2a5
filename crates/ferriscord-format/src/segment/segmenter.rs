use super::{
    rules::{Captured, Rule},
    span::Span,
    types::{Segment, SpannedSegment},
};

/// One rule match found while scanning, before overlap resolution.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    rule: Rule,
    captured: Captured,
}

impl Candidate {
    fn span(&self) -> Span {
        self.captured.full
    }

    /// Explicit ordering key: start offset, then rule priority.
    fn sort_key(&self) -> (usize, usize) {
        (self.captured.full.start, self.rule.priority())
    }

    fn into_segment(self, input: &str) -> Segment {
        let body = self.captured.body.slice(input).to_string();
        match self.rule {
            Rule::Bold => Segment::Bold(body),
            Rule::Italic => Segment::Italic(body),
            Rule::InlineCode => Segment::InlineCode(body),
            Rule::CodeBlock => Segment::CodeBlock {
                language: self.captured.tag.map(|t| t.slice(input).to_string()),
                code: body,
            },
            Rule::Mention => Segment::Mention(body),
            Rule::ChannelRef => Segment::ChannelRef(body),
            Rule::Link => Segment::Link(body),
        }
    }
}

/// Splits a message body into display segments.
///
/// The result covers the whole input in order: text between recognised
/// markup comes back as [`Segment::Text`]. Empty input gives an empty vector;
/// any other input gives at least one segment. Unterminated markup is plain
/// text, never an error.
///
/// # Overlaps
/// Every rule scans the full input. Candidates are then sorted by start
/// offset, with rule priority breaking ties, and a candidate is dropped when
/// it intersects one already kept. So `` `a *b* c` `` is a single inline code
/// segment and `**x**` is bold rather than two italics.
pub fn segment(input: &str) -> Vec<Segment> {
    segment_spanned(input)
        .into_iter()
        .map(|s| s.segment)
        .collect()
}

/// Like [`segment`], keeping the source span of each segment.
///
/// Spans are contiguous, non-overlapping and together cover `0..input.len()`.
pub fn segment_spanned(input: &str) -> Vec<SpannedSegment> {
    let mut candidates = scan(input);
    candidates.sort_by_key(Candidate::sort_key);

    let kept = resolve_overlaps(candidates);
    log::trace!("segment: kept {} markup match(es)", kept.len());

    let mut out = Vec::with_capacity(kept.len() * 2 + 1);
    let mut cursor = 0;

    // Helper to flush the gap before a match as a Text segment
    fn flush_text(out: &mut Vec<SpannedSegment>, input: &str, start: usize, end: usize) {
        if end > start {
            let span = Span::new(start, end);
            out.push(SpannedSegment {
                span,
                segment: Segment::Text(span.slice(input).to_string()),
            });
        }
    }

    for candidate in kept {
        let span = candidate.span();
        flush_text(&mut out, input, cursor, span.start);
        cursor = span.end;
        out.push(SpannedSegment {
            span,
            segment: candidate.into_segment(input),
        });
    }

    flush_text(&mut out, input, cursor, input.len());
    out
}

/// Runs every rule over the input, in priority order.
fn scan(input: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for rule in Rule::ORDERED {
        candidates.extend(
            rule.regex()
                .captures_iter(input)
                .filter_map(|caps| rule.capture(&caps))
                .map(|captured| Candidate { rule, captured }),
        );
    }
    log::trace!("segment: {} candidate(s) in {} byte(s)", candidates.len(), input.len());
    candidates
}

/// First-wins: walks sorted candidates and keeps those that do not touch an
/// already kept range.
///
/// Kept ranges are disjoint and sorted, so only the last one can reach a later
/// candidate.
fn resolve_overlaps(sorted: Vec<Candidate>) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::with_capacity(sorted.len());
    for candidate in sorted {
        let overlaps = kept
            .last()
            .is_some_and(|prev| prev.span().intersects(candidate.span()));
        if !overlaps {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn plain_message_is_one_text_segment() {
        assert_eq!(segment("no markup here"), vec![text("no markup here")]);
    }

    #[test]
    fn bold_wins_tie_with_italic() {
        assert_eq!(segment("**bold**"), vec![Segment::Bold("bold".into())]);
    }

    #[test]
    fn italic_alone() {
        assert_eq!(segment("*italic*"), vec![Segment::Italic("italic".into())]);
    }

    #[test]
    fn triple_asterisks_resolve_to_bold_then_text() {
        // Bold matches `***x**` lazily; the trailing `*` is left over
        assert_eq!(
            segment("***x***"),
            vec![Segment::Bold("*x".into()), text("*")]
        );
    }

    #[test]
    fn inline_code_suppresses_italic_inside() {
        assert_eq!(
            segment("`code with *italic* inside`"),
            vec![Segment::InlineCode("code with *italic* inside".into())]
        );
    }

    #[test]
    fn mention_and_channel_between_text() {
        assert_eq!(
            segment("hello @alice and #general!"),
            vec![
                text("hello "),
                Segment::Mention("alice".into()),
                text(" and "),
                Segment::ChannelRef("general".into()),
                text("!"),
            ]
        );
    }

    #[test]
    fn fenced_block_with_language() {
        assert_eq!(
            segment("```rust\nfn main() {}\n```"),
            vec![Segment::CodeBlock {
                language: Some("rust".into()),
                code: "fn main() {}\n".into(),
            }]
        );
    }

    #[test]
    fn fenced_block_language_is_the_opening_line() {
        assert_eq!(
            segment("```c++\nint x;\n```"),
            vec![Segment::CodeBlock {
                language: Some("c++".into()),
                code: "int x;\n".into(),
            }]
        );
        assert_eq!(
            segment("```shell-session\n$ ls\n```"),
            vec![Segment::CodeBlock {
                language: Some("shell-session".into()),
                code: "$ ls\n".into(),
            }]
        );
    }

    #[test]
    fn fenced_block_with_crlf_fence() {
        assert_eq!(
            segment("```rust\r\nfn main() {}\r\n```"),
            vec![Segment::CodeBlock {
                language: Some("rust".into()),
                code: "fn main() {}\r\n".into(),
            }]
        );
    }

    #[test]
    fn link_stops_at_whitespace() {
        assert_eq!(
            segment("see https://example.com/x for info"),
            vec![
                text("see "),
                Segment::Link("https://example.com/x".into()),
                text(" for info"),
            ]
        );
    }

    #[test]
    fn unterminated_bold_is_text() {
        assert_eq!(segment("a **stray marker"), vec![text("a **stray marker")]);
    }

    #[test]
    fn empty_emphasis_stays_text() {
        assert_eq!(segment("****"), vec![text("****")]);
    }

    #[test]
    fn url_fragment_is_not_a_channel() {
        assert_eq!(
            segment("https://docs.rs/regex#syntax"),
            vec![Segment::Link("https://docs.rs/regex#syntax".into())]
        );
    }

    #[test]
    fn code_block_suppresses_inner_markup() {
        assert_eq!(
            segment("```\n@alice **not bold** `tick`\n```"),
            vec![Segment::CodeBlock {
                language: None,
                code: "@alice **not bold** `tick`\n".into(),
            }]
        );
    }

    #[test]
    fn mention_directly_followed_by_channel() {
        assert_eq!(
            segment("@alice#general"),
            vec![
                Segment::Mention("alice".into()),
                Segment::ChannelRef("general".into()),
            ]
        );
    }

    #[test]
    fn line_breaks_stay_in_text() {
        assert_eq!(
            segment("one\ntwo *three*\n"),
            vec![
                text("one\ntwo "),
                Segment::Italic("three".into()),
                text("\n"),
            ]
        );
    }

    #[test]
    fn spans_cover_input_in_order() {
        let input = "hi **there** @bob, see `x` and https://a.b/c\n```sh\nls\n```";
        let spanned = segment_spanned(input);

        let mut cursor = 0;
        for s in &spanned {
            assert_eq!(s.span.start, cursor);
            assert!(!s.span.is_empty());
            cursor = s.span.end;
        }
        assert_eq!(cursor, input.len());

        let rebuilt: String = spanned.iter().map(|s| s.span.slice(input)).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        assert_eq!(
            segment("héllo **wörld** @zoë"),
            vec![
                text("héllo "),
                Segment::Bold("wörld".into()),
                text(" "),
                Segment::Mention("zoë".into()),
            ]
        );
    }
}
