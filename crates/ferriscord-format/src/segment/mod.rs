//! # Message Segmentation
//!
//! Splits a raw message body into an ordered list of typed [`Segment`]s.
//!
//! ## Architecture
//!
//! Segmentation is a scan-then-resolve pass rather than a recursive parse:
//!
//! 1. Every rule in [`rules::Rule::ORDERED`] scans the whole input and
//!    reports its own non-overlapping matches as candidates.
//! 2. Candidates are pooled and sorted by `(start offset, rule priority)`.
//! 3. First-wins: a candidate that intersects an already kept one is dropped,
//!    and its characters fall through into the surrounding text.
//! 4. Gaps between kept candidates become [`Segment::Text`].
//!
//! ## Modules
//!
//! - **`rules`**: ordered rule table, regex patterns and delimiter constants
//! - **`span`**: `Span` byte ranges into the message body
//! - **`types`**: `Segment`, `SegmentKind` and `SpannedSegment`
//! - **`segmenter`**: `segment()` and `segment_spanned()` entry points
//!
//! ## Rule Precedence
//!
//! Bold, italic, inline code, code block, mention, channel reference, link.
//! Priority only matters when two candidates start at the same offset; an
//! earlier start always wins. A fenced block therefore hides everything
//! inside it, and `**x**` is bold rather than a pair of empty italics.

pub mod rules;
pub mod segmenter;
pub mod span;
pub mod types;

pub use segmenter::{segment, segment_spanned};
pub use span::Span;
pub use types::{Segment, SegmentKind, SpannedSegment};
