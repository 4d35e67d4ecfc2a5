pub mod io;
pub mod message;
pub mod render;
pub mod segment;

// Re-export key types for easier usage
pub use message::{Author, LengthStatus, Message, MessageLimits, Reaction, Reactions};
pub use render::{ChipKind, DisplayUnit, RunStyle, render};
pub use segment::{Segment, SegmentKind, Span, SpannedSegment, segment, segment_spanned};
