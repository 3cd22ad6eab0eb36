//! Incremental trailing-whitespace tracking.
//!
//! A [`TrailingWhitespace`] tracker scans a buffer once and then keeps its
//! [`SpanIndex`] current by rescanning only the lines each [`EditEvent`]
//! touched. The [`fix`] module turns tracked spans into caret hints and
//! removes them.
//!
//! [`EditEvent`]: trailspace_primitives::EditEvent

pub mod error;
pub mod fix;
pub mod index;
pub mod scanner;
pub mod source;
mod span;
pub mod tracker;

pub use error::BufferError;
pub use fix::{Fix, Hint, Severity, hint_at, remove_all, remove_one, span_on_line};
pub use index::SpanIndex;
pub use scanner::{is_horizontal_whitespace, is_line_terminator, scan, scan_slice};
pub use source::{TextSink, TextSource};
pub use span::Span;
pub use tracker::{EditOutcome, TrailingWhitespace};
