//! Per-buffer trailing-whitespace tracker.
//!
//! The tracker starts uninitialized. [`TrailingWhitespace::initialize`] scans
//! the whole buffer once; after that every edit reported through
//! [`TrailingWhitespace::on_edit`] rescans only the lines it touched.

use tracing::{debug, trace};
use trailspace_primitives::{CharRange, EditEvent};

use crate::error::{BufferError, Result};
use crate::index::SpanIndex;
use crate::scanner::scan;
use crate::source::TextSource;
use crate::span::Span;


#[derive(Debug, Clone)]
enum State<A> {
	Uninitialized,
	Ready(SpanIndex<A>),
}

/// What [`TrailingWhitespace::on_edit`] did with an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
	/// The tracker has not scanned the buffer yet; the edit was ignored.
	Skipped,
	/// The affected lines were rescanned.
	Recomputed {
		/// Region that was rescanned, in post-edit coordinates.
		range: CharRange,
		/// Number of spans found in that region.
		spans: usize,
	},
}

/// Incrementally maintained trailing-whitespace spans for one buffer.
#[derive(Debug, Clone)]
pub struct TrailingWhitespace<A> {
	attr: A,
	state: State<A>,
}

impl<A: Clone> TrailingWhitespace<A> {
	/// Creates an uninitialized tracker that tags every span with `attr`.
	pub fn new(attr: A) -> Self {
		Self {
			attr,
			state: State::Uninitialized,
		}
	}

	/// Returns the attribute attached to new spans.
	pub fn attr(&self) -> &A {
		&self.attr
	}

	/// Returns true once the buffer has been scanned.
	pub fn is_ready(&self) -> bool {
		matches!(self.state, State::Ready(_))
	}

	/// Returns the span index, or `None` before the first scan.
	pub fn index(&self) -> Option<&SpanIndex<A>> {
		match &self.state {
			State::Ready(index) => Some(index),
			State::Uninitialized => None,
		}
	}

	/// Returns the tracked spans in ascending order.
	///
	/// Empty before the first scan.
	pub fn spans(&self) -> &[Span<A>] {
		self.index().map(SpanIndex::spans).unwrap_or_default()
	}

	/// Drops all spans and returns to the uninitialized state.
	pub fn reset(&mut self) {
		self.state = State::Uninitialized;
	}

	/// Replaces the span attribute.
	///
	/// Existing spans keep the old attribute until the tracker is reset and
	/// scans again.
	pub fn set_attr(&mut self, attr: A) {
		self.attr = attr;
	}

	/// Scans the whole buffer and replaces every span.
	///
	/// Returns the number of spans found.
	pub fn initialize(&mut self, source: &impl TextSource) -> Result<usize> {
		let len = source.len_chars();
		let spans = scan(source.chars_in(CharRange::new(0, len))?, 0, &self.attr);
		let found = spans.len();
		debug!(len, spans = found, "trailing whitespace scanned");
		self.state = State::Ready(SpanIndex::from_sorted(spans));
		Ok(found)
	}

	/// Scans the buffer if that has not happened yet.
	pub fn ensure_initialized(&mut self, source: &impl TextSource) -> Result<()> {
		if !self.is_ready() {
			self.initialize(source)?;
		}
		Ok(())
	}

	/// Brings the spans up to date after `event` was applied to `source`.
	///
	/// The rescanned region runs from the start of the line holding the edit
	/// offset to the start of the line after the edit's far end. Text is read
	/// before the index is touched, so a failed read leaves the spans as they
	/// were.
	pub fn on_edit(&mut self, source: &impl TextSource, event: EditEvent) -> Result<EditOutcome> {
		let State::Ready(index) = &mut self.state else {
			trace!(?event, "tracker not initialized, edit skipped");
			return Ok(EditOutcome::Skipped);
		};

		let range = affected_lines(source, &event)?;
		let spans = scan(source.chars_in(range)?, range.start, &self.attr);
		let found = spans.len();

		index.shift(&event);
		index.remove_range(range.start, range.end, true);
		index.insert_spans(spans);

		trace!(?event, start = range.start, end = range.end, found, "trailing whitespace recomputed");
		Ok(EditOutcome::Recomputed { range, spans: found })
	}
}

/// Returns the post-edit region whose spans an edit can have changed.
fn affected_lines(source: &impl TextSource, event: &EditEvent) -> Result<CharRange> {
	let len = source.len_chars();
	let start = source.line_start(event.offset)?;
	let far = (event.offset + event.len).min(len);
	let end = match source.line_end_after(far) {
		Ok(end) => end,
		Err(BufferError::PastLastLine { .. }) => len,
		Err(err) => return Err(err),
	};
	Ok(CharRange::new(start, end))
}
