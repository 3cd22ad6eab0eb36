//! Sorted, non-overlapping store of trailing-whitespace spans.
//!
//! Spans are kept in a `Vec` ordered by start. Because spans never overlap,
//! their ends are ordered too, so every lookup is a `partition_point` on one
//! of the two bounds.

use trailspace_primitives::{CharIdx, CharRange, EditEvent, EditKind};

use crate::span::Span;


/// The tracked spans of one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanIndex<A> {
	spans: Vec<Span<A>>,
}

impl<A> Default for SpanIndex<A> {
	fn default() -> Self {
		Self { spans: Vec::new() }
	}
}

impl<A> SpanIndex<A> {
	/// Creates an empty index.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an index from spans already in scan order.
	pub fn from_sorted(spans: Vec<Span<A>>) -> Self {
		debug_assert!(
			spans.windows(2).all(|w| w[0].end <= w[1].start),
			"spans must be sorted and disjoint"
		);
		Self { spans }
	}

	/// Returns the number of stored spans.
	pub fn len(&self) -> usize {
		self.spans.len()
	}

	/// Returns true if no spans are stored.
	pub fn is_empty(&self) -> bool {
		self.spans.is_empty()
	}

	/// Returns all spans in ascending order.
	pub fn spans(&self) -> &[Span<A>] {
		&self.spans
	}

	/// Iterates spans in ascending order.
	pub fn iter(&self) -> std::slice::Iter<'_, Span<A>> {
		self.spans.iter()
	}

	/// Drops every span.
	pub fn clear(&mut self) {
		self.spans.clear();
	}

	/// Returns the spans overlapping `[start, end)`.
	///
	/// An empty range selects the span containing `start`, if any.
	pub fn query(&self, start: CharIdx, end: CharIdx) -> &[Span<A>] {
		let lo = self.spans.partition_point(|s| s.end <= start);
		let hi = if start == end {
			self.spans.partition_point(|s| s.start <= start)
		} else {
			self.spans.partition_point(|s| s.start < end)
		};
		&self.spans[lo..hi.max(lo)]
	}

	/// Returns the first span overlapping `[start, end)`.
	pub fn first_in(&self, start: CharIdx, end: CharIdx) -> Option<&Span<A>> {
		self.query(start, end).first()
	}

	/// Removes spans intersecting `[start, end)` and returns how many went.
	///
	/// With `inclusive`, a span that merely touches `start` goes too, and an
	/// empty range removes the span containing or touching that point. A span
	/// starting exactly at `end` is kept either way, since it belongs to the
	/// line after the range.
	pub fn remove_range(&mut self, start: CharIdx, end: CharIdx, inclusive: bool) -> usize {
		let (lo, hi) = match (inclusive, start == end) {
			(false, true) => return 0,
			(false, false) => (
				self.spans.partition_point(|s| s.end <= start),
				self.spans.partition_point(|s| s.start < end),
			),
			(true, true) => (
				self.spans.partition_point(|s| s.end < start),
				self.spans.partition_point(|s| s.start <= start),
			),
			(true, false) => (
				self.spans.partition_point(|s| s.end < start),
				self.spans.partition_point(|s| s.start < end),
			),
		};
		if hi <= lo {
			return 0;
		}
		self.spans.drain(lo..hi);
		hi - lo
	}

	/// Adds spans, replacing any stored span they overlap.
	pub fn insert_spans(&mut self, spans: impl IntoIterator<Item = Span<A>>) {
		for span in spans {
			if span.is_empty() {
				continue;
			}
			self.remove_range(span.start, span.end, false);
			let at = self.spans.partition_point(|s| s.start < span.start);
			self.spans.insert(at, span);
		}
	}

	/// Rebases stored offsets across one edit.
	///
	/// Offsets at or after an insertion point move right by its length, except
	/// that a span ending exactly at the insertion point keeps its end. Offsets
	/// inside a deleted range collapse onto its start, and later offsets move
	/// left. Spans left empty are dropped.
	pub fn shift(&mut self, event: &EditEvent) {
		let offset = event.offset;
		let len = event.len;
		if len == 0 {
			return;
		}

		let first = self.spans.partition_point(|s| s.end < offset);
		match event.kind {
			EditKind::Insert => {
				for span in &mut self.spans[first..] {
					if span.start >= offset {
						span.start += len;
					}
					if span.end > offset {
						span.end += len;
					}
				}
			}
			EditKind::Delete => {
				let removed = CharRange::with_len(offset, len);
				let map = |pos: CharIdx| {
					if pos >= removed.end {
						pos - len
					} else {
						pos.min(offset)
					}
				};
				for span in &mut self.spans[first..] {
					span.start = map(span.start);
					span.end = map(span.end);
				}
				self.spans.retain(|s| !s.is_empty());
			}
		}
	}
}

impl<'a, A> IntoIterator for &'a SpanIndex<A> {
	type Item = &'a Span<A>;
	type IntoIter = std::slice::Iter<'a, Span<A>>;

	fn into_iter(self) -> Self::IntoIter {
		self.spans.iter()
	}
}
