use trailspace_primitives::{CharIdx, CharLen, CharRange};

/// One run of trailing whitespace, tagged with a highlight attribute.
///
/// `start < end` always holds. The attribute is opaque to this crate; it is
/// whatever the owner of the index wants attached to every highlighted run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span<A> {
	/// First whitespace character of the run.
	pub start: CharIdx,
	/// Position of the line terminator (or end of buffer) ending the run.
	pub end: CharIdx,
	/// Highlight attribute shared by all spans of a buffer.
	pub attr: A,
}

impl<A> Span<A> {
	/// Creates a span over `[start, end)`.
	pub fn new(start: CharIdx, end: CharIdx, attr: A) -> Self {
		debug_assert!(start < end, "span {start}..{end} is empty");
		Self { start, end, attr }
	}

	/// Returns the covered range without the attribute.
	#[inline]
	pub fn range(&self) -> CharRange {
		CharRange::new(self.start, self.end)
	}

	/// Returns the number of whitespace characters in the run.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	/// Returns true if the span covers no characters.
	///
	/// Only possible transiently while an index rebases offsets.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start >= self.end
	}
}
