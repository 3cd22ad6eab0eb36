/// A position in the text, measured in characters (not bytes).
///
/// This is the canonical coordinate space for trailspace.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// This is distinct from CharIdx to avoid accidentally passing an index
/// where a length is expected or vice versa.
pub type CharLen = usize;

/// A half-open character range `[start, end)`.
///
/// Unlike a selection, a `CharRange` has no direction: `start` is always
/// the lower bound. Constructors normalize reversed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharRange {
	/// First character in the range (inclusive).
	pub start: CharIdx,
	/// One past the last character in the range (exclusive).
	pub end: CharIdx,
}

impl CharRange {
	/// Creates a range from two bounds, swapping them if reversed.
	pub fn new(start: CharIdx, end: CharIdx) -> Self {
		if end < start {
			Self { start: end, end: start }
		} else {
			Self { start, end }
		}
	}

	/// Creates an empty range at `pos`.
	pub fn point(pos: CharIdx) -> Self {
		Self { start: pos, end: pos }
	}

	/// Creates a range starting at `start` spanning `len` characters.
	pub fn with_len(start: CharIdx, len: CharLen) -> Self {
		Self {
			start,
			end: start + len,
		}
	}

	/// Returns the length of the range in characters.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	/// Returns true if the range covers no characters.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

impl From<std::ops::Range<CharIdx>> for CharRange {
	fn from(range: std::ops::Range<CharIdx>) -> Self {
		Self::new(range.start, range.end)
	}
}

impl From<CharRange> for std::ops::Range<CharIdx> {
	fn from(range: CharRange) -> Self {
		range.start..range.end
	}
}
