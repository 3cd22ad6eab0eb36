use crate::range::{CharIdx, CharLen, CharRange};

/// Owned text carried by insertions.
pub type Tendril = String;

/// Replaces `[start, end)` with `replacement`, or deletes it when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
	pub start: CharIdx,
	pub end: CharIdx,
	pub replacement: Option<Tendril>,
}

impl Change {
	/// Creates a change that deletes `range`.
	pub fn delete(range: CharRange) -> Self {
		Self {
			start: range.start,
			end: range.end,
			replacement: None,
		}
	}

	/// Creates a change that inserts `text` at `pos`.
	pub fn insert(pos: CharIdx, text: impl Into<Tendril>) -> Self {
		Self {
			start: pos,
			end: pos,
			replacement: Some(text.into()),
		}
	}
}

/// Which side of an insertion a position sticks to when mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
	/// Stay in front of text inserted at the position.
	Left,
	/// Move past text inserted at the position.
	Right,
}

/// Inserted text together with its length in chars.
///
/// `char_len` always equals `text.chars().count()`; edit events report it
/// without recounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
	pub(super) text: Tendril,
	pub(super) char_len: CharLen,
}

impl Insertion {
	pub(super) fn new(text: Tendril) -> Self {
		let char_len = text.chars().count();
		Self { text, char_len }
	}
}

/// One step of a [`ChangeSet`](super::ChangeSet), read left to right over the
/// source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
	/// Keep the next N chars.
	Retain(CharLen),
	/// Drop the next N chars.
	Delete(CharLen),
	/// Insert text at the current position.
	Insert(Insertion),
}
