//! Edit events and errors shared between buffers and their observers.

use thiserror::Error;

use crate::range::{CharIdx, CharLen};

/// Whether an edit added or removed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
	/// `len` characters were inserted at `offset`.
	Insert,
	/// `len` characters starting at `offset` were removed.
	Delete,
}

/// A single buffer mutation, reported after it has been applied.
///
/// Offsets are valid in the buffer as it stands when the event is delivered.
/// For an insert, `[offset, offset + len)` is the inserted text. For a delete,
/// the removed text used to occupy `[offset, offset + len)` and `offset` is
/// now the position where the removal happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditEvent {
	/// Position of the edit.
	pub offset: CharIdx,
	/// Number of characters inserted or removed.
	pub len: CharLen,
	/// Direction of the edit.
	pub kind: EditKind,
}

impl EditEvent {
	/// Creates an insert event.
	pub const fn insert(offset: CharIdx, len: CharLen) -> Self {
		Self {
			offset,
			len,
			kind: EditKind::Insert,
		}
	}

	/// Creates a delete event.
	pub const fn delete(offset: CharIdx, len: CharLen) -> Self {
		Self {
			offset,
			len,
			kind: EditKind::Delete,
		}
	}

}

/// Errors raised when an edit cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	/// The target buffer is flagged read-only.
	#[error("buffer is read-only")]
	ReadOnly,

	/// The edit addresses text outside the buffer.
	#[error("edit range {start}..{end} is out of bounds for buffer of length {len}")]
	OutOfBounds {
		/// Start of the requested range.
		start: CharIdx,
		/// End of the requested range.
		end: CharIdx,
		/// Buffer length at the time of the edit.
		len: CharLen,
	},
}

/// Outcome of committing a transaction to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitResult {
	/// Buffer version before the commit.
	pub version_before: u64,
	/// Buffer version after the commit.
	pub version_after: u64,
	/// Whether an undo step was recorded for the commit.
	pub undo_recorded: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn out_of_bounds_message() {
		let err = EditError::OutOfBounds {
			start: 4,
			end: 9,
			len: 5,
		};
		assert_eq!(
			err.to_string(),
			"edit range 4..9 is out of bounds for buffer of length 5"
		);
	}
}
