//! Buffer access traits.
//!
//! The tracker never owns text. It reads through [`TextSource`] and the fix
//! layer writes through [`TextSink`]. Borrowing enforces the access scopes:
//! holding `&impl TextSource` is a consistent read, and `&mut impl TextSink`
//! excludes every other reader for the duration of an atomic edit.

use std::ops::Range;

use trailspace_primitives::{CharIdx, CharLen, CharRange, Rope, rope};

use crate::error::{BufferError, Result};

/// Read access to a character buffer.
pub trait TextSource {
	/// Returns the buffer length in characters.
	fn len_chars(&self) -> CharLen;

	/// Returns the characters in `range`.
	fn chars_in(&self, range: CharRange) -> Result<impl Iterator<Item = char> + '_>;

	/// Returns the zero-based line containing `offset`.
	fn line_of(&self, offset: CharIdx) -> Result<usize>;

	/// Returns where the line containing `offset` begins.
	fn line_start(&self, offset: CharIdx) -> Result<CharIdx>;

	/// Returns where the line after the one containing `offset` begins.
	///
	/// Fails with [`BufferError::PastLastLine`] when `offset` is on the last line.
	fn line_end_after(&self, offset: CharIdx) -> Result<CharIdx>;

	/// Checks that `range` lies within the buffer.
	fn check_range(&self, range: CharRange) -> Result<()> {
		let len = self.len_chars();
		if range.end > len {
			return Err(BufferError::OutOfBounds {
				start: range.start,
				end: range.end,
				len,
			});
		}
		Ok(())
	}

	/// Returns the line containing `offset`, including its terminator.
	///
	/// The last line extends to the end of the buffer.
	fn line_range(&self, offset: CharIdx) -> Result<CharRange> {
		let start = self.line_start(offset)?;
		let end = match self.line_end_after(offset) {
			Ok(end) => end,
			Err(BufferError::PastLastLine { .. }) => self.len_chars(),
			Err(err) => return Err(err),
		};
		Ok(CharRange::new(start, end))
	}
}

/// Write access to a character buffer.
pub trait TextSink: TextSource {
	/// Removes `len` characters starting at `start`.
	fn remove(&mut self, start: CharIdx, len: CharLen) -> Result<()>;

	/// Runs `f` as one atomic edit group.
	///
	/// Every removal made inside `f` is applied as a unit for undo purposes.
	fn atomic_edit<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
	where
		Self: Sized;
}

impl TextSource for Rope {
	fn len_chars(&self) -> CharLen {
		Rope::len_chars(self)
	}

	fn chars_in(&self, range: CharRange) -> Result<impl Iterator<Item = char> + '_> {
		self.check_range(range)?;
		Ok(self.slice(Range::<CharIdx>::from(range)).chars())
	}

	fn line_of(&self, offset: CharIdx) -> Result<usize> {
		self.check_range(CharRange::point(offset))?;
		Ok(rope::line_of(self.slice(..), offset))
	}

	fn line_start(&self, offset: CharIdx) -> Result<CharIdx> {
		self.check_range(CharRange::point(offset))?;
		Ok(rope::line_start(self.slice(..), offset))
	}

	fn line_end_after(&self, offset: CharIdx) -> Result<CharIdx> {
		self.check_range(CharRange::point(offset))?;
		rope::next_line_start(self.slice(..), offset).ok_or(BufferError::PastLastLine { offset })
	}
}

impl TextSink for Rope {
	fn remove(&mut self, start: CharIdx, len: CharLen) -> Result<()> {
		let range = CharRange::with_len(start, len);
		self.check_range(range)?;
		Rope::remove(self, Range::<CharIdx>::from(range));
		Ok(())
	}

	fn atomic_edit<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
		f(self)
	}
}
